//! Extraction of timespans and mentioned users from a list of tweets.

use std::collections::BTreeSet;

use log::debug;

use super::parsing::extract_mentions;
use super::tweet::{Timespan, Tweet};
use crate::error::AnalysisError;

/// Gets the minimal timespan containing the timestamp of every tweet.
///
/// # Parameters
///
/// - `tweets`: The tweets to scan; not modified
///
/// # Returns
///
/// - `Ok(Timespan)`: `[earliest, latest]` over all timestamps; a single
///   tweet, or tweets sharing one timestamp, yield `start == end`
/// - `Err(AnalysisError::EmptyInput)`: If `tweets` is empty
pub fn get_timespan(tweets: &[Tweet]) -> Result<Timespan, AnalysisError> {
    let first = tweets.first().ok_or(AnalysisError::EmptyInput)?;

    let (start, end) = tweets.iter().fold(
        (first.timestamp, first.timestamp),
        |(start, end), tweet| (start.min(tweet.timestamp), end.max(tweet.timestamp)),
    );

    debug!(
        "Timespan over {} tweets: {} to {}",
        tweets.len(),
        start,
        end
    );
    Timespan::new(start, end)
}

/// Gets the set of usernames mentioned anywhere in the tweets' text.
///
/// Mentions follow the strict boundary rule of
/// [`extract_mentions`](super::parsing::extract_mentions), so email addresses
/// do not count. Usernames are lowercased, so `@Bob` and `@bob` give one entry.
pub fn get_mentioned_users(tweets: &[Tweet]) -> BTreeSet<String> {
    let mentioned: BTreeSet<String> = tweets
        .iter()
        .flat_map(|tweet| extract_mentions(&tweet.text))
        .collect();

    debug!(
        "Found {} distinct mentioned users in {} tweets",
        mentioned.len(),
        tweets.len()
    );
    mentioned
}
