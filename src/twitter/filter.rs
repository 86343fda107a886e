//! Filtering a list of tweets by author, time window or keywords.
//!
//! Every filter returns clones of the matching tweets in input order and
//! leaves the input untouched.

use log::{debug, warn};

use super::parsing::is_valid_username;
use super::tweet::{Timespan, Tweet};

/// Finds the tweets written by `username`, compared case-insensitively.
///
/// # Parameters
///
/// - `tweets`: The tweets to filter
/// - `username`: A Twitter username; it need not appear in `tweets`
///
/// # Returns
///
/// All and only the tweets whose author is `username`, in input order.
pub fn written_by(tweets: &[Tweet], username: &str) -> Vec<Tweet> {
    if !is_valid_username(username) {
        warn!("Filtering by malformed username '{}'", username);
    }

    let wanted = username.to_lowercase();
    let matches: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| tweet.author_key() == wanted)
        .cloned()
        .collect();

    debug!("{} of {} tweets written by {}", matches.len(), tweets.len(), wanted);
    matches
}

/// Finds the tweets sent during `timespan`, both ends included.
pub fn in_timespan(tweets: &[Tweet], timespan: &Timespan) -> Vec<Tweet> {
    tweets
        .iter()
        .filter(|tweet| timespan.contains(tweet.timestamp))
        .cloned()
        .collect()
}

/// Finds the tweets whose text contains at least one of `words`.
///
/// Matching is a case-insensitive substring test, so `"talk"` matches
/// `"Talking"`. A tweet matching several words appears once. An empty word
/// list matches nothing.
pub fn containing<S: AsRef<str>>(tweets: &[Tweet], words: &[S]) -> Vec<Tweet> {
    let words: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();

    tweets
        .iter()
        .filter(|tweet| {
            let text = tweet.text.to_lowercase();
            words.iter().any(|word| text.contains(word.as_str()))
        })
        .cloned()
        .collect()
}
