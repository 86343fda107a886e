//! Follows-graph inference and influencer ranking.
//!
//! The graph is guessed from two kinds of evidence in tweet text:
//!
//! - **Mentions**: an author who writes `@someone` probably follows them.
//! - **Shared hashtags**: authors who use the same `#tag` share an interest
//!   and are assumed to follow each other.
//!
//! Influence is then measured as the number of distinct users inferred to
//! follow someone.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use super::parsing::{extract_hashtags, extract_lenient_mentions};
use super::tweet::Tweet;
use crate::config::{AuthorEntries, GraphConfig};

/// Inferred directed adjacency: user -> users they may follow.
///
/// Keys and members are stored lowercase and a user never follows
/// themselves. Ordered containers keep iteration and serialized output
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowsGraph(BTreeMap<String, BTreeSet<String>>);

impl FollowsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge `from -> to`.
    ///
    /// Both names are lowercased first. Self-edges are refused.
    ///
    /// # Returns
    ///
    /// `true` if the edge was not present before.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let from = from.to_lowercase();
        let to = to.to_lowercase();
        if from == to {
            return false;
        }
        self.0.entry(from).or_default().insert(to)
    }

    /// Gives `user` a key with no outgoing edges if it has none yet.
    pub fn ensure_user(&mut self, user: &str) {
        self.0.entry(user.to_lowercase()).or_default();
    }

    /// The users `user` is inferred to follow, if `user` is a key.
    pub fn follows(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.0.get(&user.to_lowercase())
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.follows(from)
            .is_some_and(|targets| targets.contains(&to.to_lowercase()))
    }

    /// The users present as keys, in ascending order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.0.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, BTreeSet<String>> {
        self.0
    }
}

impl From<BTreeMap<String, BTreeSet<String>>> for FollowsGraph {
    /// Builds a graph from a raw adjacency map, canonicalizing names and
    /// dropping self-edges. Keys with empty sets are kept.
    fn from(map: BTreeMap<String, BTreeSet<String>>) -> Self {
        let mut graph = FollowsGraph::new();
        for (from, targets) in map {
            graph.ensure_user(&from);
            for to in targets {
                graph.add_edge(&from, &to);
            }
        }
        graph
    }
}

/// Guesses who might follow whom, using the default [`GraphConfig`].
///
/// Authors with no outgoing evidence get no key in the result.
pub fn guess_follows_graph(tweets: &[Tweet]) -> FollowsGraph {
    guess_follows_graph_with(tweets, &GraphConfig::default())
}

/// Guesses who might follow whom from mentions and shared hashtags.
///
/// 1. Every lenient mention in a tweet (`@foo`, `@foo-bar`) other than the
///    author becomes an edge author -> mentioned user.
/// 2. For every hashtag, the distinct authors who used it anywhere in
///    `tweets` are collected. When two or more share a tag, each of them
///    gets an edge to every other one.
///
/// With [`AuthorEntries::AllAuthors`] every author also gets a key, even
/// without evidence.
///
/// # Parameters
///
/// - `tweets`: The tweets to draw evidence from; not modified
/// - `config`: Graph construction options
///
/// # Returns
///
/// The inferred [`FollowsGraph`]; empty for an empty input.
pub fn guess_follows_graph_with(tweets: &[Tweet], config: &GraphConfig) -> FollowsGraph {
    let mut graph = FollowsGraph::new();
    let mut hashtag_users: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut mention_edges = 0usize;

    for tweet in tweets {
        let author = tweet.author_key();

        if config.author_entries == AuthorEntries::AllAuthors {
            graph.ensure_user(&author);
        }

        for mentioned in extract_lenient_mentions(&tweet.text) {
            if graph.add_edge(&author, &mentioned) {
                mention_edges += 1;
            }
        }

        for tag in extract_hashtags(&tweet.text) {
            hashtag_users.entry(tag).or_default().insert(author.clone());
        }
    }

    let mut hashtag_edges = 0usize;
    for users in hashtag_users.values().filter(|users| users.len() >= 2) {
        for follower in users {
            for followed in users {
                if graph.add_edge(follower, followed) {
                    hashtag_edges += 1;
                }
            }
        }
    }

    debug!(
        "Inferred follows graph from {} tweets: {} users, {} mention edges, {} hashtag edges ({} hashtags)",
        tweets.len(),
        graph.len(),
        mention_edges,
        hashtag_edges,
        hashtag_users.len()
    );
    graph
}

/// Counts, for every followed user, the distinct users inferred to follow them.
///
/// Users that appear only as edge targets are counted too. Users nobody
/// follows are absent from the result.
pub fn follower_counts(graph: &FollowsGraph) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for targets in graph.0.values() {
        for followed in targets {
            *counts.entry(followed.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn ranked(graph: &FollowsGraph) -> Vec<(String, usize)> {
    let mut ranking: Vec<(String, usize)> = follower_counts(graph).into_iter().collect();
    ranking.sort_by(|(a_user, a_count), (b_user, b_count)| {
        b_count.cmp(a_count).then_with(|| a_user.cmp(b_user))
    });
    ranking
}

/// Ranks users by inferred follower count, highest first.
///
/// Only users with at least one follower are listed. Equal counts are
/// ordered by username ascending.
pub fn influencers(graph: &FollowsGraph) -> Vec<String> {
    ranked(graph).into_iter().map(|(user, _)| user).collect()
}

/// The first `n` entries of the influencer ranking, with follower counts.
pub fn top_influencers(graph: &FollowsGraph, n: usize) -> Vec<(String, usize)> {
    let mut ranking = ranked(graph);
    ranking.truncate(n);
    ranking
}
