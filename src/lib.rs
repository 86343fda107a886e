//! # Tweetgraph Library
//!
//! A Rust library that analyzes a fixed, in-memory collection of tweets. Each
//! call processes the whole input in one pass; nothing is stored between calls.
//!
//! ## Features
//!
//! - Timespan of a set of tweets and the usernames they @mention
//! - Filtering by author, time window or keywords
//! - A guessed follows graph built from mentions and shared hashtags
//! - Influencer ranking by inferred follower count
//! - Structured logging through the `log` facade
//!
//! ## Configuration
//!
//! - `TWEETGRAPH_AUTHOR_ENTRIES`: `evidence` (default) or `all`, see [`GraphConfig::from_env`]
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tweetgraph::{guess_follows_graph, influencers, Tweet};
//!
//! let at = Utc.with_ymd_and_hms(2016, 2, 17, 10, 0, 0).unwrap();
//! let tweets = vec![
//!     Tweet::new(1, "alice", "Hi @bob!", at),
//!     Tweet::new(2, "alice", "Also hello @charlie!", at),
//! ];
//!
//! let graph = guess_follows_graph(&tweets);
//! assert!(graph.contains_edge("alice", "bob"));
//! assert_eq!(influencers(&graph), vec!["bob", "charlie"]);
//! ```

pub mod config;
pub mod error;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{AuthorEntries, GraphConfig};
pub use error::AnalysisError;
pub use twitter::{
    containing, follower_counts, get_mentioned_users, get_timespan, guess_follows_graph,
    guess_follows_graph_with, in_timespan, influencers, top_influencers, written_by,
    FollowsGraph, Timespan, Tweet,
};
