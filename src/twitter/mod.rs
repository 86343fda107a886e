//! Tweet analysis module.
//!
//! This module contains the tweet value types, the text extractors, and the
//! three analyses built on them: extraction, filtering and social-graph
//! inference.

mod extract;
mod filter;
mod parsing;
mod social;
mod tweet;

// Re-export public API
pub use extract::{get_mentioned_users, get_timespan};
pub use filter::{containing, in_timespan, written_by};
pub use parsing::{extract_hashtags, extract_lenient_mentions, extract_mentions, is_valid_username};
pub use social::{
    follower_counts, guess_follows_graph, guess_follows_graph_with, influencers, top_influencers,
    FollowsGraph,
};
pub use tweet::{Timespan, Tweet};
