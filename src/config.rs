//! Configuration module for follows-graph inference.
//!
//! This module contains the configuration structures and environment variable
//! handling that select between the two graph-construction contracts.

use log::{info, warn};
use std::env;
use std::str::FromStr;

/// Environment variable selecting [`AuthorEntries`].
pub const AUTHOR_ENTRIES_VAR: &str = "TWEETGRAPH_AUTHOR_ENTRIES";

/// Which tweet authors get a key in the inferred follows graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorEntries {
    /// Only users with at least one outgoing edge appear as keys.
    #[default]
    EvidenceOnly,
    /// Every author appears as a key, with an empty set if no evidence was found.
    AllAuthors,
}

impl FromStr for AuthorEntries {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "evidence" | "evidence_only" => Ok(AuthorEntries::EvidenceOnly),
            "all" | "all_authors" => Ok(AuthorEntries::AllAuthors),
            other => Err(format!(
                "unknown author entry policy '{}', expected 'evidence' or 'all'",
                other
            )),
        }
    }
}

/// Options for [`guess_follows_graph_with`](crate::twitter::guess_follows_graph_with).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    pub author_entries: AuthorEntries,
}

impl GraphConfig {
    /// Loads the graph configuration from environment variables.
    ///
    /// Reads `TWEETGRAPH_AUTHOR_ENTRIES` (`evidence` or `all`, any case). A
    /// missing variable selects the default; an unrecognised value is logged
    /// and also falls back to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tweetgraph::{AuthorEntries, GraphConfig};
    ///
    /// // With no TWEETGRAPH_AUTHOR_ENTRIES set
    /// let config = GraphConfig::from_env();
    /// assert_eq!(config.author_entries, AuthorEntries::EvidenceOnly);
    /// ```
    pub fn from_env() -> Self {
        let author_entries = match env::var(AUTHOR_ENTRIES_VAR) {
            Ok(value) => match value.parse::<AuthorEntries>() {
                Ok(policy) => {
                    info!("Using author entry policy {:?} from {}", policy, AUTHOR_ENTRIES_VAR);
                    policy
                }
                Err(e) => {
                    warn!("Ignoring {}: {}", AUTHOR_ENTRIES_VAR, e);
                    AuthorEntries::default()
                }
            },
            Err(_) => AuthorEntries::default(),
        };

        Self { author_entries }
    }
}
