//! Error types for tweet analysis.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned by the analysis functions.
///
/// Only precondition violations are modeled; every other operation is total
/// over well-formed input and returns an empty result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// An operation that needs at least one tweet was given none.
    #[error("tweet list must not be empty")]
    EmptyInput,

    /// A timespan was requested whose start lies after its end.
    #[error("timespan start {start} is after end {end}")]
    InvalidTimespan {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
