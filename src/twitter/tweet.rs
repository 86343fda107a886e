//! Tweet and timespan value types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A single post as supplied by the caller.
///
/// The `id` is carried for the caller's benefit only; none of the analysis
/// functions look at it. Author names compare case-insensitively everywhere
/// in this crate, but the original spelling is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Tweet {
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// The author's name in canonical (lowercase) form.
    pub fn author_key(&self) -> String {
        self.author.to_lowercase()
    }
}

/// A closed interval of instants, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    /// Creates a timespan, rejecting a start that lies after the end.
    ///
    /// # Returns
    ///
    /// - `Ok(Timespan)`: If `start <= end`
    /// - `Err(AnalysisError::InvalidTimespan)`: Otherwise
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AnalysisError> {
        if start > end {
            return Err(AnalysisError::InvalidTimespan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `instant` falls inside the interval, both ends included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
