//! Source ordering contract

use serde::{Deserialize, Serialize};

/// Order in which a source yields submissions
///
/// The aggregator uses this to present the recent list most recent first
/// regardless of how the source iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceOrder {
    /// Oldest submission first, newest last
    #[default]
    OldestFirst,
    /// Newest submission first (LeetCode's submissions listing)
    NewestFirst,
}

impl std::fmt::Display for SourceOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldestFirst => write!(f, "oldest-first"),
            Self::NewestFirst => write!(f, "newest-first"),
        }
    }
}
