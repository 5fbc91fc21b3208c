//! Aggregate statistics produced by a sync pass

use serde::Serialize;

/// Number of accepted submissions in one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    /// Bucket label (e.g., "Medium")
    pub label: String,
    /// Accepted submissions observed for this bucket
    pub count: usize,
}

/// One entry of the recent submissions list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentEntry {
    /// Problem title
    pub title: String,
    /// Problem slug
    pub slug: String,
    /// Canonical difficulty label
    pub difficulty: String,
}

/// Final aggregate of a sync pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AggregateStats {
    /// Per-bucket counts, in configured bucket order
    pub counts: Vec<BucketCount>,
    /// Sum of all bucket counts
    pub total: usize,
    /// Most recent submissions, most recent first
    pub recent: Vec<RecentEntry>,
}

impl AggregateStats {
    /// Count for a bucket label, zero if unknown
    #[must_use]
    pub fn count_for(&self, label: &str) -> usize {
        self.counts.iter().find(|c| c.label == label).map_or(0, |c| c.count)
    }
}
