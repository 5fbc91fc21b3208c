//! Buckets
//!
//! A bucket is a difficulty tier mapped 1:1 to a directory. The set is
//! fixed at configuration time and ordered from lowest to highest severity.

use serde::{Deserialize, Serialize};

/// A named destination category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bucket {
    /// Canonical difficulty label (e.g., "Easy")
    pub label: String,
    /// Storage subpath relative to the output directory (e.g., "JAVA-EASY")
    pub dir: String,
}

impl Bucket {
    /// Create a bucket
    #[must_use]
    pub fn new(label: &str, dir: &str) -> Self {
        Self {
            label: label.to_string(),
            dir: dir.to_string(),
        }
    }
}

/// Ordered, validated set of buckets
///
/// The first bucket is the lowest severity and receives submissions that
/// carry no difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketMap {
    buckets: Vec<Bucket>,
}

impl BucketMap {
    /// Wrap an already validated, non-empty bucket list
    ///
    /// Returns `None` when the list is empty.
    #[must_use]
    pub fn new(buckets: Vec<Bucket>) -> Option<Self> {
        if buckets.is_empty() {
            return None;
        }
        Some(Self { buckets })
    }

    /// Look up a bucket by difficulty label, ignoring case and surrounding
    /// whitespace
    #[must_use]
    pub fn resolve(&self, difficulty: &str) -> Option<&Bucket> {
        let wanted = difficulty.trim();
        self.buckets.iter().find(|b| b.label.eq_ignore_ascii_case(wanted))
    }

    /// The lowest-severity bucket
    #[must_use]
    pub fn lowest(&self) -> &Bucket {
        // Construction guarantees at least one bucket
        &self.buckets[0]
    }

    /// Iterate buckets in severity order
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    /// Number of buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the map has no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
