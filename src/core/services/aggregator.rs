//! Aggregator - per-bucket counts and a bounded recent list
//!
//! Threaded through the sync pass as a value and read once at the end.

use std::collections::VecDeque;

use crate::core::models::{
    AggregateStats, BucketCount, BucketMap, NormalizedSubmission, RecentEntry, SourceOrder,
};

/// Accumulates statistics over the accepted submission stream
#[derive(Debug, Clone)]
pub struct Aggregator {
    counts: Vec<BucketCount>,
    total: usize,
    recent: VecDeque<RecentEntry>,
    limit: usize,
    order: SourceOrder,
}

impl Aggregator {
    /// Create an empty aggregator
    ///
    /// `limit` bounds the recent list; `order` is the arrival order of the
    /// source feeding [`Aggregator::observe`].
    #[must_use]
    pub fn new(buckets: &BucketMap, limit: usize, order: SourceOrder) -> Self {
        Self {
            counts: buckets
                .iter()
                .map(|b| BucketCount {
                    label: b.label.clone(),
                    count: 0,
                })
                .collect(),
            total: 0,
            recent: VecDeque::with_capacity(limit),
            limit,
            order,
        }
    }

    /// Record one accepted submission
    pub fn observe(&mut self, submission: &NormalizedSubmission) {
        if let Some(slot) = self.counts.iter_mut().find(|c| c.label == submission.bucket.label) {
            slot.count += 1;
        }
        self.total += 1;

        if self.limit == 0 {
            return;
        }

        let entry = RecentEntry {
            title: submission.title.clone(),
            slug: submission.slug.clone(),
            difficulty: submission.difficulty().to_string(),
        };

        match self.order {
            // Newest arrive last: keep a ring of the last `limit`
            SourceOrder::OldestFirst => {
                if self.recent.len() == self.limit {
                    self.recent.pop_front();
                }
                self.recent.push_back(entry);
            },
            // Newest arrive first: the first `limit` are the recent ones
            SourceOrder::NewestFirst => {
                if self.recent.len() < self.limit {
                    self.recent.push_back(entry);
                }
            },
        }
    }

    /// Counts, total and recent list (most recent first)
    #[must_use]
    pub fn snapshot(&self) -> AggregateStats {
        let recent = match self.order {
            SourceOrder::OldestFirst => self.recent.iter().rev().cloned().collect(),
            SourceOrder::NewestFirst => self.recent.iter().cloned().collect(),
        };

        AggregateStats {
            counts: self.counts.clone(),
            total: self.total,
            recent,
        }
    }
}
