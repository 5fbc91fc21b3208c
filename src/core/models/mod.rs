//! Domain models for leetsync
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RawSubmission`] - A record as yielded by a submission source
//! - [`NormalizedSubmission`] - A classified, accepted submission
//! - [`Bucket`] / [`BucketMap`] - Difficulty tiers and their directories
//! - [`AggregateStats`] - Counts and recent list for the README
//! - [`DocumentRegion`] - A marker-delimited README span
//! - [`SourceOrder`] - How a source orders its records

mod bucket;
mod order;
mod region;
mod stats;
mod submission;

pub use bucket::{Bucket, BucketMap};
pub use order::SourceOrder;
pub use region::DocumentRegion;
pub use stats::{AggregateStats, BucketCount, RecentEntry};
pub use submission::{NormalizedSubmission, RawSubmission};
