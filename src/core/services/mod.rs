//! Business logic services
//!
//! Pure logic that operates on domain models. Only [`sync`] touches the
//! outside world, and only through port traits.
//!
//! - [`classifier`] - Filter and bucket raw submissions
//! - [`dedup`] - Drop repeated submissions
//! - [`sanitize`] - Derive safe artifact keys
//! - [`renderer`] - Render artifact text
//! - [`aggregator`] - Counts and recent list
//! - [`summary`] - README block rendering
//! - [`merger`] - Marker-delimited region replacement
//! - [`sync`] - The sync pass

pub mod aggregator;
pub mod classifier;
pub mod dedup;
pub mod merger;
pub mod renderer;
pub mod sanitize;
pub mod summary;
pub mod sync;

pub use aggregator::Aggregator;
pub use classifier::{ClassifyRules, Rejection, classify};
pub use dedup::Deduplicator;
pub use merger::{MergeError, MergeReport, merge_region, merge_regions};
pub use renderer::{ArtifactTemplate, fence_for, render};
pub use sanitize::{KeyRegistry, sanitize_key};
pub use summary::{render_recent, render_stats};
pub use sync::{
    DocumentStatus, ReadmeRules, SkipCounts, SyncError, SyncReport, SyncRules, synchronise,
};
