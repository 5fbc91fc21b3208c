//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the sync engine and the
//! outside world (the judge service, the filesystem).
//!
//! Implementations live in the `adapters` module.

mod artifact_store;
mod document_store;
mod submission_source;

pub use artifact_store::{ArtifactStore, StoreError, WriteOutcome};
pub use document_store::DocumentStore;
pub use submission_source::SubmissionSource;

#[cfg(test)]
pub use artifact_store::MockArtifactStore;
#[cfg(test)]
pub use document_store::MockDocumentStore;
#[cfg(test)]
pub use submission_source::MockSubmissionSource;
