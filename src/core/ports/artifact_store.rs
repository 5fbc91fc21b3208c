//! Artifact store port
//!
//! Defines the interface for persisting rendered artifacts.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Verdict of a write-if-changed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// Artifact was absent or differed and has been (or would be) written
    Changed,
    /// Artifact already held identical content; nothing was written
    Unchanged,
}

/// Errors raised while persisting an artifact
#[derive(Debug, Error)]
pub enum StoreError {
    /// The bucket directory could not be created
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Existing artifact could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Artifact could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether the failure affects the storage location as a whole
    ///
    /// Systemic failures abort the run; the others only lose one artifact.
    #[must_use]
    pub const fn is_systemic(&self) -> bool {
        matches!(self, Self::CreateDir { .. })
    }
}

/// Storage for rendered artifacts keyed by `(dir, key)`
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactStore {
    /// Write `content` at `(dir, key)` unless identical bytes are already there
    fn write_if_changed(
        &mut self,
        dir: &str,
        key: &str,
        content: &str,
    ) -> Result<WriteOutcome, StoreError>;
}
