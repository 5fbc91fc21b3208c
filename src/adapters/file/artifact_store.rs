//! File-based artifact store
//!
//! Artifacts live at `{root}/{dir}/{key}.{extension}`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::ports::{ArtifactStore, StoreError, WriteOutcome};

use super::write_atomic;

/// Artifact store backed by a directory tree
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    root: PathBuf,
    extension: String,
    dry_run: bool,
}

impl FileArtifactStore {
    /// Create a store rooted at `root` writing `*.{extension}` files
    #[must_use]
    pub fn new(root: PathBuf, extension: &str) -> Self {
        Self {
            root,
            extension: extension.trim_start_matches('.').to_string(),
            dry_run: false,
        }
    }

    /// Compare only; never create directories or write files
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Path of the artifact for `(dir, key)`
    #[must_use]
    pub fn path_for(&self, dir: &str, key: &str) -> PathBuf {
        self.root.join(dir).join(format!("{key}.{}", self.extension))
    }
}

impl ArtifactStore for FileArtifactStore {
    fn write_if_changed(
        &mut self,
        dir: &str,
        key: &str,
        content: &str,
    ) -> Result<WriteOutcome, StoreError> {
        let dir_path = self.root.join(dir);
        let path = self.path_for(dir, key);

        if !self.dry_run {
            fs::create_dir_all(&dir_path).map_err(|source| StoreError::CreateDir {
                path: dir_path.clone(),
                source,
            })?;
        }

        match fs::read(&path) {
            Ok(existing) if existing == content.as_bytes() => return Ok(WriteOutcome::Unchanged),
            Ok(_) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(source) => return Err(StoreError::Read { path, source }),
        }

        if self.dry_run {
            return Ok(WriteOutcome::Changed);
        }

        write_atomic(&path, content).map_err(|source| StoreError::Write { path, source })?;
        Ok(WriteOutcome::Changed)
    }
}
