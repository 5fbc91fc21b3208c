//! Filesystem adapters
//!
//! - [`FileArtifactStore`] - `ArtifactStore` over a solutions tree
//! - [`FileDocument`] - `DocumentStore` over the README

mod artifact_store;
mod document;

pub use artifact_store::FileArtifactStore;
pub use document::FileDocument;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `content` through a temp file in the same directory
///
/// Readers see either the old or the new content, never a partial write.
pub(crate) fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    set_readable(&tmp)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// Temp files are created owner-only; artifacts should look like any other
// checked-in file.
#[cfg(unix)]
fn set_readable(tmp: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tmp.as_file().set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_readable(_tmp: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
