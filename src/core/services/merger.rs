//! Document merger - replaces marker-delimited regions in place
//!
//! Markers are located by offset (first occurrence of each) and validated
//! before a single substring replacement. Content outside a region is
//! never touched.

use serde::Serialize;
use thiserror::Error;

use crate::core::models::DocumentRegion;

/// Why a region could not be merged
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum MergeError {
    /// The start marker does not occur in the document
    #[error("region {region}: start marker {marker} not found")]
    MissingStart {
        /// Region name
        region: String,
        /// The marker that was looked for
        marker: String,
    },

    /// The end marker does not occur in the document
    #[error("region {region}: end marker {marker} not found")]
    MissingEnd {
        /// Region name
        region: String,
        /// The marker that was looked for
        marker: String,
    },

    /// The first end marker precedes (or overlaps) the first start marker
    #[error("region {region}: end marker occurs before start marker")]
    Misordered {
        /// Region name
        region: String,
    },

    /// The replacement would introduce a marker into the region
    #[error("region {region}: replacement text contains a region marker")]
    MarkerInReplacement {
        /// Region name
        region: String,
    },
}

/// Replace everything strictly between a region's markers
///
/// The result is `before + start + "\n\n" + replacement + "\n\n" + end + after`.
///
/// ```
/// use leetsync::core::models::DocumentRegion;
/// use leetsync::core::services::merge_region;
///
/// let region = DocumentRegion::new("s", "<!--S-->", "<!--E-->");
/// let merged = merge_region("A<!--S-->old<!--E-->B", &region, "new").unwrap();
/// assert_eq!(merged, "A<!--S-->\n\nnew\n\n<!--E-->B");
/// ```
///
/// # Errors
///
/// Returns a [`MergeError`] when the markers are missing or malformed, or
/// when the replacement contains a marker. The document is left unchanged.
pub fn merge_region(
    document: &str,
    region: &DocumentRegion,
    replacement: &str,
) -> Result<String, MergeError> {
    if replacement.contains(&region.start) || replacement.contains(&region.end) {
        return Err(MergeError::MarkerInReplacement {
            region: region.name.clone(),
        });
    }

    let start_at = document.find(&region.start).ok_or_else(|| MergeError::MissingStart {
        region: region.name.clone(),
        marker: region.start.clone(),
    })?;
    let end_at = document.find(&region.end).ok_or_else(|| MergeError::MissingEnd {
        region: region.name.clone(),
        marker: region.end.clone(),
    })?;

    let inner_start = start_at + region.start.len();
    if end_at < inner_start {
        return Err(MergeError::Misordered {
            region: region.name.clone(),
        });
    }

    let mut out = String::with_capacity(document.len() + replacement.len() + 4);
    out.push_str(&document[..inner_start]);
    out.push_str("\n\n");
    out.push_str(replacement);
    out.push_str("\n\n");
    out.push_str(&document[end_at..]);
    Ok(out)
}

/// Result of merging several regions into one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// The document after every mergeable region was replaced
    pub document: String,
    /// Regions that were replaced, by name
    pub merged: Vec<String>,
    /// Regions that were skipped
    pub skipped: Vec<MergeError>,
}

/// Merge each `(region, replacement)` pair independently
///
/// A region that fails keeps its current content and does not prevent the
/// remaining regions from being merged.
#[must_use]
pub fn merge_regions(document: &str, regions: &[(DocumentRegion, String)]) -> MergeReport {
    let mut current = document.to_string();
    let mut merged = Vec::new();
    let mut skipped = Vec::new();

    for (region, replacement) in regions {
        match merge_region(&current, region, replacement) {
            Ok(next) => {
                current = next;
                merged.push(region.name.clone());
            },
            Err(e) => {
                log::warn!("Skipping README region: {e}");
                skipped.push(e);
            },
        }
    }

    MergeReport {
        document: current,
        merged,
        skipped,
    }
}
