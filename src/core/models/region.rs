//! Marker-delimited document regions

use serde::Serialize;

/// A named span of a document bounded by a start and an end marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRegion {
    /// Region name used in diagnostics (e.g., "stats")
    pub name: String,
    /// Start marker, kept in place by a merge
    pub start: String,
    /// End marker, kept in place by a merge
    pub end: String,
}

impl DocumentRegion {
    /// Create a region
    #[must_use]
    pub fn new(name: &str, start: &str, end: &str) -> Self {
        Self {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// An empty region (markers only), as inserted by `leetsync init`
    #[must_use]
    pub fn empty_block(&self) -> String {
        format!("{}\n{}", self.start, self.end)
    }
}
