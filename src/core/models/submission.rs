//! Submission models
//!
//! A [`RawSubmission`] is what a source hands us. A [`NormalizedSubmission`]
//! is what survives classification.

use serde::{Deserialize, Serialize};

use super::Bucket;

/// A submission record as yielded by a submission source
///
/// Deserializes from either the plain field names or the LeetCode
/// submissions dump format (`title_slug`, `lang`, `status_display`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SubmissionRow")]
pub struct RawSubmission {
    /// Problem title (e.g., "Two Sum")
    pub title: String,

    /// Problem slug (e.g., "two-sum")
    pub slug: String,

    /// Language tag reported by the judge (e.g., "java")
    pub language: String,

    /// Status string (e.g., "Accepted")
    pub status: String,

    /// Difficulty label, if the source knows it
    pub difficulty: Option<String>,

    /// Submitted source code
    pub code: String,
}

/// `status` is a display string in exports but a numeric code in the
/// judge API, where the text lives in `status_display`
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusField {
    Text(String),
    Code(i64),
}

#[derive(Deserialize)]
struct SubmissionRow {
    title: String,
    #[serde(alias = "title_slug")]
    slug: String,
    #[serde(alias = "lang")]
    language: String,
    #[serde(default)]
    status: Option<StatusField>,
    #[serde(default)]
    status_display: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    code: String,
}

impl From<SubmissionRow> for RawSubmission {
    fn from(row: SubmissionRow) -> Self {
        let status = match (row.status_display, row.status) {
            (Some(display), _) => display,
            (None, Some(StatusField::Text(text))) => text,
            (None, Some(StatusField::Code(code))) => code.to_string(),
            (None, None) => String::new(),
        };

        Self {
            title: row.title,
            slug: row.slug,
            language: row.language,
            status,
            difficulty: row.difficulty,
            code: row.code,
        }
    }
}

impl RawSubmission {
    /// Create a raw submission with no difficulty and no code
    #[must_use]
    pub fn new(title: &str, slug: &str, language: &str, status: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            language: language.to_string(),
            status: status.to_string(),
            difficulty: None,
            code: String::new(),
        }
    }

    /// Set the difficulty label
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty = Some(difficulty.to_string());
        self
    }

    /// Set the source code
    #[must_use]
    pub fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }
}

/// A submission that passed the language and status filters and resolved
/// to a configured bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSubmission {
    /// Problem title
    pub title: String,
    /// Problem slug
    pub slug: String,
    /// Resolved destination bucket
    pub bucket: Bucket,
    /// Submitted source code
    pub code: String,
}

impl NormalizedSubmission {
    /// Canonical difficulty label (the bucket label, never the raw casing)
    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.bucket.label
    }
}
