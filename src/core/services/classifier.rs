//! Classifier - filters raw submissions and resolves their bucket
//!
//! Pure function over a record and the static classification rules.

use thiserror::Error;

use crate::core::models::{BucketMap, NormalizedSubmission, RawSubmission};

/// Static rules a submission is classified against
#[derive(Debug, Clone)]
pub struct ClassifyRules {
    /// Target language tag, compared case-insensitively
    pub language: String,
    /// Exact status string marking an accepted submission
    pub accepted_status: String,
    /// Configured buckets
    pub buckets: BucketMap,
}

/// Why a submission was dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Written in another language
    #[error("language {0} is not the target language")]
    LanguageMismatch(String),

    /// Not an accepted submission
    #[error("status {0} is not accepted")]
    NotAccepted(String),

    /// Difficulty does not map to a configured bucket
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Classify a raw submission
///
/// Absent or blank difficulty falls back to the lowest-severity bucket.
///
/// # Errors
///
/// Returns a [`Rejection`] when the record must be skipped.
pub fn classify(
    raw: &RawSubmission,
    rules: &ClassifyRules,
) -> Result<NormalizedSubmission, Rejection> {
    if !raw.language.trim().eq_ignore_ascii_case(rules.language.trim()) {
        return Err(Rejection::LanguageMismatch(raw.language.clone()));
    }

    if raw.status != rules.accepted_status {
        return Err(Rejection::NotAccepted(raw.status.clone()));
    }

    let bucket = match raw.difficulty.as_deref().map(str::trim) {
        None | Some("") => rules.buckets.lowest(),
        Some(label) => rules
            .buckets
            .resolve(label)
            .ok_or_else(|| Rejection::UnknownDifficulty(label.to_string()))?,
    };

    Ok(NormalizedSubmission {
        title: raw.title.clone(),
        slug: raw.slug.clone(),
        bucket: bucket.clone(),
        code: raw.code.clone(),
    })
}
