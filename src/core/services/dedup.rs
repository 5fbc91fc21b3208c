//! De-duplication of the submission stream
//!
//! Sources may repeat records across pages or list several accepted
//! solutions for one problem. The first `(slug, language)` wins.

use std::collections::HashSet;

use crate::core::models::RawSubmission;

/// Remembers which `(slug, language)` pairs have been seen
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<(String, String)>,
}

impl Deduplicator {
    /// Create an empty deduplicator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time a `(slug, language)` pair is offered
    ///
    /// Language is compared case-insensitively.
    pub fn first_sighting(&mut self, raw: &RawSubmission) -> bool {
        self.seen.insert((raw.slug.clone(), raw.language.to_ascii_lowercase()))
    }
}
