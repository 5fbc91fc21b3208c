//! JSON file submission source
//!
//! Reads an exported submissions file as a single page. Accepts either a
//! plain array of submissions or a LeetCode dump object:
//!
//! ```json
//! { "submissions_dump": [ { "title": "Two Sum", "title_slug": "two-sum", ... } ] }
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::{RawSubmission, SourceOrder};
use crate::core::ports::SubmissionSource;

#[derive(Deserialize)]
#[serde(untagged)]
enum SubmissionFile {
    List(Vec<RawSubmission>),
    Dump { submissions_dump: Vec<RawSubmission> },
}

/// Submission source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    order: SourceOrder,
    consumed: bool,
}

impl JsonFileSource {
    /// Create a source reading `path`, whose records are in `order`
    #[must_use]
    pub const fn new(path: PathBuf, order: SourceOrder) -> Self {
        Self {
            path,
            order,
            consumed: false,
        }
    }

    /// Parse submissions from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is neither a submission array nor a dump
    /// object.
    pub fn parse(text: &str) -> anyhow::Result<Vec<RawSubmission>> {
        let file: SubmissionFile = serde_json::from_str(text)
            .context("expected a submission array or an object with submissions_dump")?;
        Ok(match file {
            SubmissionFile::List(list) => list,
            SubmissionFile::Dump { submissions_dump } => submissions_dump,
        })
    }
}

impl SubmissionSource for JsonFileSource {
    fn next_page(&mut self) -> anyhow::Result<Option<Vec<RawSubmission>>> {
        if self.consumed {
            return Ok(None);
        }
        self.consumed = true;

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading submissions from {}", self.path.display()))?;
        let submissions = Self::parse(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        log::debug!("Loaded {} submission(s) from {}", submissions.len(), self.path.display());
        Ok(Some(submissions))
    }

    fn order(&self) -> SourceOrder {
        self.order
    }

    fn has_more(&self) -> bool {
        !self.consumed
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
