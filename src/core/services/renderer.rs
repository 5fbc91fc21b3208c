//! Renderer - turns a normalized submission into artifact text
//!
//! Output is a pure function of the submission and the template, so the
//! artifact store can detect changes by comparing bytes.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::NormalizedSubmission;

/// Minimum fence length for code blocks
const MIN_FENCE: usize = 3;

#[allow(clippy::expect_used)]
static BACKTICK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("`+").expect("valid pattern"));

/// Language-specific pieces of the artifact layout
#[derive(Debug, Clone)]
pub struct ArtifactTemplate {
    /// Display name of the language (e.g., "Java")
    pub language_label: String,
    /// Info string for the code fence (e.g., "java")
    pub fence_tag: String,
    /// Problem URL template, `{slug}` is substituted
    pub problem_url: String,
}

impl ArtifactTemplate {
    /// Canonical problem link for a slug
    #[must_use]
    pub fn problem_link(&self, slug: &str) -> String {
        self.problem_url.replace("{slug}", slug)
    }
}

/// Backtick fence long enough to enclose `code` without being closed early
///
/// One backtick longer than the longest run inside the code, minimum three.
#[must_use]
pub fn fence_for(code: &str) -> String {
    let longest = BACKTICK_RUN.find_iter(code).map(|m| m.as_str().len()).max().unwrap_or(0);
    "`".repeat(MIN_FENCE.max(longest + 1))
}

/// Render the markdown artifact for a submission
#[must_use]
pub fn render(submission: &NormalizedSubmission, template: &ArtifactTemplate) -> String {
    let fence = fence_for(&submission.code);
    let label = &template.language_label;

    format!(
        "# {title}\n\n\
         **Difficulty:** {difficulty}  \n\
         **Language:** {label}  \n\
         **Link:** {link}\n\n\
         ---\n\n\
         ## \u{1f9e0} Solution ({label})\n\n\
         {fence}{tag}\n\
         {code}\n\
         {fence}\n",
        title = submission.title,
        difficulty = submission.difficulty(),
        link = template.problem_link(&submission.slug),
        tag = template.fence_tag,
        code = submission.code,
    )
}
