//! Summary rendering for the README regions

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::core::models::AggregateStats;

use super::renderer::ArtifactTemplate;

/// Render the statistics block
///
/// `updated_at` adds a "Last Updated (UTC)" line. Leave it `None` to keep
/// the block stable across runs with the same input.
#[must_use]
pub fn render_stats(
    stats: &AggregateStats,
    language_label: &str,
    updated_at: Option<DateTime<Utc>>,
) -> String {
    let mut lines = Vec::with_capacity(stats.counts.len() + 2);
    lines.push(format!("- **{language_label} Problems Solved:** {}", stats.total));
    for bucket in &stats.counts {
        lines.push(format!("- **{}:** {}", bucket.label, bucket.count));
    }
    if let Some(at) = updated_at {
        lines.push(format!("- **Last Updated (UTC):** {}", at.format("%Y-%m-%d %H:%M:%S")));
    }
    lines.join("\n")
}

/// Render the recent submissions block
#[must_use]
pub fn render_recent(stats: &AggregateStats, template: &ArtifactTemplate) -> String {
    if stats.recent.is_empty() {
        return format!("*No recent {} submissions.*", template.language_label);
    }

    let mut out = String::new();
    for (i, entry) in stats.recent.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(
            out,
            "- [{}]({}) \u{2014} *{}*",
            entry.title,
            template.problem_link(&entry.slug),
            entry.difficulty
        );
    }
    out
}
