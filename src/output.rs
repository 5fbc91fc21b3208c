//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::{DocumentStatus, SyncReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a sync run
#[derive(Debug, Serialize)]
pub struct SyncResult {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Display name of the synced language
    pub language: String,
    /// Number of artifacts written (or that would be written)
    pub updated: usize,
    /// Engine report
    #[serde(flatten)]
    pub report: SyncReport,
}

impl SyncResult {
    /// Wrap an engine report
    #[must_use]
    pub fn new(report: SyncReport, language: &str, dry_run: bool) -> Self {
        Self {
            dry_run,
            language: language.to_string(),
            updated: report.changed.len(),
            report,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable summary
    #[must_use]
    pub fn to_human(&self) -> String {
        let report = &self.report;
        let verb = if self.dry_run { "Would update" } else { "Updated" };
        let mut lines = vec![format!("{verb} {} {} problem files", self.updated, self.language)];

        if self.dry_run {
            for path in &report.changed {
                lines.push(format!("  would write {path}"));
            }
        }

        lines.push(format!(
            "  {} solved, {} unchanged",
            report.stats.total, report.unchanged
        ));

        if report.truncated {
            lines.push(format!(
                "  {} stopped after {} page(s), older submissions were not fetched",
                "note:".yellow(),
                report.pages
            ));
        }

        let skipped = &report.skipped;
        if skipped.total() > 0 {
            lines.push(format!(
                "  skipped {}: {} other language, {} not accepted, {} unknown difficulty, \
                 {} duplicate, {} untitled",
                skipped.total(),
                skipped.language,
                skipped.status,
                skipped.unknown_difficulty,
                skipped.duplicate,
                skipped.degenerate_key
            ));
        }

        for path in &report.renamed {
            lines.push(format!("  {} title collision, wrote {path}", "note:".yellow()));
        }

        for failure in &report.failed {
            lines.push(format!("  {} {failure}", "failed:".red()));
        }

        let readme = match report.document {
            DocumentStatus::Disabled => None,
            DocumentStatus::Unchanged => Some("README unchanged"),
            DocumentStatus::Updated if self.dry_run => Some("README would be updated"),
            DocumentStatus::Updated => Some("README updated"),
        };
        if let Some(line) = readme {
            lines.push(line.to_string());
        }

        for skip in &report.merge_skipped {
            lines.push(format!("  {} {skip}", "warning:".yellow()));
        }

        lines.join("\n")
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
