//! Sync engine - the single linear pass
//!
//! Fetch → classify → de-duplicate → key → render → store, with the
//! aggregator observing each accepted submission. Once the source is
//! exhausted the aggregate is merged into the README regions.
//!
//! The engine only talks to ports; all I/O lives in adapters.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::core::models::{AggregateStats, DocumentRegion};
use crate::core::ports::{ArtifactStore, DocumentStore, StoreError, SubmissionSource, WriteOutcome};

use super::aggregator::Aggregator;
use super::classifier::{ClassifyRules, Rejection, classify};
use super::dedup::Deduplicator;
use super::merger::{MergeError, merge_regions};
use super::renderer::{ArtifactTemplate, render};
use super::sanitize::{KeyRegistry, sanitize_key};
use super::summary::{render_recent, render_stats};

/// Fatal sync failures
///
/// Everything else (rejected records, per-artifact storage errors, broken
/// README markers) is reported in [`SyncReport`] instead.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The submission source failed; the README is not merged
    #[error("submission source failed: {0:#}")]
    Source(anyhow::Error),

    /// The README is required but does not exist
    #[error("document not found: {0}")]
    MissingDocument(String),

    /// The README could not be read or written
    #[error("document error: {0:#}")]
    Document(anyhow::Error),

    /// The artifact storage location is unusable
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// README regions and how to fill them
#[derive(Debug, Clone)]
pub struct ReadmeRules {
    /// Region receiving the statistics block
    pub stats: DocumentRegion,
    /// Region receiving the recent submissions list
    pub recent: DocumentRegion,
    /// Timestamp for the "Last Updated" line, if enabled
    pub updated_at: Option<DateTime<Utc>>,
}

/// Everything the engine needs besides its ports
#[derive(Debug, Clone)]
pub struct SyncRules {
    /// Filter and bucket rules
    pub classify: ClassifyRules,
    /// Artifact layout
    pub template: ArtifactTemplate,
    /// Size of the recent submissions list
    pub recent_limit: usize,
    /// Upper bound on pages pulled from the source
    pub max_pages: usize,
    /// README merge rules; `None` disables the merge
    pub readme: Option<ReadmeRules>,
    /// Report what would change without saving the README
    pub dry_run: bool,
}

/// Per-reason counts of skipped records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    /// Other language
    pub language: usize,
    /// Not accepted
    pub status: usize,
    /// Difficulty outside the configured buckets
    pub unknown_difficulty: usize,
    /// Repeated `(slug, language)`
    pub duplicate: usize,
    /// Title does not yield a usable file name
    pub degenerate_key: usize,
}

impl SkipCounts {
    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::LanguageMismatch(_) => self.language += 1,
            Rejection::NotAccepted(_) => self.status += 1,
            Rejection::UnknownDifficulty(_) => self.unknown_difficulty += 1,
        }
    }

    /// Total skipped records
    #[must_use]
    pub const fn total(&self) -> usize {
        self.language + self.status + self.unknown_difficulty + self.duplicate + self.degenerate_key
    }
}

/// What happened to the README
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// No merge was configured
    Disabled,
    /// Regions already held the rendered content
    Unchanged,
    /// The README was rewritten (or would be, in a dry run)
    Updated,
}

/// Outcome of a sync pass
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Pages pulled from the source
    pub pages: usize,
    /// Whether the page limit stopped the stream before the source ended
    pub truncated: bool,
    /// Artifacts written, as `dir/key`
    pub changed: Vec<String>,
    /// Artifacts that already matched
    pub unchanged: usize,
    /// Per-artifact storage failures
    pub failed: Vec<String>,
    /// Skipped records by reason
    pub skipped: SkipCounts,
    /// Keys disambiguated with the slug, as `dir/key`
    pub renamed: Vec<String>,
    /// Final aggregate
    pub stats: AggregateStats,
    /// README outcome
    pub document: DocumentStatus,
    /// README regions that could not be merged
    pub merge_skipped: Vec<MergeError>,
}

impl SyncReport {
    fn new() -> Self {
        Self {
            pages: 0,
            truncated: false,
            changed: Vec::new(),
            unchanged: 0,
            failed: Vec::new(),
            skipped: SkipCounts::default(),
            renamed: Vec::new(),
            stats: AggregateStats::default(),
            document: DocumentStatus::Disabled,
            merge_skipped: Vec::new(),
        }
    }
}

/// Run one sync pass
///
/// The README (when `rules.readme` and `document` are both given) is loaded
/// before anything is written, so a missing README fails the run without
/// side effects.
///
/// # Errors
///
/// Returns a [`SyncError`] for source failures, a missing or unwritable
/// README, and systemic storage failures.
pub fn synchronise<S, A>(
    source: &mut S,
    store: &mut A,
    document: Option<&mut dyn DocumentStore>,
    rules: &SyncRules,
) -> Result<SyncReport, SyncError>
where
    S: SubmissionSource + ?Sized,
    A: ArtifactStore + ?Sized,
{
    let document = match (document, rules.readme.as_ref()) {
        (Some(doc), Some(readme)) => {
            let text = doc
                .load()
                .map_err(SyncError::Document)?
                .ok_or_else(|| SyncError::MissingDocument(doc.describe()))?;
            Some((doc, readme, text))
        },
        _ => None,
    };

    info!("Syncing from {} ({})", source.describe(), source.order());

    let mut report = SyncReport::new();
    let mut aggregator =
        Aggregator::new(&rules.classify.buckets, rules.recent_limit, source.order());
    let mut dedup = Deduplicator::new();
    let mut keys = KeyRegistry::new();

    let mut exhausted = false;
    while report.pages < rules.max_pages {
        let Some(page) = source.next_page().map_err(SyncError::Source)? else {
            exhausted = true;
            break;
        };
        report.pages += 1;
        if page.is_empty() {
            debug!("Empty page {}, treating as end of stream", report.pages);
            exhausted = true;
            break;
        }
        debug!("Page {}: {} record(s)", report.pages, page.len());

        for raw in &page {
            let submission = match classify(raw, &rules.classify) {
                Ok(s) => s,
                Err(rejection) => {
                    if matches!(rejection, Rejection::UnknownDifficulty(_)) {
                        warn!("Skipping {}: {rejection}", raw.slug);
                    } else {
                        debug!("Skipping {}: {rejection}", raw.slug);
                    }
                    report.skipped.record(&rejection);
                    continue;
                },
            };

            if !dedup.first_sighting(raw) {
                debug!("Skipping duplicate {}", raw.slug);
                report.skipped.duplicate += 1;
                continue;
            }

            let Some(key) = sanitize_key(&submission.title) else {
                warn!("Skipping {}: title {:?} has no usable file name", raw.slug, raw.title);
                report.skipped.degenerate_key += 1;
                continue;
            };

            let dir = submission.bucket.dir.as_str();
            let (key, renamed) = keys.claim(dir, key, &submission.slug);
            if renamed {
                warn!("{} collides with another title in {dir}, writing {key}", submission.slug);
                report.renamed.push(format!("{dir}/{key}"));
            }

            let content = render(&submission, &rules.template);
            match store.write_if_changed(dir, &key, &content) {
                Ok(WriteOutcome::Changed) => {
                    debug!("Updated {dir}/{key}");
                    report.changed.push(format!("{dir}/{key}"));
                },
                Ok(WriteOutcome::Unchanged) => report.unchanged += 1,
                Err(e) if e.is_systemic() => return Err(e.into()),
                Err(e) => {
                    error!("{e}");
                    report.failed.push(e.to_string());
                },
            }

            aggregator.observe(&submission);
        }
    }

    if !exhausted && source.has_more() {
        info!("Stopped after {} page(s) (max_pages)", rules.max_pages);
        report.truncated = true;
    }

    report.stats = aggregator.snapshot();

    if let Some((doc, readme, text)) = document {
        let regions = [
            (
                readme.stats.clone(),
                render_stats(&report.stats, &rules.template.language_label, readme.updated_at),
            ),
            (readme.recent.clone(), render_recent(&report.stats, &rules.template)),
        ];
        let merged = merge_regions(&text, &regions);
        report.merge_skipped = merged.skipped;

        if merged.document == text {
            report.document = DocumentStatus::Unchanged;
        } else {
            if !rules.dry_run {
                doc.save(&merged.document).map_err(SyncError::Document)?;
            }
            report.document = DocumentStatus::Updated;
        }
    }

    Ok(report)
}
