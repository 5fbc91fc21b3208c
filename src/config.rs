//! Configuration management
//!
//! Settings are read from `leetsync.toml` (see [`crate::paths`] for the
//! lookup order). Every section has defaults that reproduce the classic
//! Java setup, so an empty file is a valid configuration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Bucket, BucketMap, DocumentRegion, SourceOrder};
use crate::core::services::{ArtifactTemplate, ClassifyRules, ReadmeRules, SyncRules};
use crate::paths;

/// Configuration errors (fatal, raised before any write)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("cannot parse config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Target language is blank
    #[error("sync.language must not be empty")]
    EmptyLanguage,

    /// Recent list would be empty
    #[error("sync.recent_limit must be at least 1")]
    RecentLimit,

    /// Problem URL template cannot produce per-problem links
    #[error("sync.problem_url must contain {{slug}}: {0}")]
    ProblemUrl(String),

    /// No buckets configured
    #[error("at least one [[buckets]] entry is required")]
    NoBuckets,

    /// Two buckets share a label
    #[error("duplicate bucket label: {0}")]
    DuplicateLabel(String),

    /// Two buckets share a directory
    #[error("duplicate bucket dir: {0}")]
    DuplicateDir(String),

    /// Bucket directory would escape the output directory
    #[error("bucket dir must be a single relative path component: {0:?}")]
    UnsafeDir(String),

    /// README markers are blank or not distinct
    #[error("readme markers must be non-empty and distinct")]
    Markers,

    /// Page size of zero would never make progress
    #[error("source.page_size and source.max_pages must be at least 1")]
    Paging,

    /// File source without a path
    #[error("source.path is required when source.kind = \"file\"")]
    MissingSourcePath,

    /// Required credential missing from the environment
    #[error("missing credential: set {0}")]
    MissingCredential(&'static str),
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where submissions come from
    pub source: SourceConfig,
    /// Filtering and artifact layout
    pub sync: SyncConfig,
    /// Difficulty buckets, lowest severity first
    pub buckets: Vec<Bucket>,
    /// README merge settings
    pub readme: ReadmeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            sync: SyncConfig::default(),
            buckets: vec![
                Bucket::new("Easy", "JAVA-EASY"),
                Bucket::new("Medium", "JAVA-MEDIUM"),
                Bucket::new("Hard", "JAVA-HARD"),
            ],
            readme: ReadmeConfig::default(),
        }
    }
}

/// Kind of submission source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// LeetCode web API (requires the `leetcode` feature)
    #[default]
    Leetcode,
    /// Exported JSON file
    File,
}

/// `[source]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source kind
    pub kind: SourceKind,
    /// Submissions file for `kind = "file"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Record order of the submissions file
    pub order: SourceOrder,
    /// LeetCode base URL
    pub base_url: String,
    /// Submissions per page
    pub page_size: usize,
    /// Upper bound on pages per run
    pub max_pages: usize,
    /// Pause between page requests, in milliseconds
    pub page_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            path: None,
            order: SourceOrder::default(),
            base_url: "https://leetcode.com".to_string(),
            page_size: 20,
            max_pages: 200,
            page_delay_ms: 500,
        }
    }
}

/// `[sync]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Language tag to keep (case-insensitive)
    pub language: String,
    /// Display name of the language
    pub language_label: String,
    /// Code fence info string
    pub fence_tag: String,
    /// Status string of accepted submissions
    pub accepted_status: String,
    /// Artifact file extension
    pub extension: String,
    /// Root of the solutions tree
    pub output_dir: PathBuf,
    /// Entries in the recent submissions list
    pub recent_limit: usize,
    /// Problem URL template, `{slug}` is substituted
    pub problem_url: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            language: "java".to_string(),
            language_label: "Java".to_string(),
            fence_tag: "java".to_string(),
            accepted_status: "Accepted".to_string(),
            extension: "md".to_string(),
            output_dir: PathBuf::from("."),
            recent_limit: 5,
            problem_url: "https://leetcode.com/problems/{slug}/".to_string(),
        }
    }
}

/// `[readme]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReadmeConfig {
    /// Merge statistics into the README
    pub enabled: bool,
    /// README path
    pub path: PathBuf,
    /// Add a "Last Updated (UTC)" line (the region then changes every run)
    pub show_last_updated: bool,
    /// Statistics region start marker
    pub stats_start: String,
    /// Statistics region end marker
    pub stats_end: String,
    /// Recent submissions region start marker
    pub recent_start: String,
    /// Recent submissions region end marker
    pub recent_end: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("README.md"),
            show_last_updated: false,
            stats_start: "<!-- LEETCODE_STATS:START -->".to_string(),
            stats_end: "<!-- LEETCODE_STATS:END -->".to_string(),
            recent_start: "<!-- LEETCODE_RECENT_SUBMISSIONS:START -->".to_string(),
            recent_end: "<!-- LEETCODE_RECENT_SUBMISSIONS:END -->".to_string(),
        }
    }
}

impl ReadmeConfig {
    /// The statistics region
    #[must_use]
    pub fn stats_region(&self) -> DocumentRegion {
        DocumentRegion::new("stats", &self.stats_start, &self.stats_end)
    }

    /// The recent submissions region
    #[must_use]
    pub fn recent_region(&self) -> DocumentRegion {
        DocumentRegion::new("recent", &self.recent_start, &self.recent_end)
    }
}

impl Config {
    /// Load a config file
    ///
    /// The result is not validated; call [`Config::validate`] once any
    /// command-line overrides have been applied.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Find and load the config
    ///
    /// An explicit path must exist. Otherwise the project file, then the
    /// global file is used, falling back to defaults. Returns the file that
    /// was loaded, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in [paths::project_config(), paths::global_config()] {
            if candidate.exists() {
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Check invariants the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sync.language.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        if self.sync.recent_limit == 0 {
            return Err(ConfigError::RecentLimit);
        }
        if !self.sync.problem_url.contains("{slug}") {
            return Err(ConfigError::ProblemUrl(self.sync.problem_url.clone()));
        }
        if self.source.page_size == 0 || self.source.max_pages == 0 {
            return Err(ConfigError::Paging);
        }
        if self.source.kind == SourceKind::File && self.source.path.is_none() {
            return Err(ConfigError::MissingSourcePath);
        }

        self.bucket_map()?;

        let markers = [
            &self.readme.stats_start,
            &self.readme.stats_end,
            &self.readme.recent_start,
            &self.readme.recent_end,
        ];
        let distinct: HashSet<&String> = markers.iter().copied().collect();
        if distinct.len() != markers.len() || markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::Markers);
        }

        Ok(())
    }

    /// Validated bucket set
    pub fn bucket_map(&self) -> Result<BucketMap, ConfigError> {
        let mut labels = HashSet::new();
        let mut dirs = HashSet::new();

        for bucket in &self.buckets {
            if !is_safe_dir(&bucket.dir) {
                return Err(ConfigError::UnsafeDir(bucket.dir.clone()));
            }
            if !labels.insert(bucket.label.trim().to_lowercase()) {
                return Err(ConfigError::DuplicateLabel(bucket.label.clone()));
            }
            if !dirs.insert(bucket.dir.as_str()) {
                return Err(ConfigError::DuplicateDir(bucket.dir.clone()));
            }
        }

        BucketMap::new(self.buckets.clone()).ok_or(ConfigError::NoBuckets)
    }

    /// Build the engine rules
    ///
    /// `now` is only used when `readme.show_last_updated` is set.
    pub fn sync_rules(&self, dry_run: bool, now: DateTime<Utc>) -> Result<SyncRules, ConfigError> {
        let readme = self.readme.enabled.then(|| ReadmeRules {
            stats: self.readme.stats_region(),
            recent: self.readme.recent_region(),
            updated_at: self.readme.show_last_updated.then_some(now),
        });

        Ok(SyncRules {
            classify: ClassifyRules {
                language: self.sync.language.clone(),
                accepted_status: self.sync.accepted_status.clone(),
                buckets: self.bucket_map()?,
            },
            template: ArtifactTemplate {
                language_label: self.sync.language_label.clone(),
                fence_tag: self.sync.fence_tag.clone(),
                problem_url: self.sync.problem_url.clone(),
            },
            recent_limit: self.sync.recent_limit,
            max_pages: self.source.max_pages,
            readme,
            dry_run,
        })
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn is_safe_dir(dir: &str) -> bool {
    let trimmed = dir.trim();
    !trimmed.is_empty()
        && trimmed == dir
        && dir != "."
        && dir != ".."
        && !dir.contains(['/', '\\', ':'])
        && !Path::new(dir).is_absolute()
}
