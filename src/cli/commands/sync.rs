//! Sync accepted submissions into the solutions tree and README

use std::path::{Path, PathBuf};

use leetsync::adapters::file::{FileArtifactStore, FileDocument};
use leetsync::adapters::json::JsonFileSource;
use leetsync::config::{Config, ConfigError, SourceKind};
use leetsync::core::ports::SubmissionSource;
use leetsync::core::services::synchronise;
use leetsync::output::{OutputMode, SyncResult};

/// Run one sync pass
pub fn sync(
    config_path: Option<&Path>,
    source_file: Option<PathBuf>,
    dry_run: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (mut config, loaded_from) = Config::resolve(config_path)?;
    match &loaded_from {
        Some(path) => log::debug!("Using config {}", path.display()),
        None => log::debug!("No config file found, using defaults"),
    }

    if let Some(path) = source_file {
        config.source.kind = SourceKind::File;
        config.source.path = Some(path);
    }
    config.validate()?;

    let rules = config.sync_rules(dry_run, chrono::Utc::now())?;
    let mut source = build_source(&config)?;
    let mut store = FileArtifactStore::new(config.sync.output_dir.clone(), &config.sync.extension)
        .with_dry_run(dry_run);
    let mut readme = FileDocument::new(config.readme.path.clone());

    let report = synchronise(source.as_mut(), &mut store, Some(&mut readme), &rules)?;

    SyncResult::new(report, &config.sync.language_label, dry_run).render(mode);
    Ok(())
}

fn build_source(config: &Config) -> anyhow::Result<Box<dyn SubmissionSource>> {
    match config.source.kind {
        SourceKind::File => {
            let path = config.source.path.clone().ok_or(ConfigError::MissingSourcePath)?;
            Ok(Box::new(JsonFileSource::new(path, config.source.order)))
        },
        SourceKind::Leetcode => leetcode_source(config),
    }
}

#[cfg(feature = "leetcode")]
fn leetcode_source(config: &Config) -> anyhow::Result<Box<dyn SubmissionSource>> {
    use leetsync::adapters::leetcode::{Credentials, LeetCodeSource};

    let credentials = Credentials::from_env()?;
    Ok(Box::new(LeetCodeSource::new(&config.source, &credentials)?))
}

#[cfg(not(feature = "leetcode"))]
fn leetcode_source(_config: &Config) -> anyhow::Result<Box<dyn SubmissionSource>> {
    anyhow::bail!(
        "this build has no LeetCode support; rebuild with --features leetcode, \
         or use source.kind = \"file\" / --source-file"
    )
}
