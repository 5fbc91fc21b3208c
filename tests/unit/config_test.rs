//! Tests for configuration loading
//!
//! Config files are TOML with every section optional.

use std::fs;
use std::path::Path;

use leetsync::config::{Config, ConfigError, SourceKind};
use leetsync::core::models::SourceOrder;
use tempfile::TempDir;

fn write(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("leetsync.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn partial_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        r#"
[sync]
language = "python3"
language_label = "Python"
fence_tag = "python"
"#,
    );

    let config = Config::load(&path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.sync.language, "python3");
    assert_eq!(config.sync.recent_limit, 5);
    assert_eq!(config.source.kind, SourceKind::Leetcode);
    assert!(config.readme.enabled);
}

#[test]
fn custom_buckets_replace_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        r#"
[[buckets]]
label = "Easy"
dir = "PY-EASY"

[[buckets]]
label = "Hard"
dir = "PY-HARD"
"#,
    );

    let config = Config::load(&path).unwrap();
    let buckets = config.bucket_map().unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets.lowest().dir, "PY-EASY");
    assert!(buckets.resolve("Medium").is_none());
}

#[test]
fn file_source_reads_order() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        r#"
[source]
kind = "file"
path = "dump.json"
order = "newest-first"
"#,
    );

    let config = Config::load(&path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.source.kind, SourceKind::File);
    assert_eq!(config.source.order, SourceOrder::NewestFirst);
}

#[test]
fn file_source_needs_a_path() {
    let mut config = Config::default();
    config.source.kind = SourceKind::File;
    assert!(matches!(config.validate(), Err(ConfigError::MissingSourcePath)));
}

#[test]
fn invalid_toml_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "[sync\nlanguage = ");

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("leetsync.toml"));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    let err = Config::resolve(Some(&temp.path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn problem_url_needs_slug() {
    let mut config = Config::default();
    config.sync.problem_url = "https://leetcode.com/problems/".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::ProblemUrl(_))));
}

#[test]
fn markers_must_be_distinct() {
    let mut config = Config::default();
    config.readme.recent_start = config.readme.stats_start.clone();
    assert!(matches!(config.validate(), Err(ConfigError::Markers)));
}

#[test]
fn generated_toml_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), &Config::default().to_toml().unwrap());

    let config = Config::load(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.buckets, Config::default().buckets);
}
