//! Tests for the filesystem adapters
//!
//! Artifact store, README document and JSON submission source, all against
//! a temporary directory.

use std::fs;

use leetsync::adapters::file::{FileArtifactStore, FileDocument};
use leetsync::adapters::json::JsonFileSource;
use leetsync::core::models::SourceOrder;
use leetsync::core::ports::{ArtifactStore, DocumentStore, SubmissionSource, WriteOutcome};
use leetsync::core::services::synchronise;
use tempfile::TempDir;

use crate::common::{README, java_rules};

// =============================================================================
// FileArtifactStore
// =============================================================================

#[test]
fn store_creates_bucket_dir_and_detects_unchanged() {
    let temp = TempDir::new().unwrap();
    let mut store = FileArtifactStore::new(temp.path().to_path_buf(), "md");

    let first = store.write_if_changed("JAVA-EASY", "Two Sum", "# Two Sum\n").unwrap();
    let second = store.write_if_changed("JAVA-EASY", "Two Sum", "# Two Sum\n").unwrap();
    let third = store.write_if_changed("JAVA-EASY", "Two Sum", "# Two Sum v2\n").unwrap();

    assert_eq!(first, WriteOutcome::Changed);
    assert_eq!(second, WriteOutcome::Unchanged);
    assert_eq!(third, WriteOutcome::Changed);
    let path = temp.path().join("JAVA-EASY/Two Sum.md");
    assert_eq!(fs::read_to_string(path).unwrap(), "# Two Sum v2\n");
}

#[test]
fn dry_run_store_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let mut store = FileArtifactStore::new(temp.path().to_path_buf(), "md").with_dry_run(true);

    let outcome = store.write_if_changed("JAVA-EASY", "Two Sum", "# Two Sum\n").unwrap();

    assert_eq!(outcome, WriteOutcome::Changed);
    assert!(!temp.path().join("JAVA-EASY").exists());
}

#[cfg(unix)]
#[test]
fn written_artifacts_are_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let mut store = FileArtifactStore::new(temp.path().to_path_buf(), "md");
    store.write_if_changed("JAVA-EASY", "Two Sum", "x").unwrap();

    let meta = fs::metadata(temp.path().join("JAVA-EASY/Two Sum.md")).unwrap();
    assert_eq!(meta.permissions().mode() & 0o777, 0o644);
}

// =============================================================================
// FileDocument
// =============================================================================

#[test]
fn document_missing_is_none() {
    let temp = TempDir::new().unwrap();
    let doc = FileDocument::new(temp.path().join("README.md"));
    assert!(doc.load().unwrap().is_none());
}

#[test]
fn document_round_trips() {
    let temp = TempDir::new().unwrap();
    let mut doc = FileDocument::new(temp.path().join("README.md"));
    doc.save("# Hello\n").unwrap();
    assert_eq!(doc.load().unwrap().as_deref(), Some("# Hello\n"));
}

// =============================================================================
// JsonFileSource
// =============================================================================

#[test]
fn json_dump_feeds_the_engine() {
    let temp = TempDir::new().unwrap();
    let dump = temp.path().join("submissions.json");
    fs::write(
        &dump,
        r#"{"submissions_dump": [
            {"title": "Two Sum", "title_slug": "two-sum", "lang": "java", "lang_name": "Java",
             "status": 10, "status_display": "Accepted", "difficulty": "Easy", "code": "class A {}"},
            {"title": "Two Sum", "title_slug": "two-sum", "lang": "cpp", "lang_name": "C++",
             "status": 10, "status_display": "Accepted", "difficulty": "Easy", "code": "int a;"}
        ]}"#,
    )
    .unwrap();
    fs::write(temp.path().join("README.md"), README).unwrap();

    let mut source = JsonFileSource::new(dump, SourceOrder::NewestFirst);
    let mut store = FileArtifactStore::new(temp.path().to_path_buf(), "md");
    let mut readme = FileDocument::new(temp.path().join("README.md"));

    let report = synchronise(&mut source, &mut store, Some(&mut readme), &java_rules()).unwrap();

    assert_eq!(report.changed.len(), 1);
    assert_eq!(report.skipped.language, 1);
    let artifact = fs::read_to_string(temp.path().join("JAVA-EASY/Two Sum.md")).unwrap();
    assert!(artifact.contains("```java\nclass A {}\n```"));
    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(readme.contains("- **Easy:** 1"));
}

#[test]
fn json_source_is_a_single_page() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("list.json");
    fs::write(&path, "[]").unwrap();

    let mut source = JsonFileSource::new(path, SourceOrder::OldestFirst);
    assert_eq!(source.next_page().unwrap(), Some(Vec::new()));
    assert_eq!(source.next_page().unwrap(), None);
}

#[test]
fn json_source_reports_bad_input() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, "{\"nope\": 1}").unwrap();

    let mut source = JsonFileSource::new(path, SourceOrder::OldestFirst);
    let err = source.next_page().unwrap_err();
    assert!(format!("{err:#}").contains("submissions_dump"));
}
