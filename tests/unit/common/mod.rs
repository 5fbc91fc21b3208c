//! Shared test fixtures and helpers
//!
//! In-memory implementations of the ports, plus the stock Java rules the
//! engine tests run against.

use std::collections::BTreeMap;

use leetsync::core::models::{Bucket, BucketMap, DocumentRegion, RawSubmission, SourceOrder};
use leetsync::core::ports::{ArtifactStore, DocumentStore, StoreError, SubmissionSource, WriteOutcome};
use leetsync::core::services::{ArtifactTemplate, ClassifyRules, ReadmeRules, SyncRules};

/// README with both regions, empty
pub const README: &str = "# LeetCode Solutions\n\n\
## LeetCode Stats\n\n<!-- LEETCODE_STATS:START -->\n<!-- LEETCODE_STATS:END -->\n\n\
## Recent Submissions\n\n<!-- LEETCODE_RECENT_SUBMISSIONS:START -->\n\
<!-- LEETCODE_RECENT_SUBMISSIONS:END -->\n";

/// Source that yields a fixed list of pages
pub struct VecSource {
    pages: Vec<Vec<RawSubmission>>,
    next: usize,
    order: SourceOrder,
    /// Fail instead of yielding the page at this index
    pub fail_at: Option<usize>,
}

impl VecSource {
    pub fn new(pages: Vec<Vec<RawSubmission>>, order: SourceOrder) -> Self {
        Self {
            pages,
            next: 0,
            order,
            fail_at: None,
        }
    }

    /// One page, newest first like the judge API
    pub fn newest_first(records: Vec<RawSubmission>) -> Self {
        Self::new(vec![records], SourceOrder::NewestFirst)
    }
}

impl SubmissionSource for VecSource {
    fn next_page(&mut self) -> anyhow::Result<Option<Vec<RawSubmission>>> {
        if self.fail_at == Some(self.next) {
            anyhow::bail!("connection reset");
        }
        let page = self.pages.get(self.next).cloned();
        self.next += 1;
        Ok(page)
    }

    fn order(&self) -> SourceOrder {
        self.order
    }

    fn has_more(&self) -> bool {
        self.next < self.pages.len()
    }

    fn describe(&self) -> String {
        "vec source".to_string()
    }
}

/// Artifact store backed by a map, counting physical writes
#[derive(Default)]
pub struct MemoryStore {
    pub files: BTreeMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn get(&self, dir: &str, key: &str) -> Option<&str> {
        self.files.get(&format!("{dir}/{key}")).map(String::as_str)
    }
}

impl ArtifactStore for MemoryStore {
    fn write_if_changed(
        &mut self,
        dir: &str,
        key: &str,
        content: &str,
    ) -> Result<WriteOutcome, StoreError> {
        let path = format!("{dir}/{key}");
        if self.files.get(&path).is_some_and(|existing| existing == content) {
            return Ok(WriteOutcome::Unchanged);
        }
        self.files.insert(path, content.to_string());
        self.writes += 1;
        Ok(WriteOutcome::Changed)
    }
}

/// README held in memory
#[derive(Default)]
pub struct MemoryDocument {
    pub text: Option<String>,
    pub saves: usize,
}

impl MemoryDocument {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            saves: 0,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl DocumentStore for MemoryDocument {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn save(&mut self, content: &str) -> anyhow::Result<()> {
        self.text = Some(content.to_string());
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "README.md".to_string()
    }
}

/// Easy/Medium/Hard Java buckets
pub fn java_buckets() -> BucketMap {
    BucketMap::new(vec![
        Bucket::new("Easy", "JAVA-EASY"),
        Bucket::new("Medium", "JAVA-MEDIUM"),
        Bucket::new("Hard", "JAVA-HARD"),
    ])
    .unwrap()
}

/// Java template linking to leetcode.com
pub fn java_template() -> ArtifactTemplate {
    ArtifactTemplate {
        language_label: "Java".to_string(),
        fence_tag: "java".to_string(),
        problem_url: "https://leetcode.com/problems/{slug}/".to_string(),
    }
}

/// Engine rules matching the default configuration
pub fn java_rules() -> SyncRules {
    SyncRules {
        classify: ClassifyRules {
            language: "java".to_string(),
            accepted_status: "Accepted".to_string(),
            buckets: java_buckets(),
        },
        template: java_template(),
        recent_limit: 5,
        max_pages: 200,
        readme: Some(ReadmeRules {
            stats: DocumentRegion::new(
                "stats",
                "<!-- LEETCODE_STATS:START -->",
                "<!-- LEETCODE_STATS:END -->",
            ),
            recent: DocumentRegion::new(
                "recent",
                "<!-- LEETCODE_RECENT_SUBMISSIONS:START -->",
                "<!-- LEETCODE_RECENT_SUBMISSIONS:END -->",
            ),
            updated_at: None,
        }),
        dry_run: false,
    }
}

/// Accepted Java submission
pub fn java(title: &str, slug: &str, difficulty: &str) -> RawSubmission {
    RawSubmission::new(title, slug, "java", "Accepted")
        .with_difficulty(difficulty)
        .with_code("class Solution {}")
}
