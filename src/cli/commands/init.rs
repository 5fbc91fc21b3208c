//! Initialize leetsync in a solutions repository

use std::fs;

use leetsync::adapters::file::FileDocument;
use leetsync::config::Config;
use leetsync::core::models::DocumentRegion;
use leetsync::core::ports::DocumentStore;
use leetsync::output::{OperationResult, OutputMode};
use leetsync::paths;

/// Write `leetsync.toml` and make sure the README has both regions
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = paths::project_config();
    let mut messages = Vec::new();

    let config = if config_path.exists() && !force {
        messages.push(format!(
            "Already initialized ({} exists). Use --force to overwrite.",
            config_path.display()
        ));
        Config::load(&config_path)?
    } else {
        let config = Config::default();
        fs::write(&config_path, format!("# leetsync configuration\n\n{}", config.to_toml()?))?;
        messages.push(format!("Created {}", config_path.display()));
        config
    };

    let mut readme = FileDocument::new(config.readme.path.clone());
    let existing = readme.load()?;
    let text = existing.clone().unwrap_or_else(|| "# LeetCode Solutions\n".to_string());

    let sections = [
        ("## LeetCode Stats", config.readme.stats_region()),
        ("## Recent Submissions", config.readme.recent_region()),
    ];

    let mut additions = String::new();
    for (heading, region) in &sections {
        match region_state(&text, region) {
            RegionState::Present => {},
            RegionState::Absent => {
                additions.push_str(&format!("\n{heading}\n\n{}\n", region.empty_block()));
            },
            RegionState::Partial => {
                messages.push(format!(
                    "README has only one marker of the {} region; fix it by hand",
                    region.name
                ));
            },
        }
    }

    if additions.is_empty() && existing.is_some() {
        messages.push(format!("{} already has the sync regions", readme.describe()));
    } else {
        let mut updated = text;
        if !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&additions);
        readme.save(&updated)?;
        messages.push(format!("Added sync regions to {}", readme.describe()));
    }

    messages.push("\nNext steps:".to_string());
    messages.push("  export LEETCODE_SESSION=... LEETCODE_CSRF_TOKEN=...".to_string());
    messages.push("  leetsync sync".to_string());

    OperationResult {
        success: true,
        message: messages.join("\n"),
    }
    .render(mode);

    Ok(())
}

enum RegionState {
    Present,
    Absent,
    Partial,
}

fn region_state(text: &str, region: &DocumentRegion) -> RegionState {
    match (text.contains(&region.start), text.contains(&region.end)) {
        (true, true) => RegionState::Present,
        (false, false) => RegionState::Absent,
        _ => RegionState::Partial,
    }
}
