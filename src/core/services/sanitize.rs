//! Artifact key derivation
//!
//! Titles become file names, so they are mapped onto a small safe
//! character set before they touch the filesystem.

use std::collections::HashMap;

/// Replacement for any character outside the allow-list
pub const SUBSTITUTE: char = '_';

/// Whether a character may appear in an artifact key as-is
#[must_use]
pub const fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_')
}

/// Map a title onto the artifact key character set
///
/// Returns `None` for degenerate keys (nothing but substitutes or blanks),
/// which would not identify the problem.
///
/// ```
/// use leetsync::core::services::sanitize_key;
///
/// assert_eq!(sanitize_key("Pow(x, n)").as_deref(), Some("Pow_x_ n_"));
/// assert_eq!(sanitize_key("../../etc").as_deref(), Some("______etc"));
/// assert_eq!(sanitize_key("???"), None);
/// ```
#[must_use]
pub fn sanitize_key(title: &str) -> Option<String> {
    let mapped: String =
        title.chars().map(|c| if is_allowed(c) { c } else { SUBSTITUTE }).collect();
    let key = mapped.trim_matches(' ');

    if key.chars().all(|c| c == SUBSTITUTE || c == ' ') {
        return None;
    }

    Some(key.to_string())
}

/// Tracks which slug owns each `(dir, key)` within a run
///
/// Two different slugs whose titles sanitize to the same key would
/// overwrite each other; the later one is moved to `{key}_{slug}`, with a
/// counter appended if that key is taken too.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    owners: HashMap<(String, String), String>,
}

impl KeyRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a key for a slug, returning the key to use and whether it had
    /// to be disambiguated
    pub fn claim(&mut self, dir: &str, key: String, slug: &str) -> (String, bool) {
        let owner =
            self.owners.entry((dir.to_string(), key.clone())).or_insert_with(|| slug.to_string());
        if *owner == slug {
            return (key, false);
        }

        let suffix = sanitize_key(slug).unwrap_or_else(|| SUBSTITUTE.to_string());
        let base = format!("{key}{SUBSTITUTE}{suffix}");
        let mut candidate = base.clone();
        let mut n = 2;
        loop {
            let owner = self
                .owners
                .entry((dir.to_string(), candidate.clone()))
                .or_insert_with(|| slug.to_string());
            if *owner == slug {
                return (candidate, true);
            }
            candidate = format!("{base}{SUBSTITUTE}{n}");
            n += 1;
        }
    }
}
