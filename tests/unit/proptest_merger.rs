//! Property-based tests for the document merger and key sanitizer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use leetsync::core::models::DocumentRegion;
use leetsync::core::services::{merge_region, sanitize_key};
use proptest::prelude::*;

fn region() -> DocumentRegion {
    DocumentRegion::new("stats", "<!--S-->", "<!--E-->")
}

proptest! {
    /// Text outside the markers survives a merge byte for byte
    #[test]
    fn merge_preserves_outside_text(
        before in "[a-zA-Z0-9 #\\n]{0,40}",
        inside in "[a-zA-Z0-9 \\n]{0,40}",
        after in "[a-zA-Z0-9 #\\n]{0,40}",
        replacement in "[a-zA-Z0-9 *\\-\\n]{0,40}",
    ) {
        let doc = format!("{before}<!--S-->{inside}<!--E-->{after}");
        let merged = merge_region(&doc, &region(), &replacement).unwrap();

        let head = format!("{before}<!--S-->");
        let tail = format!("<!--E-->{after}");
        prop_assert!(merged.starts_with(&head));
        prop_assert!(merged.ends_with(&tail));
        prop_assert!(merged.contains(&replacement));
    }

    /// Merging the same replacement twice is a no-op the second time
    #[test]
    fn merge_is_idempotent(
        before in "[a-z \\n]{0,20}",
        inside in "[a-z \\n]{0,20}",
        replacement in "[a-z \\-\\n]{0,40}",
    ) {
        let doc = format!("{before}<!--S-->{inside}<!--E-->");
        let once = merge_region(&doc, &region(), &replacement).unwrap();
        let twice = merge_region(&once, &region(), &replacement).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// A document without markers is rejected, never altered
    #[test]
    fn merge_without_markers_fails(doc in "[a-z \\n]{0,60}") {
        prop_assert!(merge_region(&doc, &region(), "x").is_err());
    }

    /// Sanitized keys only use the allowed character set
    #[test]
    fn sanitized_keys_are_safe(title in "\\PC{0,40}") {
        if let Some(key) = sanitize_key(&title) {
            prop_assert!(key.chars().all(|c| c.is_ascii_alphanumeric() || " -_".contains(c)));
            prop_assert!(!key.starts_with(' ') && !key.ends_with(' '));
            prop_assert!(!key.contains(".."));
        }
    }
}
