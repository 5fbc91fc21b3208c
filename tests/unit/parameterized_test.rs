//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use leetsync::core::models::RawSubmission;
use leetsync::core::services::{ClassifyRules, Rejection, classify, fence_for, sanitize_key};
use test_case::test_case;

use crate::common::java_buckets;

fn rules() -> ClassifyRules {
    ClassifyRules {
        language: "java".to_string(),
        accepted_status: "Accepted".to_string(),
        buckets: java_buckets(),
    }
}

// =============================================================================
// Classification
// =============================================================================

#[test_case("easy", "JAVA-EASY" ; "lowercase label")]
#[test_case("MEDIUM", "JAVA-MEDIUM" ; "uppercase label")]
#[test_case(" Hard ", "JAVA-HARD" ; "padded label")]
fn test_difficulty_resolves(difficulty: &str, dir: &str) {
    let raw = RawSubmission::new("Two Sum", "two-sum", "java", "Accepted").with_difficulty(difficulty);
    let normalized = classify(&raw, &rules()).unwrap();
    assert_eq!(normalized.bucket.dir, dir);
}

#[test_case("Java", "Accepted" ; "language case ignored")]
#[test_case(" java ", "Accepted" ; "language whitespace ignored")]
fn test_accepted_variants(language: &str, status: &str) {
    let raw = RawSubmission::new("Two Sum", "two-sum", language, status).with_difficulty("Easy");
    assert!(classify(&raw, &rules()).is_ok());
}

#[test_case("python3", "Accepted", Rejection::LanguageMismatch("python3".to_string()) ; "other language")]
#[test_case("java", "Wrong Answer", Rejection::NotAccepted("Wrong Answer".to_string()) ; "wrong answer")]
#[test_case("java", "accepted", Rejection::NotAccepted("accepted".to_string()) ; "status is exact")]
fn test_rejections(language: &str, status: &str, expected: Rejection) {
    let raw = RawSubmission::new("Two Sum", "two-sum", language, status).with_difficulty("Easy");
    assert_eq!(classify(&raw, &rules()).unwrap_err(), expected);
}

// =============================================================================
// Keys
// =============================================================================

#[test_case("Two Sum", Some("Two Sum") ; "plain title")]
#[test_case("Pow(x, n)", Some("Pow_x_ n_") ; "punctuation replaced")]
#[test_case("a/b\\c", Some("a_b_c") ; "separators replaced")]
#[test_case("  Trim Me  ", Some("Trim Me") ; "outer spaces trimmed")]
#[test_case("Café", Some("Caf_") ; "non ascii replaced")]
#[test_case("..", None ; "dots only")]
#[test_case("   ", None ; "blank")]
fn test_sanitize_key(title: &str, expected: Option<&str>) {
    assert_eq!(sanitize_key(title).as_deref(), expected);
}

// =============================================================================
// Fences
// =============================================================================

#[test_case("int x = 1;", "```" ; "no backticks")]
#[test_case("String s = \"`\";", "```" ; "single backtick")]
#[test_case("/* ``` */", "````" ; "triple backticks")]
#[test_case("// `````", "``````" ; "five backticks")]
fn test_fence_for(code: &str, expected: &str) {
    assert_eq!(fence_for(code), expected);
}
