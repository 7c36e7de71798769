//! Slug normalization.
//!
//! Derived slugs must match the links the directory publishes, so the rule is
//! applied exactly: trim, lowercase, drop everything except `[A-Za-z0-9_]`,
//! whitespace and `-`, turn whitespace runs into `-`, collapse `-` runs, and
//! strip leading/trailing `-`.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug regex"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid slug regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid slug regex"));

/// Normalize a display name into a URL-safe slug.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
