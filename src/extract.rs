//! Lexical extraction of feature slugs from registry source text.
//!
//! The registry is scanned as plain text, not parsed as TypeScript. A slug
//! is the quoted value of a `slug:` property whose content is limited to
//! lowercase letters, digits, and hyphens.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `slug: "<value>"` with optional whitespace after the colon.
///
/// The closing quote anchors the capture to the allowed character class:
/// a quoted value containing anything outside `[a-z0-9-]` does not match
/// at all, there is no partial capture. The label itself is not
/// word-anchored, so a longer property name ending in `slug:` also matches.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"slug:\s*"([a-z0-9-]+)""#).unwrap());

/// Extract the distinct slugs from registry source text, sorted ascending
/// by byte order.
///
/// # Examples
///
/// ```
/// use featls::extract::extract_slugs;
///
/// let text = r#"slug: "beta", slug:"alpha", slug: "beta""#;
/// assert_eq!(extract_slugs(text), vec!["alpha", "beta"]);
/// ```
pub fn extract_slugs(text: &str) -> Vec<String> {
    let unique: BTreeSet<&str> = SLUG_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect();

    unique.into_iter().map(str::to_owned).collect()
}
