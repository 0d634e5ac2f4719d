//! Small helpers shared across the engine.

use regex::Regex;

/// Create a regex that never matches anything.
///
/// Used as a fallback when a pattern fails to compile, which is safer than
/// a trivial pattern like `^$` that would still match empty strings.
#[must_use]
pub fn never_matching_regex() -> Regex {
  // A character that is neither whitespace nor non-whitespace cannot exist,
  // so this pattern is guaranteed valid and matches nothing.
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    // As an ultimate fallback, use an empty-word-boundary pattern
    #[allow(clippy::unwrap_used, reason = "This pattern is guaranteed valid")]
    Regex::new(r"^\b$").unwrap()
  })
}

/// Normalize CR, LF and CRLF line endings to plain LF.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
  text.replace("\r\n", "\n").replace('\r', "\n")
}
