//! Code span extraction.
//!
//! This pre-pass runs over the whole document string before line
//! splitting, because fenced blocks span multiple lines and must be
//! replaced atomically. Extracting code first makes its contents immune to
//! every later substitution: once a span reads `[CODE]...[/CODE]` the
//! document processor refuses to touch it again.
//!
//! Indentation-based code blocks are *not* handled here; they depend on
//! line contiguity and live with the other block renderers in
//! [`crate::block`].

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{RenderOptions, utils::never_matching_regex};

// A fenced block: opening triple backtick with an optional language tag on
// the same line, a body free of backticks, and a closing triple backtick.
// An unclosed fence never matches and stays plain text.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"```([^\n`]*)\n([^`]*)```").unwrap_or_else(|e| {
    error!("Failed to compile FENCE_RE regex: {e}");
    never_matching_regex()
  })
});

// Single-line code span, no embedded backtick or newline.
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"`([^`\n]+)`").unwrap_or_else(|e| {
    error!("Failed to compile INLINE_CODE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Replace fenced and single-backtick code spans with their BBCode
/// equivalent across the whole document.
///
/// Fenced blocks become `[TYPE]\nbody\n[/TYPE]` where the type is resolved
/// against [`RenderOptions::code_block_types`]; inline spans become
/// `[CODE]code[/CODE]`. A fenced body that trims down to nothing is
/// replaced by the type name itself; a long-standing quirk that output
/// consumers rely on, so it stays.
#[must_use]
pub fn extract_code(document: &str, options: &RenderOptions) -> String {
  let fenced = FENCE_RE
    .replace_all(document, |caps: &regex::Captures| {
      let code_type = options.code_type_for(&caps[1]);
      let body = caps[2].trim();
      if body.is_empty() {
        format!("[{code_type}]\n{code_type}\n[/{code_type}]")
      } else {
        format!("[{code_type}]\n{body}\n[/{code_type}]")
      }
    })
    .into_owned();

  INLINE_CODE_RE
    .replace_all(&fenced, |caps: &regex::Captures| {
      format!("[CODE]{}[/CODE]", &caps[1])
    })
    .into_owned()
}
