//! Multi-line block renderers.
//!
//! A block renderer looks at a line sequence from a start index, collects
//! the maximal contiguous run of lines matching its predicate, strips the
//! per-line markers and renders the run through its template as one atomic
//! unit. A blank line (or any non-matching line) terminates the run: the
//! next matching line starts a fresh block, never a merged one.
//!
//! Collected items are rendered in input order.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{inline, utils::never_matching_regex};

static UNORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^- (.+)$").unwrap_or_else(|e| {
    error!("Failed to compile UNORDERED_ITEM_RE regex: {e}");
    never_matching_regex()
  })
});

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\d+\. (.+)$").unwrap_or_else(|e| {
    error!("Failed to compile ORDERED_ITEM_RE regex: {e}");
    never_matching_regex()
  })
});

static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\d+\. ").unwrap_or_else(|e| {
    error!("Failed to compile ORDERED_MARKER_RE regex: {e}");
    never_matching_regex()
  })
});

static INDENTED_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^ {4}").unwrap_or_else(|e| {
    error!("Failed to compile INDENTED_RE regex: {e}");
    never_matching_regex()
  })
});

/// A successful block render.
///
/// `consumed_through` is the index of the last line that belongs to the
/// block; the caller must not re-process any line up to and including it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch {
  /// The block rendered through its template, ready for output.
  pub rendered: String,

  /// Index of the last consumed line.
  pub consumed_through: usize,
}

/// Collect a contiguous run of matching lines starting at `start`.
///
/// Returns `None` when the start line does not match, so the caller can
/// try the next renderer without advancing.
fn collect_run<M, S>(
  lines: &[&str],
  start: usize,
  is_item: M,
  strip: S,
) -> Option<(Vec<String>, usize)>
where
  M: Fn(&str) -> bool,
  S: Fn(&str) -> String,
{
  if !is_item(lines.get(start)?) {
    return None;
  }

  let mut items = vec![strip(lines[start])];
  let mut last = start;
  for (offset, line) in lines[start + 1..].iter().enumerate() {
    if !is_item(line) {
      break;
    }
    items.push(strip(line));
    last = start + 1 + offset;
  }

  Some((items, last))
}

/// Render a run of `- item` lines as a `[LIST]` block.
#[must_use]
pub fn unordered_list(lines: &[&str], start: usize) -> Option<BlockMatch> {
  let (items, last) = collect_run(
    lines,
    start,
    |line| UNORDERED_ITEM_RE.is_match(line),
    |line| line.strip_prefix("- ").unwrap_or(line).to_string(),
  )?;

  Some(BlockMatch {
    rendered:         render_list("[LIST]", &items),
    consumed_through: last,
  })
}

/// Render a run of `1. item` lines as a `[LIST=1]` block.
#[must_use]
pub fn ordered_list(lines: &[&str], start: usize) -> Option<BlockMatch> {
  let (items, last) = collect_run(
    lines,
    start,
    |line| ORDERED_ITEM_RE.is_match(line),
    |line| ORDERED_MARKER_RE.replace(line, "").into_owned(),
  )?;

  Some(BlockMatch {
    rendered:         render_list("[LIST=1]", &items),
    consumed_through: last,
  })
}

/// Render a run of lines indented by at least four spaces as one `[CODE]`
/// block, indentation stripped from every line.
#[must_use]
pub fn indented_code(lines: &[&str], start: usize) -> Option<BlockMatch> {
  let (items, last) = collect_run(
    lines,
    start,
    |line| INDENTED_RE.is_match(line),
    |line| line.trim_start().to_string(),
  )?;

  let mut rendered = String::from("[CODE]");
  for item in &items {
    rendered.push('\n');
    rendered.push_str(item);
  }
  rendered.push_str("\n[/CODE]");

  Some(BlockMatch {
    rendered,
    consumed_through: last,
  })
}

/// Render a run of quote lines as one `[QUOTE]` block.
///
/// The author, if any, comes from the first line of the run; the `>`
/// markers are stripped from every line.
#[must_use]
pub fn quote_block(lines: &[&str], start: usize) -> Option<BlockMatch> {
  let (author, _) = inline::quote_parts(lines.get(start)?)?;

  let (items, last) = collect_run(
    lines,
    start,
    |line| inline::quote_parts(line).is_some(),
    |line| {
      inline::quote_parts(line).map_or_else(String::new, |(_, text)| text)
    },
  )?;

  let opening = if author.is_empty() {
    "[QUOTE]".to_string()
  } else {
    format!("[QUOTE=\"{author}\"]")
  };

  let mut rendered = opening;
  for item in &items {
    rendered.push('\n');
    rendered.push_str(item);
  }
  rendered.push_str("\n[/QUOTE]");

  Some(BlockMatch {
    rendered,
    consumed_through: last,
  })
}

fn render_list(opening: &str, items: &[String]) -> String {
  let mut rendered = String::from(opening);
  for item in items {
    rendered.push_str("\n[*]");
    rendered.push_str(item);
  }
  rendered.push_str("\n[/LIST]");
  rendered
}
