//! Core implementation of the document processor.
//!
//! The processor walks the document once, line by line, and classifies
//! each position as either already-converted BBCode (copied through
//! unchanged), the start of a multi-line block construct (rendered
//! atomically), or a bare line (run through the inline substitution
//! chain). Code spans have been extracted before the walk starts, so
//! nothing here can misread markup characters inside code.

use std::sync::LazyLock;

use log::{error, trace};
use regex::Regex;

use crate::{
  RenderOptions, block, code,
  utils::{never_matching_regex, normalize_line_endings},
};

// A line that is nothing but an opening block tag, e.g. `[CODE]`,
// `[LIST=1]` or `[QUOTE="Author"]`. Such a line flips the walk into
// skip-mode: the input is already BBCode here.
static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\[([A-Z]+)(?:=[^\]]*)?\]$").unwrap_or_else(|e| {
    error!("Failed to compile OPEN_TAG_RE regex: {e}");
    never_matching_regex()
  })
});

static CLOSE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\[/([A-Z]+)\]$").unwrap_or_else(|e| {
    error!("Failed to compile CLOSE_TAG_RE regex: {e}");
    never_matching_regex()
  })
});

// An opening tag anywhere in a line, e.g. `[CODE]` or `[URL="a"]`. The
// regex crate has no backreferences, so the matching closer is searched
// separately over the rest of the line.
static INLINE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[([A-Z]+)(?:[ =][^\]]*)?\]").unwrap_or_else(|e| {
    error!("Failed to compile INLINE_TAG_RE regex: {e}");
    never_matching_regex()
  })
});

/// The Markdown to BBCode document processor.
///
/// Pure and synchronous: a processor holds nothing but its immutable
/// options, so concurrent [`convert`](Self::convert) calls share no state.
#[derive(Debug, Clone)]
pub struct BbcodeProcessor {
  options: RenderOptions,
}

impl BbcodeProcessor {
  /// Create a new processor with the given options.
  #[must_use]
  pub const fn new(options: RenderOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &RenderOptions {
    &self.options
  }

  /// Convert a whole Markdown document into a single BBCode string.
  ///
  /// Line endings are normalized to LF first, then code spans are
  /// extracted, then the line walk runs. Re-running the conversion over
  /// its own output is a no-op: regions that already carry BBCode tags
  /// are copied through unchanged.
  #[must_use]
  pub fn convert(&self, markdown: &str) -> String {
    let normalized = normalize_line_endings(markdown);
    let extracted = code::extract_code(&normalized, &self.options);
    let lines: Vec<&str> = extracted.split('\n').collect();
    trace!("converting document of {} lines", lines.len());

    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut index = 0;
    while index < lines.len() {
      let line = lines[index];

      // Idempotence guard: a bare opening tag means this region is
      // already BBCode. Copy through until its closing tag or the end of
      // the document.
      if let Some(tag) = opening_block_tag(line) {
        trace!("skipping existing [{tag}] block at line {index}");
        output.push(line.to_string());
        index += 1;
        while index < lines.len() {
          output.push(lines[index].to_string());
          let closed = closes_tag(lines[index], &tag);
          index += 1;
          if closed {
            break;
          }
        }
        continue;
      }

      // Block constructs, in fixed priority order. The first renderer
      // that matches wins and its consumed range collapses into one
      // rendered entry. List and code output is already in final form.
      if let Some(found) = block::unordered_list(&lines, index)
        .or_else(|| block::ordered_list(&lines, index))
        .or_else(|| block::indented_code(&lines, index))
      {
        output.push(found.rendered);
        index = found.consumed_through + 1;
        continue;
      }

      // Quoted text may still carry inline markup (links, emphasis), so
      // the wrapped lines go through the per-line conversion; the
      // wrapper tags have no markers a pass could touch.
      if let Some(found) = block::quote_block(&lines, index) {
        let rendered = found
          .rendered
          .split('\n')
          .map(|piece| self.convert_line(piece))
          .collect::<Vec<_>>()
          .join("\n");
        output.push(rendered);
        index = found.consumed_through + 1;
        continue;
      }

      output.push(self.convert_line(line));
      index += 1;
    }

    output.join("\n")
  }

  // A line carrying a complete tag pair was converted earlier (by the
  // code pre-pass or a previous run) and is left alone; anything else
  // goes through the inline chain.
  fn convert_line(&self, line: &str) -> String {
    if contains_converted_pair(line) {
      line.to_string()
    } else {
      self.apply_inline_chain(line)
    }
  }

  fn apply_inline_chain(&self, line: &str) -> String {
    self
      .options
      .inline_methods
      .iter()
      .fold(line.to_string(), |text, method| method.apply(&text))
  }
}

impl Default for BbcodeProcessor {
  fn default() -> Self {
    Self::new(RenderOptions::default())
  }
}

fn opening_block_tag(line: &str) -> Option<String> {
  OPEN_TAG_RE
    .captures(line)
    .map(|caps| caps[1].to_string())
}

fn closes_tag(line: &str, tag: &str) -> bool {
  CLOSE_TAG_RE
    .captures(line)
    .is_some_and(|caps| &caps[1] == tag)
}

// True when some opening tag on the line has a matching closer later in
// the line. The closer is searched over the whole remainder, not just up
// to the nearest closing bracket, so a stray mismatched closer inside a
// code span (`[CODE]**x**[/B][/CODE]`) cannot unmask the span.
fn contains_converted_pair(line: &str) -> bool {
  INLINE_TAG_RE.captures_iter(line).any(|caps| {
    caps.get(0).is_some_and(|opening| {
      line[opening.end()..].contains(&format!("[/{}]", &caps[1]))
    })
  })
}
