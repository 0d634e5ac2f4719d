//! Inline substitution passes.
//!
//! Each function maps a single line of Markdown to a single line of BBCode
//! and is free of side effects. On no match the input is returned unchanged;
//! none of these passes can fail. They are composed by the document
//! processor in the order given by
//! [`RenderOptions::inline_methods`](crate::RenderOptions).

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

// Link and image patterns. The optional leading `!` is captured so `url`
// can leave image syntax alone for `image` to handle; the regex crate has
// no lookbehind.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").unwrap_or_else(|e| {
    error!("Failed to compile LINK_RE regex: {e}");
    never_matching_regex()
  })
});

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap_or_else(|e| {
    error!("Failed to compile IMAGE_RE regex: {e}");
    never_matching_regex()
  })
});

// Emphasis marker runs. Both sides of a span are captured as whole runs so
// the callers can compare run lengths: uneven runs are left untouched
// instead of partially converted.
static ASTERISK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\*+)([^*\n]+)(\*+)").unwrap_or_else(|e| {
    error!("Failed to compile ASTERISK_RUN_RE regex: {e}");
    never_matching_regex()
  })
});

static UNDERSCORE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(_+)([^_\n]+)(_+)").unwrap_or_else(|e| {
    error!("Failed to compile UNDERSCORE_RUN_RE regex: {e}");
    never_matching_regex()
  })
});

// Quote line pattern: `author> text` or `> text`. The author side
// excludes brackets, so a line opening with a BBCode tag can never be
// re-read as a quote; the text side is unrestricted and may carry
// links, images or extracted code spans.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([^\[\]]*)> (.+)$").unwrap_or_else(|e| {
    error!("Failed to compile QUOTE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Convert Markdown links into BBCode `[URL]` elements.
///
/// Image syntax (`![alt](target)`) is passed through unchanged so that
/// [`image`] can handle it, regardless of chain order.
///
/// # Examples
///
/// ```
/// assert_eq!(bbmark_core::inline::url("[Data](A)"), r#"[URL="A"]Data[/URL]"#);
/// assert_eq!(bbmark_core::inline::url("![Alt](A)"), "![Alt](A)");
/// ```
#[must_use]
pub fn url(line: &str) -> String {
  LINK_RE
    .replace_all(line, |caps: &regex::Captures| {
      if &caps[1] == "!" {
        caps[0].to_string()
      } else {
        format!(r#"[URL="{}"]{}[/URL]"#, &caps[3], &caps[2])
      }
    })
    .into_owned()
}

/// Convert Markdown images into BBCode `[IMG]` elements.
#[must_use]
pub fn image(line: &str) -> String {
  IMAGE_RE
    .replace_all(line, |caps: &regex::Captures| {
      format!(r#"[IMG alt="{}"]{}[/IMG]"#, &caps[1], &caps[2])
    })
    .into_owned()
}

/// Convert `**text**` into `[B]text[/B]`.
///
/// Only spans delimited by exactly two asterisks on each side convert;
/// `***text***` and other uneven runs stay literal.
#[must_use]
pub fn strong(line: &str) -> String {
  ASTERISK_RUN_RE
    .replace_all(line, |caps: &regex::Captures| {
      if caps[1].len() == 2 && caps[3].len() == 2 {
        format!("[B]{}[/B]", &caps[2])
      } else {
        caps[0].to_string()
      }
    })
    .into_owned()
}

/// Convert `*text*` into `[I]text[/I]`.
///
/// Spans delimited by double asterisks belong to [`strong`] and are left
/// untouched here, whatever the configured chain order.
#[must_use]
pub fn italic(line: &str) -> String {
  ASTERISK_RUN_RE
    .replace_all(line, |caps: &regex::Captures| {
      if caps[1].len() == 1 && caps[3].len() == 1 {
        format!("[I]{}[/I]", &caps[2])
      } else {
        caps[0].to_string()
      }
    })
    .into_owned()
}

/// Convert `__text__` or `_text_` into `[U]text[/U]`.
///
/// The underscore runs on both sides must have the same length (one or
/// two); an uneven pair such as `_text__` stays literal.
///
/// # Examples
///
/// ```
/// assert_eq!(bbmark_core::inline::underscore("_mark_"), "[U]mark[/U]");
/// assert_eq!(bbmark_core::inline::underscore("_mark__"), "_mark__");
/// ```
#[must_use]
pub fn underscore(line: &str) -> String {
  UNDERSCORE_RUN_RE
    .replace_all(line, |caps: &regex::Captures| {
      let lead = caps[1].len();
      let trail = caps[3].len();
      if lead == trail && lead <= 2 {
        format!("[U]{}[/U]", &caps[2])
      } else {
        caps[0].to_string()
      }
    })
    .into_owned()
}

/// Convert a Markdown quote line into a BBCode `[QUOTE]` element.
///
/// `author> text` carries the author over into the opening tag; a bare
/// `> text` produces the authorless form. The author is everything before
/// the last `>` followed by a space, trimmed; when the text itself
/// contains a literal `>` the split happens at the last occurrence. The
/// quoted text may contain bracketed content, including tags produced by
/// earlier passes; only an author containing brackets declines the match.
#[must_use]
pub fn quote(line: &str) -> String {
  let Some(caps) = QUOTE_RE.captures(line) else {
    return line.to_string();
  };

  let author = caps[1].trim();
  let text = &caps[2];
  if author.is_empty() {
    format!("[QUOTE]\n{text}\n[/QUOTE]")
  } else {
    format!("[QUOTE=\"{author}\"]\n{text}\n[/QUOTE]")
  }
}

/// Capture groups of the quote line pattern, for callers that need the
/// author and text separately (the quote block renderer).
pub(crate) fn quote_parts(line: &str) -> Option<(String, String)> {
  QUOTE_RE
    .captures(line)
    .map(|caps| (caps[1].trim().to_string(), caps[2].to_string()))
}
