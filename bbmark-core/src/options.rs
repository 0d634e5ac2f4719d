//! Configuration types for the BBCode renderer.
//!
//! Contains the conversion options (`RenderOptions`), the ordered inline
//! dispatch table (`InlineMethod`) and a builder for fluent construction.
//!
//! # Examples
//!
//! ```
//! use bbmark_core::{RenderOptions, RenderOptionsBuilder, InlineMethod};
//!
//! let options = RenderOptionsBuilder::new()
//!   .inline_methods(vec![InlineMethod::Url, InlineMethod::Strong])
//!   .default_code_type("CODE")
//!   .build();
//!
//! assert_eq!(options.inline_methods.len(), 2);
//! ```

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration values that cannot be resolved.
#[derive(Debug, Error)]
pub enum OptionsError {
  /// An inline method name that is not part of the dispatch table.
  #[error(
    "unknown inline method `{0}` (expected one of: url, image, strong, \
     italic, underscore, quote)"
  )]
  UnknownMethod(String),
}

/// A single inline substitution pass.
///
/// The variants form an explicit dispatch table: each maps to one of the
/// pure line transforms in [`crate::inline`]. The order they appear in
/// [`RenderOptions::inline_methods`] is the order they are applied to each
/// line, which decides precedence between overlapping markers (`**` vs `*`,
/// `__` vs `_`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineMethod {
  /// `[text](target)` to `[URL="target"]text[/URL]`
  Url,
  /// `![alt](target)` to `[IMG alt="alt"]target[/IMG]`
  Image,
  /// `**text**` to `[B]text[/B]`
  Strong,
  /// `*text*` to `[I]text[/I]`
  Italic,
  /// `__text__` or `_text_` to `[U]text[/U]`
  Underscore,
  /// `author> text` to a `[QUOTE]` element
  Quote,
}

impl InlineMethod {
  /// Apply this pass to a single line.
  #[must_use]
  pub fn apply(self, line: &str) -> String {
    match self {
      Self::Url => crate::inline::url(line),
      Self::Image => crate::inline::image(line),
      Self::Strong => crate::inline::strong(line),
      Self::Italic => crate::inline::italic(line),
      Self::Underscore => crate::inline::underscore(line),
      Self::Quote => crate::inline::quote(line),
    }
  }

  /// The configuration name of this pass.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Url => "url",
      Self::Image => "image",
      Self::Strong => "strong",
      Self::Italic => "italic",
      Self::Underscore => "underscore",
      Self::Quote => "quote",
    }
  }
}

impl FromStr for InlineMethod {
  type Err = OptionsError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "url" => Ok(Self::Url),
      "image" => Ok(Self::Image),
      "strong" => Ok(Self::Strong),
      "italic" => Ok(Self::Italic),
      "underscore" => Ok(Self::Underscore),
      "quote" => Ok(Self::Quote),
      other => Err(OptionsError::UnknownMethod(other.to_string())),
    }
  }
}

/// Options for configuring a [`crate::BbcodeProcessor`].
///
/// Constructed once per conversion surface and never mutated afterwards;
/// the processor holds it immutably for its whole lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
  /// Ordered inline substitution chain applied to bare lines.
  pub inline_methods: Vec<InlineMethod>,

  /// Recognized fenced code block language tags, compared
  /// case-insensitively against the tag on the opening fence.
  pub code_block_types: Vec<String>,

  /// Tag used for fenced blocks with an absent or unrecognized language.
  pub default_code_type: String,
}

impl RenderOptions {
  /// Resolve the BBCode tag for a fenced code block language annotation.
  ///
  /// Unknown or empty tags silently fall back to
  /// [`RenderOptions::default_code_type`].
  #[must_use]
  pub fn code_type_for(&self, tag: &str) -> String {
    let upper = tag.trim().to_uppercase();
    if !upper.is_empty()
      && self
        .code_block_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&upper))
    {
      upper
    } else {
      self.default_code_type.clone()
    }
  }
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      inline_methods:    vec![
        InlineMethod::Url,
        InlineMethod::Image,
        InlineMethod::Strong,
        InlineMethod::Italic,
        InlineMethod::Underscore,
        InlineMethod::Quote,
      ],
      code_block_types:  vec![
        "CODE".to_string(),
        "HTML".to_string(),
        "PHP".to_string(),
      ],
      default_code_type: "CODE".to_string(),
    }
  }
}

/// Builder for constructing `RenderOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct RenderOptionsBuilder {
  options: RenderOptions,
}

impl RenderOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: RenderOptions::default(),
    }
  }

  /// Replace the inline substitution chain.
  #[must_use]
  pub fn inline_methods(mut self, methods: Vec<InlineMethod>) -> Self {
    self.options.inline_methods = methods;
    self
  }

  /// Replace the set of recognized fenced code block tags.
  #[must_use]
  pub fn code_block_types<I, S>(mut self, types: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.options.code_block_types = types.into_iter().map(Into::into).collect();
    self
  }

  /// Set the fallback code block tag.
  #[must_use]
  pub fn default_code_type<S: Into<String>>(mut self, tag: S) -> Self {
    self.options.default_code_type = tag.into();
    self
  }

  /// Build the final `RenderOptions`.
  #[must_use]
  pub fn build(self) -> RenderOptions {
    self.options
  }
}
