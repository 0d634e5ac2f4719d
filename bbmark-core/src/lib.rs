//! # bbmark-core - a Markdown to BBCode conversion engine
//!
//! This crate converts Markdown-formatted documents into the BBCode tag
//! dialect used by forum software, preserving inline emphasis, links,
//! images, quotes and block constructs (lists, code blocks).
//!
//! ## Quick Start
//!
//! ```rust
//! use bbmark_core::{BbcodeProcessor, RenderOptions};
//!
//! let processor = BbcodeProcessor::new(RenderOptions::default());
//! assert_eq!(processor.convert("**Strong!**"), "[B]Strong![/B]");
//! assert_eq!(
//!   processor.convert("[Data](A)"),
//!   r#"[URL="A"]Data[/URL]"#,
//! );
//! ```
//!
//! ## How it works
//!
//! - **Code extraction runs first** over the whole document, so markup
//!   characters inside fenced or single-backtick code spans are never
//!   misread by later passes.
//! - **Block constructs** (lists, indented code, quotes) are collected as
//!   contiguous line runs and rendered atomically.
//! - **Inline substitutions** (links, images, emphasis) run over the
//!   remaining bare lines, in a configurable order.
//! - **Idempotence**: regions that already carry BBCode tags are copied
//!   through unchanged, so re-running the converter over its own output,
//!   or over mixed Markdown/BBCode input, never double-converts.
//!
//! ## Configuration
//!
//! ```rust
//! use bbmark_core::{BbcodeProcessor, InlineMethod, RenderOptionsBuilder};
//!
//! let options = RenderOptionsBuilder::new()
//!   .code_block_types(["CODE", "HTML", "PHP", "SQL"])
//!   .default_code_type("CODE")
//!   .build();
//!
//! let processor = BbcodeProcessor::new(options);
//! assert_eq!(processor.convert("```sql\nSELECT 1;\n```"), "[SQL]\nSELECT 1;\n[/SQL]");
//! ```

pub mod block;
pub mod code;
pub mod inline;
mod options;
mod processor;
pub mod utils;

pub use crate::{
  block::BlockMatch,
  options::{
    InlineMethod,
    OptionsError,
    RenderOptions,
    RenderOptionsBuilder,
  },
  processor::BbcodeProcessor,
};

/// Convert a Markdown document to BBCode with default options.
///
/// Convenience wrapper over [`BbcodeProcessor`] for one-shot conversions.
///
/// # Examples
///
/// ```
/// assert_eq!(bbmark_core::convert("    code line"), "[CODE]\ncode line\n[/CODE]");
/// ```
#[must_use]
pub fn convert(markdown: &str) -> String {
  BbcodeProcessor::new(RenderOptions::default()).convert(markdown)
}
