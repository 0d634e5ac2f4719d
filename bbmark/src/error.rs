use std::io;

use thiserror::Error;

/// Top-level error type for the bbmark crate.
#[derive(Debug, Error)]
pub enum BbmarkError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("Options error: {0}")]
  Options(#[from] bbmark_core::OptionsError),
}
