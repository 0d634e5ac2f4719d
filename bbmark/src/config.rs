use std::{
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use bbmark_core::{InlineMethod, RenderOptions, RenderOptionsBuilder};
use log::{debug, info};
use serde::Deserialize;

use crate::error::BbmarkError;

/// Name of the configuration file picked up from the working directory
/// when no explicit path is given.
const DEFAULT_CONFIG_FILE: &str = "bbmark.toml";

/// Default configuration written by `bbmark init`.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# bbmark configuration
#
# Inline substitution passes, applied to each line in order. The order
# decides precedence between overlapping markers (`**` vs `*`).
inline_methods = ["url", "image", "strong", "italic", "underscore", "quote"]

# Recognized fenced code block language tags, matched case-insensitively.
code_block_types = ["CODE", "HTML", "PHP"]

# Fallback tag for fenced blocks with an absent or unrecognized language.
default_code_type = "CODE"
"#;

/// Configuration options for bbmark.
///
/// Every field is optional: absent values fall back to the engine
/// defaults, and CLI flags override whatever the file provides.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
  /// Inline substitution order, by method name
  #[serde(default)]
  pub inline_methods: Option<Vec<String>>,

  /// Recognized fenced code block language tags
  #[serde(default)]
  pub code_block_types: Option<Vec<String>>,

  /// Fallback code block tag
  #[serde(default)]
  pub default_code_type: Option<String>,
}

impl Config {
  /// Create a new configuration from a TOML file.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BbmarkError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      BbmarkError::Config(format!(
        "Failed to read config file {}: {e}",
        path.display()
      ))
    })?;
    let config = toml::from_str(&content)?;
    debug!("loaded configuration from {}", path.display());
    Ok(config)
  }

  /// Load configuration from an explicit path, or from `bbmark.toml` in
  /// the working directory when it exists, or fall back to defaults.
  pub fn load(explicit: Option<&Path>) -> Result<Self, BbmarkError> {
    if let Some(path) = explicit {
      return Self::from_file(path);
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
      Self::from_file(&default_path)
    } else {
      Ok(Self::default())
    }
  }

  /// Resolve this configuration into engine [`RenderOptions`].
  ///
  /// Unknown inline method names are a configuration error, never
  /// silently dropped.
  pub fn render_options(&self) -> Result<RenderOptions, BbmarkError> {
    let mut builder = RenderOptionsBuilder::new();

    if let Some(methods) = &self.inline_methods {
      let methods = methods
        .iter()
        .map(|name| InlineMethod::from_str(name))
        .collect::<Result<Vec<_>, _>>()?;
      builder = builder.inline_methods(methods);
    }

    if let Some(types) = &self.code_block_types {
      builder = builder.code_block_types(types.iter().cloned());
    }

    if let Some(tag) = &self.default_code_type {
      builder = builder.default_code_type(tag.clone());
    }

    Ok(builder.build())
  }

  /// Generate a default configuration file at the given path.
  pub fn generate_default_config(path: &Path) -> Result<(), BbmarkError> {
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
    info!("Created configuration file: {}", path.display());
    Ok(())
  }
}
