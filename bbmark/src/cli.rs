use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for bbmark
#[derive(Parser, Debug)]
#[command(author, version, about = "bbmark: Markdown to BBCode converter")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML). Defaults to `bbmark.toml` in the
  /// working directory when present.
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the bbmark CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Convert a Markdown document to BBCode.
  Convert {
    /// Input Markdown file. Reads standard input when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the BBCode result. Writes standard output when
    /// omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Inline substitution order (subset of url, image, strong, italic,
    /// underscore, quote; comma separated). Overrides the config file.
    #[arg(long, value_delimiter = ',')]
    inline_methods: Vec<String>,

    /// Recognized fenced code block language tags (comma separated).
    /// Overrides the config file.
    #[arg(long, value_delimiter = ',')]
    code_block_types: Vec<String>,

    /// BBCode tag used for fenced blocks with an absent or unrecognized
    /// language tag.
    #[arg(long)]
    default_code_type: Option<String>,
  },

  /// Initialize a new bbmark configuration file.
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "bbmark.toml")]
    output: PathBuf,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Serve a demo directory over HTTP.
  #[cfg(feature = "serve")]
  Serve {
    /// Directory to serve files from
    #[arg(short, long, default_value = "public")]
    root: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 4567)]
    port: u16,
  },
}

impl Cli {
  /// Parse command line arguments.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
