use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use bbmark_core::BbcodeProcessor;
use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, debug, info};

mod cli;
mod config;
mod error;
#[cfg(feature = "serve")]
mod serve;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Convert {
      input,
      output,
      inline_methods,
      code_block_types,
      default_code_type,
    } => {
      let mut config = Config::load(cli.config_file.as_deref())?;

      // CLI flags take precedence over the configuration file
      if !inline_methods.is_empty() {
        config.inline_methods = Some(inline_methods.clone());
      }
      if !code_block_types.is_empty() {
        config.code_block_types = Some(code_block_types.clone());
      }
      if let Some(tag) = default_code_type {
        config.default_code_type = Some(tag.clone());
      }

      convert(&config, input.as_deref(), output.as_deref())
    },

    Commands::Init { output, force } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      // Create parent directories if needed
      if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
          info!("Created directory: {}", parent.display());
        }
      }

      Config::generate_default_config(output).wrap_err_with(|| {
        format!(
          "Failed to generate configuration file: {}",
          output.display()
        )
      })?;

      info!(
        "Configuration file created successfully. Edit it to customize the \
         conversion."
      );
      Ok(())
    },

    #[cfg(feature = "serve")]
    Commands::Serve { root, port } => serve::run(root, *port),
  }
}

/// Run a single Markdown to BBCode conversion.
fn convert(
  config: &Config,
  input: Option<&Path>,
  output: Option<&Path>,
) -> Result<()> {
  let options = config.render_options()?;
  let processor = BbcodeProcessor::new(options);

  let markdown = match input {
    Some(path) => fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read input: {}", path.display()))?,
    None => {
      let mut buffer = String::new();
      io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("Failed to read standard input")?;
      buffer
    },
  };
  debug!("read {} bytes of markdown", markdown.len());

  let bbcode = processor.convert(&markdown);

  match output {
    Some(path) => {
      write_output(path, &bbcode).wrap_err_with(|| {
        format!("Failed to write output: {}", path.display())
      })?;
      info!("Wrote BBCode to {}", path.display());
    },
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(bbcode.as_bytes())?;
      stdout.write_all(b"\n")?;
    },
  }

  Ok(())
}

fn write_output(path: &Path, bbcode: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() && !parent.exists() {
      fs::create_dir_all(parent)?;
    }
  }
  let mut file = fs::File::create(path)?;
  file.write_all(bbcode.as_bytes())?;
  file.write_all(b"\n")?;
  Ok(())
}
