/* src/cli/core/src/main.rs */

mod config;
mod generate;
mod logging;
mod sample;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{SitemapToml, find_sitemap_config, load_sitemap_config};

#[derive(Parser)]
#[command(name = "seam-sitemap", about = "Sitemap generator for file-routed sites", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Write sitemap.xml (and sitemap{N}.xml pages) from the route tree
  Generate {
    /// Path to sitemap.toml (default: search upward from cwd)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory, overriding [output].dir
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Print one URL per route pattern from a generated sitemap
  Sample {
    /// sitemap.xml or a sitemap index; children are read from the same directory
    file: PathBuf,
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print paths without the origin
    #[arg(long)]
    paths: bool,
  },
}

/// Config path and the project directory it lives in.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SitemapToml)> {
  let path = match explicit {
    Some(path) => path,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_sitemap_config(&cwd)?
    }
  };
  let config = load_sitemap_config(&path)?;
  Ok((path, config))
}

fn base_dir(config_path: &Path) -> &Path {
  config_path.parent().unwrap_or_else(|| Path::new("."))
}

fn main() -> Result<()> {
  logging::setup_logging("warn");
  let cli = Cli::parse();

  match cli.command {
    Command::Generate { config, out } => {
      let (path, config) = resolve_config(config)?;
      ui::banner("generate", Some(&config.sitemap.origin));
      generate::run_generate(&config, base_dir(&path), out.as_deref())?;
    }
    Command::Sample { file, config, paths } => {
      let (path, config) = resolve_config(config)?;
      let sampled = sample::run_sample(&file, &config, base_dir(&path), paths)?;
      sample::write_samples(&mut std::io::stdout().lock(), &sampled, &file)?;
    }
  }
  Ok(())
}
