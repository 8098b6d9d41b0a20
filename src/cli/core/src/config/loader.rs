/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SitemapToml;

pub const CONFIG_FILE: &str = "sitemap.toml";

/// Walk upward from `start` to find `sitemap.toml`, like Cargo.toml discovery
pub fn find_sitemap_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_sitemap_config(path: &Path) -> Result<SitemapToml> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: SitemapToml =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}
