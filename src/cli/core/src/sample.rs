/* src/cli/core/src/sample.rs */

// `seam-sitemap sample`: one URL per route pattern from a generated sitemap file.
// Index files are followed through their children, resolved as siblings on disk.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use seam_sitemap::{DirRouteSource, SampleError, sample_paths_with, sample_urls_with};
use url::Url;

use crate::config::SitemapToml;
use crate::ui;

pub fn run_sample(
  file: &Path,
  config: &SitemapToml,
  base_dir: &Path,
  paths_only: bool,
) -> Result<Vec<String>> {
  let xml =
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
  let layout = config.routes.layout()?;
  let routes_dir = base_dir.join(&config.routes.dir);
  let source = DirRouteSource::scan(&routes_dir, &layout)
    .with_context(|| format!("failed to scan routes in {}", routes_dir.display()))?;

  let dir = file.parent().unwrap_or_else(|| Path::new("."));
  let load_child = |loc: &str| load_sibling(dir, loc);
  let sampled = if paths_only {
    sample_paths_with(&xml, &source, &layout, load_child)
  } else {
    sample_urls_with(&xml, &source, &layout, load_child)
  };
  let sampled = sampled.with_context(|| format!("failed to sample {}", file.display()))?;
  tracing::debug!(file = %file.display(), sampled = sampled.len(), "sitemap sampled");
  Ok(sampled)
}

/// One sample per line on `out`; nothing but samples is ever written there.
pub fn write_samples<W: Write>(out: &mut W, sampled: &[String], file: &Path) -> Result<()> {
  if sampled.is_empty() {
    ui::warn(&format!("no urls sampled from {}", file.display()));
  }
  for line in sampled {
    writeln!(out, "{line}").context("failed to write samples")?;
  }
  Ok(())
}

/// `https://example.com/sitemap2.xml` -> `{dir}/sitemap2.xml`
fn load_sibling(dir: &Path, loc: &str) -> Result<String, SampleError> {
  let child_load = |reason: String| SampleError::ChildLoad { loc: loc.to_string(), reason };
  let url = Url::parse(loc).map_err(|e| child_load(e.to_string()))?;
  let name = url
    .path_segments()
    .and_then(|mut segments| segments.next_back())
    .filter(|name| !name.is_empty())
    .ok_or_else(|| child_load("no file name in url".to_string()))?;
  std::fs::read_to_string(dir.join(name)).map_err(|e| child_load(e.to_string()))
}
