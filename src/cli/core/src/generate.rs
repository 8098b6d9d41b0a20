/* src/cli/core/src/generate.rs */

// `seam-sitemap generate`: scans the route tree and writes sitemap.xml
// (plus sitemap{N}.xml children when the path count exceeds max_per_page).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seam_sitemap::paginate::{page_slice, total_pages};
use seam_sitemap::xml::{child_sitemap_name, render_index, render_urlset};
use seam_sitemap::{DirRouteSource, generate_paths};

use crate::config::SitemapToml;
use crate::ui::{self, DIM, RESET};

const ROOT_FILE: &str = "sitemap.xml";

/// Files written by one `generate` run, in write order.
#[derive(Debug)]
pub struct GenerateOutput {
  pub paths: usize,
  pub files: Vec<PathBuf>,
}

pub fn run_generate(
  config: &SitemapToml,
  base_dir: &Path,
  out_override: Option<&Path>,
) -> Result<GenerateOutput> {
  let sitemap = config.sitemap_config()?;
  let routes_dir = base_dir.join(&config.routes.dir);
  let out_dir = match out_override {
    Some(dir) => dir.to_path_buf(),
    None => base_dir.join(&config.output.dir),
  };

  ui::arrow(&format!("scanning {}", routes_dir.display()));
  let source = DirRouteSource::scan(&routes_dir, &sitemap.layout)
    .with_context(|| format!("failed to scan routes in {}", routes_dir.display()))?;

  sitemap.validate()?;
  let records = generate_paths(&sitemap, &source)?;
  let max = sitemap.max_per_page;
  tracing::debug!(paths = records.len(), max, "paths generated");

  std::fs::create_dir_all(&out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;
  remove_stale_children(&out_dir)?;

  let mut files = Vec::new();
  if records.len() <= max {
    files.push(write_file(&out_dir, ROOT_FILE, &render_urlset(&sitemap.origin, &records))?);
  } else {
    let total = total_pages(records.len(), max);
    files.push(write_file(&out_dir, ROOT_FILE, &render_index(&sitemap.origin, total))?);
    for page in 1..=total {
      let slice = page_slice(&records, page, max)?;
      let xml = render_urlset(&sitemap.origin, slice);
      files.push(write_file(&out_dir, &child_sitemap_name(page), &xml)?);
    }
  }

  ui::ok(&format!("{} paths {DIM}({} files){RESET}", records.len(), files.len()));
  Ok(GenerateOutput { paths: records.len(), files })
}

fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
  ui::detail_ok(&format!("{name} {DIM}{}{RESET}", ui::format_size(content.len() as u64)));
  Ok(path)
}

/// `sitemap{N}.xml` -> true. The root `sitemap.xml` is overwritten, never removed.
fn is_child_file(name: &str) -> bool {
  name
    .strip_prefix("sitemap")
    .and_then(|rest| rest.strip_suffix(".xml"))
    .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Drop children from a previous run so a shrinking sitemap leaves no orphans.
fn remove_stale_children(dir: &Path) -> Result<()> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
  for entry in entries {
    let entry = entry?;
    let name = entry.file_name();
    if name.to_str().is_some_and(is_child_file) && entry.file_type()?.is_file() {
      std::fs::remove_file(entry.path())
        .with_context(|| format!("failed to remove {}", entry.path().display()))?;
    }
  }
  Ok(())
}
