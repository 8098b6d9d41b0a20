/* src/cli/core/src/config/types.rs */

use anyhow::{Context, Result, bail};
use seam_sitemap::normalize::{DEFAULT_PAGE_MARKER, DEFAULT_ROUTE_PREFIX};
use seam_sitemap::{RouteLayout, SitemapConfig};
use serde::Deserialize;

/// Parsed `sitemap.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SitemapToml {
  pub sitemap: SitemapConfig,
  #[serde(default)]
  pub routes: RoutesSection,
  #[serde(default)]
  pub output: OutputSection,
}

impl SitemapToml {
  pub fn validate(&self) -> Result<()> {
    self.sitemap.validate()?;
    if let Some(ref lang) = self.sitemap.lang {
      if lang.default.is_empty() {
        bail!("sitemap.lang.default must not be empty");
      }
      if lang.alternates.is_empty() {
        bail!("sitemap.lang.alternates must list at least one language");
      }
    }
    if self.sitemap.page.is_some() {
      bail!("sitemap.page is a request parameter and cannot be set in sitemap.toml");
    }
    self.routes.layout()?;
    Ok(())
  }

  /// Engine config with the route layout from `[routes]` applied.
  pub fn sitemap_config(&self) -> Result<SitemapConfig> {
    Ok(self.sitemap.clone().layout(self.routes.layout()?))
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutesSection {
  /// Route tree on disk, relative to sitemap.toml
  #[serde(default = "default_routes_dir")]
  pub dir: String,
  /// Prefix the host router puts on route identifiers
  #[serde(default = "default_route_prefix")]
  pub prefix: String,
  #[serde(default = "default_page_marker")]
  pub page_marker: String,
}

impl RoutesSection {
  pub fn layout(&self) -> Result<RouteLayout> {
    RouteLayout::new(self.prefix.as_str(), &self.page_marker)
      .with_context(|| format!("invalid routes.page_marker \"{}\"", self.page_marker))
  }
}

impl Default for RoutesSection {
  fn default() -> Self {
    Self { dir: default_routes_dir(), prefix: default_route_prefix(), page_marker: default_page_marker() }
  }
}

fn default_routes_dir() -> String {
  "src/routes".to_string()
}

fn default_route_prefix() -> String {
  DEFAULT_ROUTE_PREFIX.to_string()
}

fn default_page_marker() -> String {
  DEFAULT_PAGE_MARKER.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
  #[serde(default = "default_out_dir")]
  pub dir: String,
}

impl Default for OutputSection {
  fn default() -> Self {
    Self { dir: default_out_dir() }
  }
}

fn default_out_dir() -> String {
  "static".to_string()
}
