/* src/server/engine/rust/src/config.rs */

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::assemble::{ProcessPathsFn, SortMode};
use crate::errors::ConfigError;
use crate::lang::LangConfig;
use crate::normalize::RouteLayout;
use crate::params::ParamValues;
use crate::record::{Changefreq, Defaults, PathRecord, Priority};

pub const DEFAULT_MAX_PER_PAGE: usize = 50_000;

/// Everything one generation needs besides the route list.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
  /// Site origin without trailing slash, e.g. `https://example.com`
  pub origin: String,
  pub exclude_route_patterns: Vec<String>,
  pub param_values: BTreeMap<String, ParamValues>,
  pub additional_paths: Vec<String>,
  pub headers: BTreeMap<String, String>,
  pub lang: Option<LangConfig>,
  pub max_per_page: usize,
  /// Requested sitemap-index child page, verbatim from the request
  pub page: Option<String>,
  pub sort: SortMode,
  pub default_changefreq: Option<Changefreq>,
  pub default_priority: Option<Priority>,
  #[serde(skip)]
  pub process_paths: Option<ProcessPathsFn>,
  #[serde(skip)]
  pub layout: RouteLayout,
}

impl Default for SitemapConfig {
  fn default() -> Self {
    Self {
      origin: String::new(),
      exclude_route_patterns: Vec::new(),
      param_values: BTreeMap::new(),
      additional_paths: Vec::new(),
      headers: BTreeMap::new(),
      lang: None,
      max_per_page: DEFAULT_MAX_PER_PAGE,
      page: None,
      sort: SortMode::default(),
      default_changefreq: None,
      default_priority: None,
      process_paths: None,
      layout: RouteLayout::default(),
    }
  }
}

impl fmt::Debug for SitemapConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SitemapConfig")
      .field("origin", &self.origin)
      .field("exclude_route_patterns", &self.exclude_route_patterns)
      .field("param_values", &self.param_values.keys().collect::<Vec<_>>())
      .field("additional_paths", &self.additional_paths.len())
      .field("lang", &self.lang)
      .field("max_per_page", &self.max_per_page)
      .field("page", &self.page)
      .field("sort", &self.sort)
      .field("process_paths", &self.process_paths.is_some())
      .finish_non_exhaustive()
  }
}

impl SitemapConfig {
  pub fn new(origin: impl Into<String>) -> Self {
    Self { origin: origin.into(), ..Self::default() }
  }

  pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
    self.exclude_route_patterns.push(pattern.into());
    self
  }

  pub fn param_values(mut self, route: impl Into<String>, values: ParamValues) -> Self {
    self.param_values.insert(route.into(), values);
    self
  }

  pub fn additional_path(mut self, path: impl Into<String>) -> Self {
    self.additional_paths.push(path.into());
    self
  }

  /// Stored lowercase; overrides a default header of the same name.
  pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
    self.headers.insert(name.to_ascii_lowercase(), value.into());
    self
  }

  pub fn lang(mut self, lang: LangConfig) -> Self {
    self.lang = Some(lang);
    self
  }

  pub fn max_per_page(mut self, max: usize) -> Self {
    self.max_per_page = max;
    self
  }

  pub fn page(mut self, page: impl Into<String>) -> Self {
    self.page = Some(page.into());
    self
  }

  pub fn sort(mut self, sort: SortMode) -> Self {
    self.sort = sort;
    self
  }

  pub fn default_changefreq(mut self, changefreq: Changefreq) -> Self {
    self.default_changefreq = Some(changefreq);
    self
  }

  pub fn default_priority(mut self, priority: Priority) -> Self {
    self.default_priority = Some(priority);
    self
  }

  pub fn process_paths<F>(mut self, hook: F) -> Self
  where
    F: Fn(Vec<PathRecord>) -> Vec<PathRecord> + Send + Sync + 'static,
  {
    self.process_paths = Some(std::sync::Arc::new(hook));
    self
  }

  pub fn layout(mut self, layout: RouteLayout) -> Self {
    self.layout = layout;
    self
  }

  pub fn defaults(&self) -> Defaults {
    Defaults { changefreq: self.default_changefreq, priority: self.default_priority }
  }

  /// Checks that do not depend on the route set.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.origin.is_empty() {
      return Err(ConfigError::MissingOrigin);
    }
    if self.origin.ends_with('/') {
      return Err(ConfigError::InvalidOrigin(self.origin.clone()));
    }
    if self.max_per_page == 0 {
      return Err(ConfigError::InvalidMaxPerPage);
    }
    if let Some(lang) = &self.lang {
      lang.validate()?;
    }
    Ok(())
  }
}
