/* src/server/engine/rust/src/normalize.rs */

//! Raw route identifiers -> canonical, sorted route patterns.
//!
//! Order is fixed: strip page-file decoration, test exclusions, then strip
//! `(group)` segments. Exclusions see the pre-group-strip form so that
//! `$`-anchored patterns behave the same as they read in the route tree.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::errors::ConfigError;

pub const DEFAULT_ROUTE_PREFIX: &str = "/src/routes";
pub const DEFAULT_PAGE_MARKER: &str = r"/\+page[^/]*\.(svelte|md)$";

fn group_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"/\([^/()]+\)").unwrap())
}

/// How the host router spells a page in its route tree.
#[derive(Debug, Clone)]
pub struct RouteLayout {
  /// Route-root prefix on raw identifiers, e.g. `/src/routes`
  pub prefix: String,
  /// Matches the trailing page-unit file, e.g. `/+page.svelte` or `/+page@(app).md`
  pub page_marker: Regex,
}

impl Default for RouteLayout {
  fn default() -> Self {
    Self {
      prefix: DEFAULT_ROUTE_PREFIX.to_string(),
      page_marker: Regex::new(DEFAULT_PAGE_MARKER).unwrap(),
    }
  }
}

impl RouteLayout {
  pub fn new(prefix: impl Into<String>, page_marker: &str) -> Result<Self, regex::Error> {
    let prefix = prefix.into().trim_end_matches('/').to_string();
    Ok(Self { prefix, page_marker: Regex::new(page_marker)? })
  }

  /// True when a file name (no directory) is a page unit.
  pub fn is_page_file(&self, file_name: &str) -> bool {
    self.page_marker.is_match(&format!("/{file_name}"))
  }

  /// Strip prefix and page-file decoration; normalize slashes.
  pub fn strip(&self, raw: &str) -> String {
    let raw = raw.replace('\\', "/");
    let mut path = match raw.strip_prefix(self.prefix.as_str()) {
      Some(rest) if !self.prefix.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
        rest.to_string()
      }
      _ => raw.clone(),
    };
    path = self.page_marker.replace(&path, "").into_owned();
    ensure_canonical(&path)
  }
}

/// Leading slash, no trailing slash except on root.
pub fn ensure_canonical(path: &str) -> String {
  let trimmed = path.trim_end_matches('/');
  if trimmed.is_empty() {
    return "/".to_string();
  }
  if trimmed.starts_with('/') { trimmed.to_string() } else { format!("/{trimmed}") }
}

/// Remove decorative `(group)` segments. They never appear in served URLs.
pub fn strip_groups(path: &str) -> String {
  let out = group_re().replace_all(path, "");
  if out.is_empty() { "/".to_string() } else { out.into_owned() }
}

pub fn compile_excludes(patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
  patterns
    .iter()
    .map(|pattern| {
      Regex::new(pattern)
        .map_err(|source| ConfigError::InvalidExcludePattern { pattern: pattern.clone(), source })
    })
    .collect()
}

/// Raw identifiers -> sorted, deduplicated canonical routes.
pub fn normalize_routes(raw: &[String], layout: &RouteLayout, excludes: &[Regex]) -> Vec<String> {
  let mut routes: Vec<String> = raw
    .iter()
    .map(|r| layout.strip(r))
    .filter(|route| match excludes.iter().find(|re| re.is_match(route)) {
      Some(re) => {
        debug!(route = %route, pattern = re.as_str(), "route excluded");
        false
      }
      None => true,
    })
    .map(|route| strip_groups(&route))
    .collect();
  routes.sort();
  routes.dedup();
  routes
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
  }

  #[test]
  fn strip_page_markers() {
    let layout = RouteLayout::default();
    assert_eq!(layout.strip("/src/routes/+page.svelte"), "/");
    assert_eq!(layout.strip("/src/routes/about/+page.svelte"), "/about");
    assert_eq!(layout.strip("/src/routes/blog/[slug]/+page@.svelte"), "/blog/[slug]");
    assert_eq!(layout.strip("/src/routes/docs/+page@(app).md"), "/docs");
    assert_eq!(layout.strip("/src/routes/x/+page@[id].svelte"), "/x");
  }

  #[test]
  fn strip_keeps_plain_paths() {
    let layout = RouteLayout::default();
    assert_eq!(layout.strip("/about/"), "/about");
    assert_eq!(layout.strip("about"), "/about");
    assert_eq!(layout.strip(""), "/");
  }

  #[test]
  fn prefix_must_end_at_segment() {
    let layout = RouteLayout::default();
    assert_eq!(layout.strip("/src/routesfoo/+page.svelte"), "/src/routesfoo");
  }

  #[test]
  fn page_file_detection() {
    let layout = RouteLayout::default();
    assert!(layout.is_page_file("+page.svelte"));
    assert!(layout.is_page_file("+page@.svelte"));
    assert!(layout.is_page_file("+page.md"));
    assert!(!layout.is_page_file("+layout.svelte"));
    assert!(!layout.is_page_file("+page.server.ts"));
  }

  #[test]
  fn groups_removed_after_exclusion() {
    let layout = RouteLayout::default();
    let excludes = compile_excludes(&raw(&[r"^/\(admin\)"])).unwrap();
    let routes = normalize_routes(
      &raw(&[
        "/src/routes/(admin)/dashboard/+page.svelte",
        "/src/routes/(public)/pricing/+page.svelte",
        "/src/routes/(public)/+page.svelte",
      ]),
      &layout,
      &excludes,
    );
    assert_eq!(routes, vec!["/", "/pricing"]);
  }

  #[test]
  fn dollar_anchor_sees_trailing_slash_free_form() {
    let layout = RouteLayout::default();
    let excludes = compile_excludes(&raw(&["/dashboard$"])).unwrap();
    let routes = normalize_routes(
      &raw(&["/src/routes/dashboard/+page.svelte", "/src/routes/dashboard/settings/+page.svelte"]),
      &layout,
      &excludes,
    );
    assert_eq!(routes, vec!["/dashboard/settings"]);
  }

  #[test]
  fn sorted_and_deduplicated() {
    let layout = RouteLayout::default();
    let routes = normalize_routes(
      &raw(&[
        "/src/routes/b/+page.svelte",
        "/src/routes/(x)/a/+page.svelte",
        "/src/routes/a/+page.md",
      ]),
      &layout,
      &[],
    );
    assert_eq!(routes, vec!["/a", "/b"]);
  }

  #[test]
  fn invalid_exclude_is_config_error() {
    let err = compile_excludes(&raw(&["("])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidExcludePattern { .. }));
  }

  #[test]
  fn no_route_matches_an_exclusion() {
    let layout = RouteLayout::default();
    let patterns = raw(&["^/private", "draft", r"\[id\]$"]);
    let excludes = compile_excludes(&patterns).unwrap();
    let input = raw(&[
      "/src/routes/private/+page.svelte",
      "/src/routes/private/x/+page.svelte",
      "/src/routes/blog/draft-post/+page.svelte",
      "/src/routes/user/[id]/+page.svelte",
      "/src/routes/user/[id]/posts/+page.svelte",
      "/src/routes/about/+page.svelte",
    ]);
    let routes = normalize_routes(&input, &layout, &excludes);
    assert_eq!(routes, vec!["/about", "/user/[id]/posts"]);
    for route in &routes {
      assert!(!excludes.iter().any(|re| re.is_match(route)));
    }
  }
}
