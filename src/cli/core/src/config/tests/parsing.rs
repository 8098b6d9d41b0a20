/* src/cli/core/src/config/tests/parsing.rs */

use seam_sitemap::{Changefreq, ParamValues, SortMode};

use super::*;

#[test]
fn parse_minimal_config() {
  let config: SitemapToml = toml::from_str(
    r#"
[sitemap]
origin = "https://example.com"
"#,
  )
  .unwrap();
  assert_eq!(config.sitemap.origin, "https://example.com");
  assert_eq!(config.sitemap.max_per_page, 50_000);
  assert_eq!(config.routes.dir, "src/routes");
  assert_eq!(config.routes.prefix, "/src/routes");
  assert_eq!(config.output.dir, "static");
  config.validate().unwrap();
}

#[test]
fn parse_full_config() {
  let config: SitemapToml = toml::from_str(
    r#"
[sitemap]
origin = "https://example.com"
exclude_route_patterns = ["^/dashboard", "\\[page\\]$"]
additional_paths = ["/legal/terms.pdf"]
max_per_page = 1000
sort = "alpha"
default_changefreq = "weekly"
default_priority = 0.5

[sitemap.headers]
Cache-Control = "max-age=60"

[sitemap.lang]
default = "en"
alternates = ["de", "zh"]

[sitemap.param_values]
"/[[lang]]/blog/[slug]" = ["hello", "world"]
"/archive/[year]/[month]" = [["2024", "01"], ["2024", "02"]]

[[sitemap.param_values."/docs/[id]"]]
values = ["intro"]
lastmod = "2025-01-01"
changefreq = "monthly"

[routes]
dir = "app/routes"
prefix = "/app/routes"

[output]
dir = "public"
"#,
  )
  .unwrap();
  config.validate().unwrap();

  let sitemap = &config.sitemap;
  assert_eq!(sitemap.exclude_route_patterns.len(), 2);
  assert_eq!(sitemap.max_per_page, 1000);
  assert_eq!(sitemap.sort, SortMode::Alpha);
  assert_eq!(sitemap.default_changefreq, Some(Changefreq::Weekly));
  assert_eq!(sitemap.headers.get("Cache-Control").map(String::as_str), Some("max-age=60"));
  assert_eq!(sitemap.lang.as_ref().unwrap().alternates, vec!["de", "zh"]);
  assert!(matches!(sitemap.param_values["/[[lang]]/blog/[slug]"], ParamValues::Scalars(_)));
  assert!(matches!(sitemap.param_values["/archive/[year]/[month]"], ParamValues::Tuples(_)));
  assert!(matches!(sitemap.param_values["/docs/[id]"], ParamValues::Records(_)));
  assert_eq!(config.routes.dir, "app/routes");
  assert_eq!(config.output.dir, "public");
  assert_eq!(config.sitemap_config().unwrap().layout.prefix, "/app/routes");
}

#[test]
fn missing_sitemap_section_fails() {
  let res: Result<SitemapToml, _> = toml::from_str("[routes]\ndir = \"x\"\n");
  assert!(res.is_err());
}

#[test]
fn out_of_range_priority_fails_to_parse() {
  let res: Result<SitemapToml, _> =
    toml::from_str("[sitemap]\norigin = \"https://a.b\"\ndefault_priority = 1.5\n");
  assert!(res.is_err());
}
