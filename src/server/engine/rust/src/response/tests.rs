/* src/server/engine/rust/src/response/tests.rs */

use super::*;
use crate::assemble::SortMode;
use crate::lang::LangConfig;
use crate::params::{ParamRecord, ParamValues};
use crate::record::{Changefreq, Priority};

const ORIGIN: &str = "https://example.com";

fn blog_routes() -> Vec<String> {
  ["/src/routes/+page.svelte", "/src/routes/about/+page.svelte", "/src/routes/blog/[slug]/+page.svelte"]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn blog_config() -> SitemapConfig {
  SitemapConfig::new(ORIGIN).param_values("/blog/[slug]", ParamValues::scalars(["a", "b"]))
}

fn locs(body: &str) -> Vec<String> {
  body
    .lines()
    .filter_map(|line| {
      let line = line.trim();
      line.strip_prefix("<loc>").and_then(|rest| rest.strip_suffix("</loc>")).map(str::to_string)
    })
    .collect()
}

// -- Response shape --

#[test]
fn flat_sitemap_with_default_headers() {
  let res = generate_sitemap_response(&blog_config(), &blog_routes()).unwrap();
  assert_eq!(res.status, 200);
  assert_eq!(res.header("Cache-Control"), Some("max-age=0, s-maxage=3600"));
  assert_eq!(res.header("content-type"), Some("application/xml"));
  assert_eq!(
    locs(&res.body),
    vec![
      "https://example.com/",
      "https://example.com/about",
      "https://example.com/blog/a",
      "https://example.com/blog/b",
    ]
  );
}

#[test]
fn caller_headers_override_case_insensitively() {
  let mut config = blog_config().header("CACHE-CONTROL", "no-cache");
  config.headers.insert("X-Robots-Tag".into(), "noindex".into());
  let res = generate_sitemap_response(&config, &blog_routes()).unwrap();
  assert_eq!(res.headers.get("cache-control").map(String::as_str), Some("no-cache"));
  assert_eq!(res.headers.get("x-robots-tag").map(String::as_str), Some("noindex"));
  assert_eq!(res.headers.len(), 3);
}

#[test]
fn index_when_over_limit() {
  let res = generate_sitemap_response(&blog_config().max_per_page(2), &blog_routes()).unwrap();
  assert_eq!(res.status, 200);
  assert!(res.body.contains("<sitemapindex"));
  assert_eq!(
    locs(&res.body),
    vec!["https://example.com/sitemap1.xml", "https://example.com/sitemap2.xml"]
  );
}

#[test]
fn exactly_at_limit_is_flat() {
  let res = generate_sitemap_response(&blog_config().max_per_page(4), &blog_routes()).unwrap();
  assert!(res.body.contains("<urlset"));
}

// -- Pagination --

#[test]
fn pages_of_worked_example() {
  let config = blog_config().max_per_page(2);
  let page1 = generate_sitemap_response(&config.clone().page("1"), &blog_routes()).unwrap();
  let page2 = generate_sitemap_response(&config.page("2"), &blog_routes()).unwrap();
  assert_eq!(locs(&page1.body), vec!["https://example.com/", "https://example.com/about"]);
  assert_eq!(locs(&page2.body), vec!["https://example.com/blog/a", "https://example.com/blog/b"]);
}

#[test]
fn malformed_pages_are_400() {
  for raw in ["0", "-1", "1.5", "x"] {
    let res =
      generate_sitemap_response(&blog_config().max_per_page(2).page(raw), &blog_routes()).unwrap();
    assert_eq!(res.status, 400, "page {raw}");
    assert_eq!(res.body, "Invalid page param");
    assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
  }
}

#[test]
fn page_past_end_is_404() {
  let res =
    generate_sitemap_response(&blog_config().max_per_page(2).page("99"), &blog_routes()).unwrap();
  assert_eq!(res.status, 404);
  assert_eq!(res.body, "Page does not exist");
}

#[test]
fn page_concatenation_reproduces_full_set() {
  let slugs: Vec<String> = (0..13).map(|i| format!("post-{i:02}")).collect();
  let base = SitemapConfig::new(ORIGIN)
    .param_values("/blog/[slug]", ParamValues::Scalars(slugs))
    .sort(SortMode::Alpha);
  let full = generate_paths(&base, &blog_routes()).unwrap();
  for max in 1..=16 {
    let config = base.clone().max_per_page(max);
    let total = total_pages(full.len(), max);
    let mut joined = Vec::new();
    for page in 1..=total {
      let res = generate_sitemap_response(&config.clone().page(page.to_string()), &blog_routes())
        .unwrap();
      assert_eq!(res.status, 200);
      joined.extend(locs(&res.body));
    }
    let expected: Vec<String> = full.iter().map(|r| format!("{ORIGIN}{}", r.path)).collect();
    assert_eq!(joined, expected, "max_per_page {max}");
  }
}

// -- Configuration errors --

#[test]
fn missing_origin_is_fatal() {
  let err = generate_sitemap_response(&SitemapConfig::default(), &blog_routes()).unwrap_err();
  assert!(matches!(err, ConfigError::MissingOrigin));
}

#[test]
fn unresolved_route_is_fatal_even_with_page() {
  let config = SitemapConfig::new(ORIGIN).page("x");
  let err = generate_sitemap_response(&config, &blog_routes()).unwrap_err();
  assert!(matches!(err, ConfigError::UnresolvedParams { .. }));
}

#[test]
fn excluded_route_key_is_stale() {
  let config = blog_config().exclude("/blog");
  let err = generate_sitemap_response(&config, &blog_routes()).unwrap_err();
  assert!(matches!(err, ConfigError::UnknownParamRoute { route } if route == "/blog/[slug]"));
}

#[test]
fn exclusion_covers_unkeyed_route() {
  let config = SitemapConfig::new(ORIGIN).exclude(r"\[slug\]");
  let paths = generate_paths(&config, &blog_routes()).unwrap();
  let paths: Vec<_> = paths.iter().map(|r| r.path.as_str()).collect();
  assert_eq!(paths, vec!["/", "/about"]);
}

#[test]
fn lang_route_without_config_is_fatal() {
  let routes = ["/src/routes/[[lang]]/about/+page.svelte"];
  let err = generate_sitemap_response(&SitemapConfig::new(ORIGIN), &routes).unwrap_err();
  assert!(matches!(err, ConfigError::MissingLangConfig { .. }));
}

// -- Full pipeline --

#[test]
fn optional_chain_through_pipeline() {
  let routes = ["/src/routes/foo/[[a]]/[[b]]/+page.svelte"];
  let config = SitemapConfig::new(ORIGIN)
    .param_values("/foo/[[a]]", ParamValues::scalars(["x"]))
    .param_values("/foo/[[a]]/[[b]]", ParamValues::tuples([["x", "y"]]));
  let paths = generate_paths(&config, &routes).unwrap();
  let paths: Vec<_> = paths.iter().map(|r| r.path.as_str()).collect();
  assert_eq!(paths, vec!["/foo", "/foo/x", "/foo/x/y"]);
}

#[test]
fn language_pipeline_is_reciprocal() {
  let routes = [
    "/src/routes/[[lang]]/+page.svelte",
    "/src/routes/[[lang]]/blog/[slug]/+page.svelte",
    "/src/routes/health/+page.svelte",
  ];
  let config = SitemapConfig::new(ORIGIN)
    .lang(LangConfig::new("en", ["de"]))
    .param_values("/[[lang]]/blog/[slug]", ParamValues::scalars(["hi"]))
    .additional_path("feed.xml");
  let records = generate_paths(&config, &routes).unwrap();
  let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
  assert_eq!(paths, vec!["/health", "/", "/de", "/blog/hi", "/de/blog/hi", "/feed.xml"]);

  let en = records.iter().find(|r| r.path == "/blog/hi").unwrap();
  let de = records.iter().find(|r| r.path == "/de/blog/hi").unwrap();
  assert_eq!(en.alternates, de.alternates);
  assert!(records.iter().find(|r| r.path == "/feed.xml").unwrap().alternates.is_none());

  let res = generate_sitemap_response(&config, &routes).unwrap();
  assert!(res.body.contains(
    r#"<xhtml:link rel="alternate" hreflang="de" href="https://example.com/de/blog/hi" />"#
  ));
}

#[test]
fn metadata_defaults_and_overrides_reach_xml() {
  let config = SitemapConfig::new(ORIGIN)
    .default_changefreq(Changefreq::Daily)
    .default_priority(Priority::new(0.7).unwrap())
    .param_values(
      "/blog/[slug]",
      ParamValues::records(vec![
        ParamRecord::new(["a"]).lastmod("2024-03-01").priority(Priority::new(1.0).unwrap()),
      ]),
    );
  let res = generate_sitemap_response(&config, &blog_routes()).unwrap();
  assert!(res.body.contains("<lastmod>2024-03-01</lastmod>"));
  assert!(res.body.contains("<priority>1.0</priority>"));
  assert!(res.body.contains("<priority>0.7</priority>"));
  assert_eq!(res.body.matches("<changefreq>daily</changefreq>").count(), 3);
}

#[test]
fn process_paths_hook_sees_full_list_and_last_write_wins() {
  let config = blog_config().process_paths(|mut records| {
    let mut about = PathRecord::new("/about");
    about.changefreq = Some(Changefreq::Never);
    records.push(about);
    records
  });
  let records = generate_paths(&config, &blog_routes()).unwrap();
  let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
  assert_eq!(paths, vec!["/", "/about", "/blog/a", "/blog/b"]);
  assert_eq!(records[1].changefreq, Some(Changefreq::Never));
}

#[test]
fn hook_paths_stay_absolute_and_get_defaults() {
  let config = blog_config().default_changefreq(Changefreq::Weekly).process_paths(|mut records| {
    records.push(PathRecord::new("contact"));
    records
  });
  let res = generate_sitemap_response(&config, &blog_routes()).unwrap();
  let locs = locs(&res.body);
  assert!(locs.contains(&"https://example.com/contact".to_string()), "{locs:?}");
  assert!(locs.iter().all(|loc| loc.starts_with("https://example.com/")));
  assert_eq!(res.body.matches("<changefreq>weekly</changefreq>").count(), 5);
}

#[test]
fn duplicate_language_codes_are_fatal() {
  let routes = ["/src/routes/[[lang]]/about/+page.svelte"];
  for lang in [LangConfig::new("en", ["en", "de"]), LangConfig::new("en", ["de", "de"])] {
    let config = SitemapConfig::new(ORIGIN).lang(lang);
    let err = generate_paths(&config, &routes).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateLang(_)), "{err}");
    assert!(matches!(config.validate(), Err(ConfigError::DuplicateLang(_))));
  }
}

#[test]
fn group_segments_never_reach_output() {
  let routes = ["/src/routes/(marketing)/pricing/+page.svelte", "/src/routes/(app)/+page.svelte"];
  let records = generate_paths(&SitemapConfig::new(ORIGIN), &routes).unwrap();
  let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
  assert_eq!(paths, vec!["/", "/pricing"]);
}

#[test]
fn identical_inputs_identical_output() {
  let a = generate_sitemap_response(&blog_config(), &blog_routes()).unwrap();
  let b = generate_sitemap_response(&blog_config(), &blog_routes()).unwrap();
  assert_eq!(a, b);
}
