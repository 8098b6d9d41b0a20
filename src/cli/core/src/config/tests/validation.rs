/* src/cli/core/src/config/tests/validation.rs */

use super::*;

fn parse(body: &str) -> SitemapToml {
  toml::from_str(body).unwrap()
}

#[test]
fn origin_required() {
  let err = parse("[sitemap]\n").validate().unwrap_err();
  assert!(err.to_string().contains("origin"));
}

#[test]
fn origin_trailing_slash_rejected() {
  let err = parse("[sitemap]\norigin = \"https://example.com/\"\n").validate().unwrap_err();
  assert!(err.to_string().contains("must not end with a slash"));
}

#[test]
fn lang_needs_alternates() {
  let config = parse(
    r#"
[sitemap]
origin = "https://example.com"

[sitemap.lang]
default = "en"
"#,
  );
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("alternates"));
}

#[test]
fn lang_default_not_repeated() {
  let config = parse(
    r#"
[sitemap]
origin = "https://example.com"

[sitemap.lang]
default = "en"
alternates = ["en", "de"]
"#,
  );
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("\"en\" is listed more than once"), "{err}");
}

#[test]
fn page_not_allowed_in_file() {
  let config = parse("[sitemap]\norigin = \"https://example.com\"\npage = \"1\"\n");
  assert!(config.validate().unwrap_err().to_string().contains("sitemap.page"));
}

#[test]
fn invalid_page_marker() {
  let config = parse("[sitemap]\norigin = \"https://example.com\"\n\n[routes]\npage_marker = \"(\"\n");
  assert!(config.validate().unwrap_err().to_string().contains("page_marker"));
}
