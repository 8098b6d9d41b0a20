/* src/server/engine/rust/src/response/mod.rs */

use std::collections::BTreeMap;

use tracing::debug;

use crate::assemble::{Sources, assemble};
use crate::bind::bind_params;
use crate::config::SitemapConfig;
use crate::errors::ConfigError;
use crate::lang::{check_lang, expand_languages};
use crate::normalize::{compile_excludes, normalize_routes};
use crate::optional::expand_all;
use crate::paginate::{PageError, page_slice, parse_page, total_pages};
use crate::record::PathRecord;
use crate::source::RouteSource;
use crate::xml::{render_index, render_urlset};

#[cfg(test)]
mod tests;

pub const DEFAULT_CACHE_CONTROL: &str = "max-age=0, s-maxage=3600";
pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Transport-agnostic HTTP response. Header names are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapResponse {
  pub status: u16,
  pub headers: BTreeMap<String, String>,
  pub body: String,
}

impl SitemapResponse {
  fn xml(body: String, overrides: &BTreeMap<String, String>) -> Self {
    let mut headers = BTreeMap::from([
      ("cache-control".to_string(), DEFAULT_CACHE_CONTROL.to_string()),
      ("content-type".to_string(), XML_CONTENT_TYPE.to_string()),
    ]);
    for (name, value) in overrides {
      headers.insert(name.to_ascii_lowercase(), value.clone());
    }
    Self { status: 200, headers, body }
  }

  fn rejected(err: &PageError) -> Self {
    let headers = BTreeMap::from([("content-type".to_string(), TEXT_CONTENT_TYPE.to_string())]);
    Self { status: err.status(), headers, body: err.to_string() }
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }
}

/// Full, assembled path list: normalize, expand, bind, localize, assemble.
pub fn generate_paths<S: RouteSource + ?Sized>(
  config: &SitemapConfig,
  source: &S,
) -> Result<Vec<PathRecord>, ConfigError> {
  let excludes = compile_excludes(&config.exclude_route_patterns)?;
  let routes = normalize_routes(&source.routes(), &config.layout, &excludes);
  check_lang(&routes, config.lang.as_ref())?;

  let routes = expand_all(&routes);
  debug!(routes = routes.len(), "routes expanded");

  let defaults = config.defaults();
  let bound = bind_params(&routes, &config.param_values, &defaults)?;
  let with_lang = match &config.lang {
    Some(lang) => expand_languages(&bound.with_lang, lang),
    None => bound.with_lang,
  };

  Ok(assemble(
    Sources {
      without_lang: bound.without_lang,
      with_lang,
      additional: &config.additional_paths,
    },
    &defaults,
    config.process_paths.as_ref(),
    config.sort,
  ))
}

/// Sitemap, sitemap index, or the requested index page.
///
/// Configuration problems are returned as `Err` and never become a response;
/// a bad `page` is a 400/404 response.
pub fn generate_sitemap_response<S: RouteSource + ?Sized>(
  config: &SitemapConfig,
  source: &S,
) -> Result<SitemapResponse, ConfigError> {
  config.validate()?;
  let records = generate_paths(config, source)?;
  let max = config.max_per_page;

  let response = match config.page.as_deref() {
    None if records.len() <= max => {
      SitemapResponse::xml(render_urlset(&config.origin, &records), &config.headers)
    }
    None => {
      let total = total_pages(records.len(), max);
      debug!(paths = records.len(), total, "emitting sitemap index");
      SitemapResponse::xml(render_index(&config.origin, total), &config.headers)
    }
    Some(raw) => match parse_page(raw).and_then(|page| page_slice(&records, page, max)) {
      Ok(slice) => SitemapResponse::xml(render_urlset(&config.origin, slice), &config.headers),
      Err(err) => {
        debug!(page = raw, status = err.status(), "page request rejected");
        SitemapResponse::rejected(&err)
      }
    },
  };
  Ok(response)
}
