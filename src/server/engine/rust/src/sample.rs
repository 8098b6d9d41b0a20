/* src/server/engine/rust/src/sample.rs */

//! One sample URL per route pattern, taken from a generated sitemap.
//!
//! Meant for building test fixtures (for example, visiting one page of every
//! template), not for production traffic.

use std::collections::HashSet;

use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::normalize::{RouteLayout, normalize_routes};
use crate::optional::expand_all;
use crate::route::{TokenKind, lang_token, remove_lang, tokens};
use crate::source::RouteSource;

#[derive(Debug, Error)]
pub enum SampleError {
  #[error("sitemap: invalid sitemap xml: {0}")]
  Xml(String),

  #[error("sitemap: document is neither a <urlset> nor a <sitemapindex>")]
  UnknownDocument,

  #[error("sitemap: document is a sitemap index; sample it with a child loader")]
  IndexDocument,

  #[error("sitemap: failed to load child sitemap {loc}: {reason}")]
  ChildLoad { loc: String, reason: String },

  #[error("sitemap: cannot detect origin from \"{0}\"")]
  Origin(String),
}

/// Parsed sitemap: the `<loc>` values of a `urlset` or a `sitemapindex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
  Urlset(Vec<String>),
  Index(Vec<String>),
}

pub fn parse_document(xml: &str) -> Result<SitemapDocument, SampleError> {
  let mut reader = Reader::from_str(xml);
  reader.config_mut().trim_text(true);

  let mut root: Option<bool> = None; // Some(true) = index
  let mut in_loc = false;
  let mut locs = Vec::new();

  loop {
    match reader.read_event() {
      Ok(Event::Start(e)) => match e.local_name().as_ref() {
        b"urlset" if root.is_none() => root = Some(false),
        b"sitemapindex" if root.is_none() => root = Some(true),
        b"loc" => in_loc = true,
        _ => {}
      },
      Ok(Event::Text(text)) if in_loc => {
        let loc = text.unescape().map_err(|e| SampleError::Xml(e.to_string()))?;
        locs.push(loc.trim().to_string());
      }
      Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
      Ok(Event::Eof) => break,
      Ok(_) => {}
      Err(e) => return Err(SampleError::Xml(e.to_string())),
    }
  }

  match root {
    Some(false) => Ok(SitemapDocument::Urlset(locs)),
    Some(true) => Ok(SitemapDocument::Index(locs)),
    None => Err(SampleError::UnknownDocument),
  }
}

/// One full URL per route pattern. Index documents are rejected.
pub fn sample_urls<S: RouteSource + ?Sized>(
  xml: &str,
  source: &S,
  layout: &RouteLayout,
) -> Result<Vec<String>, SampleError> {
  sample_urls_with(xml, source, layout, |_| Err(SampleError::IndexDocument))
}

/// Like [`sample_urls`], returning paths without the origin.
pub fn sample_paths<S: RouteSource + ?Sized>(
  xml: &str,
  source: &S,
  layout: &RouteLayout,
) -> Result<Vec<String>, SampleError> {
  sample_paths_with(xml, source, layout, |_| Err(SampleError::IndexDocument))
}

/// Sample a `urlset`, or every child of a `sitemapindex` loaded through `load_child`.
pub fn sample_urls_with<S, F>(
  xml: &str,
  source: &S,
  layout: &RouteLayout,
  load_child: F,
) -> Result<Vec<String>, SampleError>
where
  S: RouteSource + ?Sized,
  F: FnMut(&str) -> Result<String, SampleError>,
{
  let locs = collect_locs(xml, load_child)?;
  let Some(first) = locs.first() else {
    return Ok(Vec::new());
  };
  let origin = detect_origin(first)?;
  let paths = sample_locs(&locs, &origin, source, layout);
  Ok(paths.into_iter().map(|path| format!("{origin}{path}")).collect())
}

pub fn sample_paths_with<S, F>(
  xml: &str,
  source: &S,
  layout: &RouteLayout,
  load_child: F,
) -> Result<Vec<String>, SampleError>
where
  S: RouteSource + ?Sized,
  F: FnMut(&str) -> Result<String, SampleError>,
{
  let locs = collect_locs(xml, load_child)?;
  let Some(first) = locs.first() else {
    return Ok(Vec::new());
  };
  let origin = detect_origin(first)?;
  Ok(sample_locs(&locs, &origin, source, layout))
}

fn collect_locs<F>(xml: &str, mut load_child: F) -> Result<Vec<String>, SampleError>
where
  F: FnMut(&str) -> Result<String, SampleError>,
{
  match parse_document(xml)? {
    SitemapDocument::Urlset(locs) => Ok(locs),
    SitemapDocument::Index(children) => {
      let mut locs = Vec::new();
      for child in &children {
        match parse_document(&load_child(child)?)? {
          SitemapDocument::Urlset(child_locs) => locs.extend(child_locs),
          // Nested indexes are not part of the protocol
          SitemapDocument::Index(_) => return Err(SampleError::IndexDocument),
        }
      }
      debug!(children = children.len(), urls = locs.len(), "sitemap index loaded");
      Ok(locs)
    }
  }
}

fn detect_origin(loc: &str) -> Result<String, SampleError> {
  let origin = Url::parse(loc).map_err(|_| SampleError::Origin(loc.to_string()))?.origin();
  if !origin.is_tuple() {
    return Err(SampleError::Origin(loc.to_string()));
  }
  Ok(origin.ascii_serialization())
}

/// Sampling patterns in route order. An optional language token is dropped
/// (default-language form); a required one samples like any other token.
fn sample_routes<S: RouteSource + ?Sized>(source: &S, layout: &RouteLayout) -> Vec<String> {
  let routes: Vec<String> = normalize_routes(&source.routes(), layout, &[])
    .iter()
    .map(|route| match lang_token(route).map(|t| t.kind) {
      Some(TokenKind::Lang { optional: true }) => remove_lang(route),
      _ => route.clone(),
    })
    .collect();
  expand_all(&routes)
}

/// Anchored regex for a tokenized route: `[x]` -> `[^/]+`, `[...x]` -> `.+`.
fn route_regex(route: &str) -> Option<Regex> {
  let mut pattern = String::from("^");
  let mut cursor = 0;
  for token in tokens(route) {
    pattern.push_str(&regex::escape(&route[cursor..token.span.start]));
    pattern.push_str(if token.is_rest() { ".+" } else { "[^/]+" });
    cursor = token.span.end;
  }
  pattern.push_str(&regex::escape(&route[cursor..]));
  pattern.push('$');
  Regex::new(&pattern).ok()
}

fn sample_locs<S: RouteSource + ?Sized>(
  locs: &[String],
  origin: &str,
  source: &S,
  layout: &RouteLayout,
) -> Vec<String> {
  let paths: Vec<String> = locs
    .iter()
    .map(|loc| match loc.strip_prefix(origin) {
      Some("") => "/".to_string(),
      Some(path) => path.to_string(),
      None => loc.clone(),
    })
    .collect();
  let routes = sample_routes(source, layout);
  let statics: HashSet<&str> =
    routes.iter().filter(|r| tokens(r).next().is_none()).map(String::as_str).collect();

  let mut seen_patterns = HashSet::new();
  let mut out = Vec::new();
  for route in &routes {
    if statics.contains(route.as_str()) {
      if paths.contains(route) {
        out.push(route.clone());
      }
      continue;
    }
    let Some(re) = route_regex(route) else { continue };
    if !seen_patterns.insert(re.as_str().to_string()) {
      continue;
    }
    // Paths owned by a static route never stand in for a dynamic one
    if let Some(path) = paths.iter().find(|p| !statics.contains(p.as_str()) && re.is_match(p)) {
      out.push(path.clone());
    }
  }
  debug!(routes = routes.len(), samples = out.len(), "sitemap sampled");
  out
}
