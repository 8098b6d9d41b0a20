/* src/server/engine/rust/src/errors.rs */

use thiserror::Error;

/// Fatal configuration problems. Any of these aborts the whole generation:
/// there is no mode that emits a sitemap minus the offending routes.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("sitemap: `origin` is required in the sitemap config")]
  MissingOrigin,

  #[error("sitemap: origin \"{0}\" must not end with a slash")]
  InvalidOrigin(String),

  #[error("sitemap: invalid exclude pattern \"{pattern}\": {source}")]
  InvalidExcludePattern { pattern: String, source: regex::Error },

  #[error(
    "sitemap: param values not provided for route \"{route}\"; exclude it via exclude_route_patterns \
     or add its values to param_values"
  )]
  UnresolvedParams { route: String },

  #[error(
    "sitemap: param values provided for route \"{route}\", which is not in the route tree \
     (or is excluded); remove it from param_values"
  )]
  UnknownParamRoute { route: String },

  #[error(
    "sitemap: route \"{route}\" contains a lang token; set `lang` with a default and at least one alternate"
  )]
  MissingLangConfig { route: String },

  #[error("sitemap: language \"{0}\" is listed more than once in `lang`")]
  DuplicateLang(String),

  #[error("sitemap: route \"{route}\" has {expected} param(s) but value row {row} supplies {found}")]
  ParamArity { route: String, row: usize, expected: usize, found: usize },

  #[error(
    "sitemap: route \"{route}\" has {tokens} param(s); a flat value list only binds single-param routes"
  )]
  ScalarsNeedSingleToken { route: String, tokens: usize },

  #[error("sitemap: max_per_page must be at least 1")]
  InvalidMaxPerPage,

  #[error("sitemap: priority {0} is outside 0.0..=1.0")]
  InvalidPriority(f32),
}
