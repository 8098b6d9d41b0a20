/* src/server/engine/rust/src/lang.rs */

//! Language expansion with reciprocal alternates.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::errors::ConfigError;
use crate::record::{Alternate, PathRecord};
use crate::route::{TokenKind, has_lang, lang_token, remove_lang, replace_lang};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LangConfig {
  pub default: String,
  #[serde(default)]
  pub alternates: Vec<String>,
}

impl LangConfig {
  pub fn new<I, S>(default: impl Into<String>, alternates: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { default: default.into(), alternates: alternates.into_iter().map(Into::into).collect() }
  }

  pub fn is_usable(&self) -> bool {
    !self.default.is_empty() && !self.alternates.is_empty()
  }

  /// Every code at most once, the default included.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    match self.codes().find(|code| !seen.insert(*code)) {
      Some(code) => Err(ConfigError::DuplicateLang(code.to_string())),
      None => Ok(()),
    }
  }

  /// Default first, then alternates in configured order.
  pub fn codes(&self) -> impl Iterator<Item = &str> {
    std::iter::once(self.default.as_str()).chain(self.alternates.iter().map(String::as_str))
  }
}

/// Routes carrying the language token need a usable `LangConfig`.
pub fn check_lang(routes: &[String], lang: Option<&LangConfig>) -> Result<(), ConfigError> {
  if let Some(lang) = lang {
    lang.validate()?;
  }
  if lang.is_some_and(LangConfig::is_usable) {
    return Ok(());
  }
  match routes.iter().find(|route| has_lang(route)) {
    Some(route) => Err(ConfigError::MissingLangConfig { route: route.clone() }),
    None => Ok(()),
  }
}

/// Path of `route` in the language `code`.
fn localize(route: &str, code: &str, lang: &LangConfig) -> String {
  let optional = matches!(lang_token(route).map(|t| t.kind), Some(TokenKind::Lang { optional: true }));
  if optional && code == lang.default { remove_lang(route) } else { replace_lang(route, code) }
}

/// One record per configured language for each input record. All records of
/// one page share an identical `alternates` list.
pub fn expand_languages(records: &[PathRecord], lang: &LangConfig) -> Vec<PathRecord> {
  let mut out = Vec::with_capacity(records.len() * (lang.alternates.len() + 1));
  for record in records {
    let alternates: Vec<Alternate> = lang
      .codes()
      .map(|code| Alternate { lang: code.to_string(), path: localize(&record.path, code, lang) })
      .collect();
    for alternate in &alternates {
      out.push(PathRecord {
        path: alternate.path.clone(),
        alternates: Some(alternates.clone()),
        ..record.clone()
      });
    }
  }
  debug!(input = records.len(), output = out.len(), "languages expanded");
  out
}
