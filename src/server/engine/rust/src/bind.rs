/* src/server/engine/rust/src/bind.rs */

//! Positional parameter binding.
//!
//! Every key in the param map must name a live route, and every route that
//! still carries a bindable token must have a key. Both checks run before a
//! single path is produced.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::errors::ConfigError;
use crate::params::{ParamRow, ParamValues};
use crate::record::{Defaults, PathRecord};
use crate::route::{bindable_tokens, has_lang, is_static};

/// Binder output, split on whether the language token is still present.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Bound {
  pub with_lang: Vec<PathRecord>,
  pub without_lang: Vec<PathRecord>,
}

impl Bound {
  fn push(&mut self, record: PathRecord) {
    if has_lang(&record.path) {
      self.with_lang.push(record);
    } else {
      self.without_lang.push(record);
    }
  }
}

/// Bind `params` into `routes`. Static routes come first, then keyed routes,
/// each group in route order.
pub fn bind_params(
  routes: &[String],
  params: &BTreeMap<String, ParamValues>,
  defaults: &Defaults,
) -> Result<Bound, ConfigError> {
  let live: HashSet<&str> = routes.iter().map(String::as_str).collect();
  if let Some(stale) = params.keys().find(|key| !live.contains(key.as_str())) {
    return Err(ConfigError::UnknownParamRoute { route: stale.clone() });
  }

  let (keyed, unkeyed): (Vec<&String>, Vec<&String>) =
    routes.iter().partition(|route| params.contains_key(route.as_str()));

  if let Some(route) = unkeyed.iter().find(|route| !is_static(route)) {
    return Err(ConfigError::UnresolvedParams { route: (**route).clone() });
  }

  let mut bound = Bound::default();
  for route in &unkeyed {
    bound.push(PathRecord::with_defaults(route.as_str(), defaults));
  }

  for route in keyed {
    let values = &params[route.as_str()];
    if values.is_empty() {
      warn!(route = %route, "empty param list, route contributes no paths");
    }
    for record in bind_route(route, values, defaults)? {
      bound.push(record);
    }
  }

  debug!(
    with_lang = bound.with_lang.len(),
    without_lang = bound.without_lang.len(),
    "params bound"
  );
  Ok(bound)
}

/// One record per row of `values`.
pub fn bind_route(
  route: &str,
  values: &ParamValues,
  defaults: &Defaults,
) -> Result<Vec<PathRecord>, ConfigError> {
  let expected = bindable_tokens(route).len();
  if values.is_scalars() && !values.is_empty() && expected != 1 {
    return Err(ConfigError::ScalarsNeedSingleToken { route: route.to_string(), tokens: expected });
  }

  values
    .rows()
    .into_iter()
    .enumerate()
    .map(|(index, row)| {
      if row.values.len() != expected {
        return Err(ConfigError::ParamArity {
          route: route.to_string(),
          row: index,
          expected,
          found: row.values.len(),
        });
      }
      Ok(record_for(substitute(route, row.values), &row, defaults))
    })
    .collect()
}

/// Replace bindable tokens left to right with `values`.
fn substitute(route: &str, values: &[String]) -> String {
  let mut out = String::with_capacity(route.len());
  let mut cursor = 0;
  for (token, value) in bindable_tokens(route).iter().zip(values) {
    out.push_str(&route[cursor..token.span.start]);
    out.push_str(value);
    cursor = token.span.end;
  }
  out.push_str(&route[cursor..]);
  out
}

fn record_for(path: String, row: &ParamRow<'_>, defaults: &Defaults) -> PathRecord {
  PathRecord {
    path,
    lastmod: row.lastmod.map(str::to_string),
    changefreq: row.changefreq.or(defaults.changefreq),
    priority: row.priority.or(defaults.priority),
    alternates: None,
  }
}
