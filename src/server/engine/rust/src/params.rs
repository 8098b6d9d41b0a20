/* src/server/engine/rust/src/params.rs */

use serde::Deserialize;

use crate::record::{Changefreq, Priority};

/// Caller-supplied values for one route pattern.
///
/// Deserializes untagged: `["a", "b"]`, `[["2024", "a"], ...]` or
/// `[{ values = ["a"], lastmod = "2024-01-01" }, ...]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValues {
  /// One value per path; the route must carry exactly one bindable token
  Scalars(Vec<String>),
  /// Positional, left to right across every bindable token
  Tuples(Vec<Vec<String>>),
  /// Positional values plus per-path metadata overrides
  Records(Vec<ParamRecord>),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParamRecord {
  pub values: Vec<String>,
  #[serde(default)]
  pub lastmod: Option<String>,
  #[serde(default)]
  pub changefreq: Option<Changefreq>,
  #[serde(default)]
  pub priority: Option<Priority>,
}

impl ParamRecord {
  pub fn new<I, S>(values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { values: values.into_iter().map(Into::into).collect(), ..Self::default() }
  }

  pub fn lastmod(mut self, lastmod: impl Into<String>) -> Self {
    self.lastmod = Some(lastmod.into());
    self
  }

  pub fn changefreq(mut self, changefreq: Changefreq) -> Self {
    self.changefreq = Some(changefreq);
    self
  }

  pub fn priority(mut self, priority: Priority) -> Self {
    self.priority = Some(priority);
    self
  }
}

/// One binding row, borrowed from a `ParamValues`.
#[derive(Debug, Clone, Copy)]
pub struct ParamRow<'a> {
  pub values: &'a [String],
  pub lastmod: Option<&'a str>,
  pub changefreq: Option<Changefreq>,
  pub priority: Option<Priority>,
}

impl<'a> ParamRow<'a> {
  fn plain(values: &'a [String]) -> Self {
    Self { values, lastmod: None, changefreq: None, priority: None }
  }
}

impl ParamValues {
  pub fn scalars<I, S>(values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Scalars(values.into_iter().map(Into::into).collect())
  }

  pub fn tuples<I, T, S>(rows: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Tuples(rows.into_iter().map(|row| row.into_iter().map(Into::into).collect()).collect())
  }

  pub fn records(records: Vec<ParamRecord>) -> Self {
    Self::Records(records)
  }

  /// Number of paths this source produces.
  pub fn len(&self) -> usize {
    match self {
      Self::Scalars(v) => v.len(),
      Self::Tuples(v) => v.len(),
      Self::Records(v) => v.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn is_scalars(&self) -> bool {
    matches!(self, Self::Scalars(_))
  }

  pub fn rows(&self) -> Vec<ParamRow<'_>> {
    match self {
      Self::Scalars(v) => v.iter().map(|s| ParamRow::plain(std::slice::from_ref(s))).collect(),
      Self::Tuples(v) => v.iter().map(|t| ParamRow::plain(t)).collect(),
      Self::Records(v) => v
        .iter()
        .map(|r| ParamRow {
          values: &r.values,
          lastmod: r.lastmod.as_deref(),
          changefreq: r.changefreq,
          priority: r.priority,
        })
        .collect(),
    }
  }
}
