/* src/server/engine/rust/src/record.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// One concrete sitemap entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathRecord {
  /// Absolute path, always starting with `/`
  pub path: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lastmod: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub changefreq: Option<Changefreq>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<Priority>,
  /// Every language variant of this page, including the page itself
  #[serde(skip_serializing_if = "Option::is_none")]
  pub alternates: Option<Vec<Alternate>>,
}

impl PathRecord {
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into(), ..Self::default() }
  }

  pub fn with_defaults(path: impl Into<String>, defaults: &Defaults) -> Self {
    Self {
      path: path.into(),
      changefreq: defaults.changefreq,
      priority: defaults.priority,
      ..Self::default()
    }
  }

  /// Fill metadata the record leaves unset from `defaults`.
  pub fn apply_defaults(&mut self, defaults: &Defaults) {
    self.changefreq = self.changefreq.or(defaults.changefreq);
    self.priority = self.priority.or(defaults.priority);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
  pub lang: String,
  pub path: String,
}

/// Metadata applied to every path unless a param record overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Defaults {
  pub changefreq: Option<Changefreq>,
  pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Changefreq {
  Always,
  Hourly,
  Daily,
  Weekly,
  Monthly,
  Yearly,
  Never,
}

impl Changefreq {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Always => "always",
      Self::Hourly => "hourly",
      Self::Daily => "daily",
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
      Self::Yearly => "yearly",
      Self::Never => "never",
    }
  }
}

impl fmt::Display for Changefreq {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Sitemap priority, `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Priority(f32);

impl Priority {
  pub fn new(value: f32) -> Result<Self, ConfigError> {
    if (0.0..=1.0).contains(&value) {
      Ok(Self(value))
    } else {
      Err(ConfigError::InvalidPriority(value))
    }
  }

  pub fn value(self) -> f32 {
    self.0
  }
}

impl TryFrom<f32> for Priority {
  type Error = ConfigError;

  fn try_from(value: f32) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<Priority> for f32 {
  fn from(p: Priority) -> Self {
    p.0
  }
}

impl fmt::Display for Priority {
  /// Whole values keep one decimal (`1.0`, `0.0`); others print as-is (`0.75`).
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0.fract() == 0.0 { write!(f, "{:.1}", self.0) } else { write!(f, "{}", self.0) }
  }
}
