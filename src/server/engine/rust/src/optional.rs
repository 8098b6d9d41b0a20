/* src/server/engine/rust/src/optional.rs */

//! Optional-token expansion.
//!
//! The router consumes an optional chain left to right: `/foo/[[a]]/[[b]]`
//! serves `/foo`, `/foo/x` and `/foo/x/y`, never `/foo/y` alone. Each
//! optional token therefore closes one variant. The language token is a
//! fixed part of every variant; the language expander owns it.

use std::collections::HashSet;

use crate::route::{is_optional_segment, segments};

/// Every router-valid variant of `route`, shortest first.
pub fn expand_optional(route: &str) -> Vec<String> {
  let segs: Vec<&str> = segments(route).collect();
  let Some(first) = segs.iter().position(|s| is_optional_segment(s)) else {
    return vec![route.to_string()];
  };

  let base: String = segs[..first].iter().map(|s| format!("/{s}")).collect();
  let mut variants = vec![base];
  let mut open: Option<String> = None;

  for seg in &segs[first..] {
    let mut current = match open.take() {
      Some(cur) => cur,
      None => variants.last().cloned().unwrap_or_default(),
    };
    current.push('/');
    current.push_str(seg);
    if is_optional_segment(seg) {
      variants.push(current);
    } else {
      open = Some(current);
    }
  }
  // Fixed segments after the last optional token stay on a final variant
  if let Some(current) = open {
    variants.push(current);
  }

  if variants[0].is_empty() {
    variants[0] = "/".to_string();
  }
  variants
}

/// Expand every route and pool the results, first occurrence wins.
pub fn expand_all(routes: &[String]) -> Vec<String> {
  let mut seen = HashSet::new();
  routes
    .iter()
    .flat_map(|route| expand_optional(route))
    .filter(|variant| seen.insert(variant.clone()))
    .collect()
}
