/* src/server/engine/rust/src/assemble.rs */

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::record::{Defaults, PathRecord};

/// Caller transform over the full record list, run once before dedup.
pub type ProcessPathsFn = Arc<dyn Fn(Vec<PathRecord>) -> Vec<PathRecord> + Send + Sync>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
  /// Non-language paths, language paths, then additional paths
  #[default]
  Insertion,
  /// Ascending by code-point order of `path`
  Alpha,
}

/// Assembler inputs, in concatenation order.
#[derive(Debug)]
pub struct Sources<'a> {
  pub without_lang: Vec<PathRecord>,
  pub with_lang: Vec<PathRecord>,
  pub additional: &'a [String],
}

fn with_leading_slash(path: &str) -> String {
  if path.starts_with('/') { path.to_string() } else { format!("/{path}") }
}

/// Additional paths get a leading slash and the default metadata; nothing else.
pub fn additional_paths(paths: &[String], defaults: &Defaults) -> Vec<PathRecord> {
  paths.iter().map(|p| PathRecord::with_defaults(with_leading_slash(p), defaults)).collect()
}

/// Hook output is caller data: re-anchor every path and alternate, fill unset metadata.
fn settle(records: &mut [PathRecord], defaults: &Defaults) {
  for record in records {
    if !record.path.starts_with('/') {
      record.path = with_leading_slash(&record.path);
    }
    for alt in record.alternates.iter_mut().flatten() {
      if !alt.path.starts_with('/') {
        alt.path = with_leading_slash(&alt.path);
      }
    }
    record.apply_defaults(defaults);
  }
}

/// Dedup by `path`: each path keeps its first position, the last record wins.
pub fn dedup_paths(records: Vec<PathRecord>) -> Vec<PathRecord> {
  let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
  let mut out: Vec<PathRecord> = Vec::with_capacity(records.len());
  for record in records {
    match index.get(&record.path) {
      Some(&at) => out[at] = record,
      None => {
        index.insert(record.path.clone(), out.len());
        out.push(record);
      }
    }
  }
  out
}

pub fn assemble(
  sources: Sources<'_>,
  defaults: &Defaults,
  process_paths: Option<&ProcessPathsFn>,
  sort: SortMode,
) -> Vec<PathRecord> {
  let mut records = sources.without_lang;
  records.extend(sources.with_lang);
  records.extend(additional_paths(sources.additional, defaults));

  if let Some(hook) = process_paths {
    records = hook(records);
    settle(&mut records, defaults);
  }

  let before = records.len();
  let mut records = dedup_paths(records);
  if sort == SortMode::Alpha {
    records.sort_by(|a, b| a.path.cmp(&b.path));
  }
  debug!(before, after = records.len(), ?sort, "paths assembled");
  records
}
