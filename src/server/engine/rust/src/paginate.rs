/* src/server/engine/rust/src/paginate.rs */

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Rejected page request. Recoverable: mapped to a response, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
  #[error("Invalid page param")]
  Malformed(String),

  #[error("Page does not exist")]
  OutOfRange { page: usize, total: usize },
}

impl PageError {
  pub fn status(&self) -> u16 {
    match self {
      Self::Malformed(_) => 400,
      Self::OutOfRange { .. } => 404,
    }
  }
}

fn page_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[1-9][0-9]*$").unwrap())
}

pub fn total_pages(count: usize, max_per_page: usize) -> usize {
  count.div_ceil(max_per_page)
}

/// Canonical base-10 positive integer: no sign, no leading zero, no decimal point.
pub fn parse_page(raw: &str) -> Result<usize, PageError> {
  if !page_re().is_match(raw) {
    return Err(PageError::Malformed(raw.to_string()));
  }
  // Too large for usize: certainly past the last page
  Ok(raw.parse().unwrap_or(usize::MAX))
}

/// Slice of `items` for the 1-based `page`.
pub fn page_slice<T>(items: &[T], page: usize, max_per_page: usize) -> Result<&[T], PageError> {
  let total = total_pages(items.len(), max_per_page);
  if page == 0 || page > total {
    return Err(PageError::OutOfRange { page, total });
  }
  let start = (page - 1) * max_per_page;
  let end = items.len().min(start.saturating_add(max_per_page));
  Ok(&items[start..end])
}
