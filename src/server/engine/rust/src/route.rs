/* src/server/engine/rust/src/route.rs */

//! Route patterns and the bracket tokens they carry.
//!
//! A route pattern is a canonical, slash-delimited path such as
//! `/[[lang]]/blog/[slug]`. Tokens are `[name]` (required), `[[name]]`
//! (optional), either with an optional `=matcher` suffix. The reserved
//! language token (`[lang]`, `[[lang]]`, `[lang=m]`, `[[lang=m]]`) is
//! never bound from param values; the language expander owns it.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

fn token_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  // Double brackets first so an optional token is never read as `[` + `[name]` + `]`
  RE.get_or_init(|| Regex::new(r"\[\[[^\[\]/]+\]\]|\[[^\[\]/]+\]").unwrap())
}

fn lang_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^(?:\[\[lang(?:=[a-z]+)?\]\]|\[lang(?:=[a-z]+)?\])$").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Required,
  Optional,
  Lang { optional: bool },
}

/// One bracket token found in a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
  pub kind: TokenKind,
  /// Full bracketed text, e.g. `[[page=integer]]`
  pub text: &'a str,
  /// Name without brackets or matcher, e.g. `page`
  pub name: &'a str,
  /// Byte range of `text` within the route
  pub span: Range<usize>,
}

impl Token<'_> {
  pub fn is_lang(&self) -> bool {
    matches!(self.kind, TokenKind::Lang { .. })
  }

  /// Tokens filled from param values: everything except the language token.
  pub fn is_bindable(&self) -> bool {
    !self.is_lang()
  }

  /// Rest tokens (`[...path]`) may span several segments.
  pub fn is_rest(&self) -> bool {
    self.name.starts_with("...")
  }
}

/// True when `text` is exactly one language token.
pub fn is_lang_token(text: &str) -> bool {
  lang_re().is_match(text)
}

/// All tokens in `route`, left to right.
pub fn tokens(route: &str) -> impl Iterator<Item = Token<'_>> {
  token_re().find_iter(route).map(|m| {
    let text = m.as_str();
    let kind = if is_lang_token(text) {
      TokenKind::Lang { optional: text.starts_with("[[") }
    } else if text.starts_with("[[") {
      TokenKind::Optional
    } else {
      TokenKind::Required
    };
    let inner = text.trim_start_matches('[').trim_end_matches(']');
    let name = inner.split_once('=').map_or(inner, |(name, _)| name);
    Token { kind, text, name, span: m.range() }
  })
}

/// Tokens that param values must resolve.
pub fn bindable_tokens(route: &str) -> Vec<Token<'_>> {
  tokens(route).filter(Token::is_bindable).collect()
}

pub fn lang_token(route: &str) -> Option<Token<'_>> {
  tokens(route).find(Token::is_lang)
}

pub fn has_lang(route: &str) -> bool {
  lang_token(route).is_some()
}

/// A route with no tokens other than the language token.
pub fn is_static(route: &str) -> bool {
  tokens(route).all(|t| t.is_lang())
}

/// True when the segment carries an optional token other than the language token.
pub fn is_optional_segment(segment: &str) -> bool {
  tokens(segment).any(|t| t.kind == TokenKind::Optional)
}

/// Replace the language token with a concrete code.
pub fn replace_lang(route: &str, code: &str) -> String {
  match lang_token(route) {
    Some(token) => format!("{}{code}{}", &route[..token.span.start], &route[token.span.end..]),
    None => route.to_string(),
  }
}

/// Drop the language token. When the token fills a whole segment the segment
/// goes with it (`/[[lang]]/about` -> `/about`); an emptied route becomes `/`.
pub fn remove_lang(route: &str) -> String {
  let Some(token) = lang_token(route) else {
    return route.to_string();
  };
  let before = &route[..token.span.start];
  let after = &route[token.span.end..];
  let whole_segment = before.ends_with('/') && (after.is_empty() || after.starts_with('/'));
  let out = if whole_segment {
    format!("{}{after}", &before[..before.len() - 1])
  } else {
    format!("{before}{after}")
  };
  if out.is_empty() { "/".to_string() } else { out }
}

/// Split a route into its non-empty segments.
pub fn segments(route: &str) -> impl Iterator<Item = &str> {
  route.split('/').filter(|s| !s.is_empty())
}
