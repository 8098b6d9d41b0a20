/* src/server/adapter/axum/src/error.rs */

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use seam_sitemap::ConfigError;
use thiserror::Error;

/// Failure while producing a sitemap: the caller's loader failed, or the
/// loaded config is invalid. Always a server error.
#[derive(Debug, Error)]
pub enum SitemapError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("sitemap: config loader failed: {0}")]
  Load(String),
}

impl SitemapError {
  pub fn load(msg: impl Into<String>) -> Self {
    Self::Load(msg.into())
  }
}

impl IntoResponse for SitemapError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "sitemap generation failed");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
      "Internal Server Error",
    )
      .into_response()
  }
}
