/* src/server/adapter/axum/src/handler.rs */

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use seam_sitemap::{RouteSource, SitemapResponse, generate_sitemap_response};

use crate::ConfigLoaderFn;
use crate::error::SitemapError;

pub(crate) struct AppState {
  pub source: Arc<dyn RouteSource + Send + Sync>,
  pub loader: ConfigLoaderFn,
}

pub(crate) fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/sitemap.xml", get(handle_sitemap))
    .route("/{file}", get(handle_child))
    .with_state(Arc::new(state))
}

/// `sitemap{digits}.xml` -> the digits, verbatim. Validation is the engine's job.
fn child_page(file: &str) -> Option<&str> {
  let digits = file.strip_prefix("sitemap")?.strip_suffix(".xml")?;
  (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

async fn handle_sitemap(State(state): State<Arc<AppState>>) -> Result<Response, SitemapError> {
  render(&state, None).await
}

async fn handle_child(
  State(state): State<Arc<AppState>>,
  Path(file): Path<String>,
) -> Result<Response, SitemapError> {
  match child_page(&file) {
    Some(page) => render(&state, Some(page.to_string())).await,
    None => Ok(
      (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "Not Found")
        .into_response(),
    ),
  }
}

async fn render(state: &AppState, page: Option<String>) -> Result<Response, SitemapError> {
  let mut config = (state.loader)().await?;
  config.page = page;
  let response = generate_sitemap_response(&config, state.source.as_ref())?;
  Ok(to_axum(response))
}

fn to_axum(response: SitemapResponse) -> Response {
  let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
  let mut headers = HeaderMap::new();
  for (name, value) in &response.headers {
    match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
      (Ok(name), Ok(value)) => {
        headers.insert(name, value);
      }
      _ => tracing::warn!(header = %name, "skipping invalid sitemap header"),
    }
  }
  (status, headers, response.body).into_response()
}
