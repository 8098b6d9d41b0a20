/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use seam_sitemap::{RouteSource, SitemapConfig};

pub use error::SitemapError;
/// Re-export the sitemap engine for convenience
pub use seam_sitemap;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Produces a fresh config per request. Data fetching for param values
/// belongs here; the engine itself never does I/O.
pub type ConfigLoaderFn =
  Arc<dyn Fn() -> BoxFuture<Result<SitemapConfig, SitemapError>> + Send + Sync>;

/// Serves `/sitemap.xml` and `/sitemap{N}.xml` from a route source and a config loader.
pub struct SitemapService {
  source: Arc<dyn RouteSource + Send + Sync>,
  loader: ConfigLoaderFn,
}

impl SitemapService {
  pub fn new<S, F, Fut>(source: S, loader: F) -> Self
  where
    S: RouteSource + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<SitemapConfig, SitemapError>> + Send + 'static,
  {
    let loader: ConfigLoaderFn =
      Arc::new(move || Box::pin(loader()) as BoxFuture<Result<SitemapConfig, SitemapError>>);
    Self { source: Arc::new(source), loader }
  }

  pub fn into_router(self) -> axum::Router {
    handler::build_router(handler::AppState { source: self.source, loader: self.loader })
  }

  pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("sitemap served on http://localhost:{}/sitemap.xml", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}
