/* src/server/engine/rust/src/lib.rs */

pub mod assemble;
pub mod bind;
pub mod config;
pub mod errors;
pub mod lang;
pub mod normalize;
pub mod optional;
pub mod paginate;
pub mod params;
pub mod record;
pub mod response;
pub mod route;
pub mod sample;
pub mod source;
pub mod xml;

// Public API re-exports
pub use assemble::{ProcessPathsFn, SortMode};
pub use config::{DEFAULT_MAX_PER_PAGE, SitemapConfig};
pub use errors::ConfigError;
pub use lang::LangConfig;
pub use normalize::RouteLayout;
pub use paginate::PageError;
pub use params::{ParamRecord, ParamValues};
pub use record::{Alternate, Changefreq, Defaults, PathRecord, Priority};
pub use response::{SitemapResponse, generate_paths, generate_sitemap_response};
pub use sample::{
  SampleError, SitemapDocument, parse_document, sample_paths, sample_paths_with, sample_urls,
  sample_urls_with,
};
pub use source::{DirRouteSource, FnRouteSource, RouteSource, from_fn};
