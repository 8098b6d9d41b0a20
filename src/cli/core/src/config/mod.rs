/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_sitemap_config, load_sitemap_config};
pub use types::{OutputSection, RoutesSection, SitemapToml};
