/* src/cli/core/src/logging.rs */

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber: `RUST_LOG` when set, else `default_filter`.
/// Logs go to stderr so stdout stays clean for `sample` output.
pub fn setup_logging(default_filter: &str) {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .init();
}
