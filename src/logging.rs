//! Log setup for the command line tools.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `tracing` subscriber that writes to stderr.
///
/// The filter is read from `RUST_LOG` when set, otherwise `default_level`
/// (e.g. `"info"` or `"bankview=debug"`) is used.
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .try_init();

    if let Err(error) = result {
        tracing::debug!("logging already initialised: {error}");
    }
}
