//! Tracing subscriber setup shared by every minirpc binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a binary.
///
/// Binary names use `-`, tracing targets use `_`, so `minirpc-server` becomes
/// `minirpc_server=<level>`. HTTP tracing from `tower_http` follows the same level.
pub fn default_directive(bin_name: &str, level: &str) -> String {
    let crate_target = bin_name.replace('-', "_");
    format!("{crate_target}={level},minirpc_server={level},minirpc_client={level},tower_http={level}")
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
/// Logs go to stderr so interactive clients keep stdout for their own output.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    // try_init: integration tests may install a subscriber more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    tracing::debug!("Logger initialized for {}", bin_name);
}
