//! Logging init: structured diagnostics on stderr, filtered by `RUST_LOG`.
//!
//! Human progress lines are printed to stdout by the fetcher itself; this
//! only covers the `tracing` side.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,category_fetch=info";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init: tests and embedders may already have a subscriber installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
