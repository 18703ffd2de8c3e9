//! Structured logging setup shared by both binaries.
//!
//! Report text is the tools' product and goes to stdout; log records go to
//! stderr so the two never interleave in a redirected report.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialises the global `tracing` subscriber.
///
/// The level is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug`).  `verbose`
/// raises the fallback filter to `debug` for this crate family.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "tabdisplay_tools=debug,tabdisplay_core=debug,info"
    } else {
        DEFAULT_FILTER
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
