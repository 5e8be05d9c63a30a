//! Progress logging.
//!
//! Thin wrappers over [`tracing`] so pipeline code reads as a sequence of
//! steps. Events go to stderr; stdout is reserved for the run summary.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

pub fn log_info(msg: impl AsRef<str>) {
    tracing::info!("{}", msg.as_ref());
}

pub fn log_success(msg: impl AsRef<str>) {
    tracing::info!("\u{2713} {}", msg.as_ref());
}

pub fn log_warning(msg: impl AsRef<str>) {
    tracing::warn!("{}", msg.as_ref());
}
