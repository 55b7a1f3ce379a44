//! Shared logging initialization for envconn consumers.

use std::str::FromStr;
use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize process-level tracing output from `ENVCONN_LOG`.
///
/// The variable names a level (`trace`, `debug`, `info`, `warn`, `error`,
/// any case); unset or unrecognized values fall back to `info`. Safe to
/// call multiple times; only the first call installs the subscriber, and a
/// subscriber already installed by the host application is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let level = std::env::var("ENVCONN_LOG")
            .ok()
            .and_then(|value| tracing::Level::from_str(value.trim()).ok())
            .unwrap_or(tracing::Level::INFO);
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
    });
}
