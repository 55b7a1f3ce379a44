//! Connection-parameter resolution
//!
//! Resolves each parameter from two sources with priority:
//! 1. Environment variables (optionally namespaced)
//! 2. Preset defaults (named, or inferred from the `secure` parameter)

mod presets;
mod resolve;

pub use presets::{PARAM_KEYS, ParamValue, Preset};
pub use resolve::{ConfigError, ConnectionConfig};
