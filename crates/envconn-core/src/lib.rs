//! Connection parameters resolved from the process environment
//!
//! This crate derives connection parameters (`protocol`, `secure`, `host`,
//! `port`, `name`) from environment variables, optionally namespaced, with
//! preset-based defaults for plain HTTP, HTTPS, and MongoDB.
//!
//! Resolution happens once, at construction: the environment is read in a
//! single snapshot, and the resulting [`ConnectionConfig`] is a read-only
//! view that never observes later environment changes.
//!
//! ```
//! use envconn_core::ConnectionConfig;
//!
//! let config = ConnectionConfig::new(Some("DOCS_API"), Some("https")).unwrap();
//! assert_eq!(config.protocol().unwrap().as_str(), Some("https"));
//! assert_eq!(config.port().unwrap().as_integer(), Some(443));
//! ```

pub mod config;
pub mod logging;
pub mod text;

pub use config::{ConfigError, ConnectionConfig, PARAM_KEYS, ParamValue, Preset};

// Re-export toml for table-based construction arguments
pub use toml;
