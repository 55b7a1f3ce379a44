//! Environment resolution and the assembled read-only instance.
//!
//! Construction takes a single environment snapshot: every lookup name is
//! read exactly once, and later changes to the process environment are not
//! observed by the constructed instance.

use super::presets::{PARAM_KEYS, ParamValue, Preset};
use crate::text::transform_case;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Construction error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An argument was supplied with the wrong runtime type.
    #[error("`{argument}` argument must be of type `{expected}`! Got type `{actual}`.")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// Expected type name
        expected: &'static str,
        /// Runtime type of the value received
        actual: &'static str,
    },

    /// No preset is registered under the requested name.
    #[error("unknown preset `{0}` (known presets: default, https, mongodb)")]
    UnknownPreset(String),
}

/// Upper-snake lookup names for the default parameter keys, in key order.
fn base_lookups() -> Vec<String> {
    PARAM_KEYS.iter().map(|key| transform_case(key)).collect()
}

/// Prefix each base lookup with `<namespace>_`. No namespace, or an empty
/// one, leaves the base lookups unchanged.
fn instance_lookups(namespace: Option<&str>, base: &[String]) -> Vec<String> {
    match namespace {
        Some(ns) if !ns.is_empty() => {
            base.iter().map(|lookup| format!("{ns}_{lookup}")).collect()
        }
        _ => base.to_vec(),
    }
}

/// Read each instance lookup from the process environment into a parameter
/// snapshot keyed by the camel form of the matching base lookup.
///
/// Missing variables are not errors: the key is still present with no
/// value, so the snapshot's key set is always the full default key set.
fn read_params(instance: &[String], base: &[String]) -> HashMap<String, Option<String>> {
    let mut params = HashMap::new();
    for (lookup, base_lookup) in instance.iter().zip(base) {
        let value = std::env::var(lookup).ok();
        trace!(%lookup, present = value.is_some(), "read environment parameter");
        params.insert(transform_case(base_lookup), value);
    }
    params
}

/// Choose the defaults bundle for this instance.
///
/// A non-empty `preset` name selects that preset merged onto the default;
/// an empty name behaves as absent. With no preset, a truthy `secure`
/// parameter selects the `https` merge. Truthy means any non-empty
/// environment string, `"false"` included: environment values are never
/// parsed as booleans.
fn select_defaults(
    params: &HashMap<String, Option<String>>,
    preset: Option<&str>,
) -> Result<Preset, ConfigError> {
    if let Some(name) = preset.filter(|name| !name.is_empty()) {
        return Preset::merged(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()));
    }
    let secure = params
        .get("secure")
        .and_then(|value| value.as_deref())
        .is_some_and(|value| !value.is_empty());
    if secure {
        debug!("secure parameter present; selecting the https preset");
        Ok(Preset::default().overlay(Preset::https()))
    } else {
        Ok(Preset::default())
    }
}

/// Extract an optional string entry from a loosely-typed argument table.
fn string_arg<'a>(
    table: &'a toml::Table,
    argument: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
    match table.get(argument) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidArgument {
                argument,
                expected: "string",
                actual: value.type_str(),
            }),
    }
}

/// A read-only view of resolved connection parameters.
///
/// Each key's effective value is the environment value captured at
/// construction when one was present (even an empty string), otherwise the
/// selected preset's default. The environment is read exactly once, at
/// construction; mutating it afterwards does not change the instance.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    params: HashMap<String, Option<String>>,
    defaults: Preset,
}

impl ConnectionConfig {
    /// Resolve an instance from the current process environment.
    ///
    /// `namespace` prefixes every environment lookup with `<namespace>_`;
    /// an empty namespace behaves as if absent. `preset` selects the named
    /// defaults bundle; with no preset (or an empty name) the bundle is
    /// inferred from the `secure` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] when `preset` names no
    /// registered preset. Missing environment variables are never errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use envconn_core::ConnectionConfig;
    ///
    /// let config = ConnectionConfig::new(Some("DOCS_DB"), Some("mongodb")).unwrap();
    /// assert_eq!(config.port().unwrap().as_integer(), Some(27017));
    /// assert!(config.host().is_none());
    /// ```
    pub fn new(namespace: Option<&str>, preset: Option<&str>) -> Result<Self, ConfigError> {
        let base = base_lookups();
        let instance = instance_lookups(namespace, &base);
        let params = read_params(&instance, &base);
        let defaults = select_defaults(&params, preset)?;
        debug!(
            namespace = namespace.unwrap_or(""),
            preset = preset.unwrap_or(""),
            "resolved connection parameters"
        );
        Ok(Self { params, defaults })
    }

    /// Resolve an instance from a loosely-typed argument table, as carried
    /// in a `[plugins.*]`-style configuration section.
    ///
    /// Recognized entries are `namespace` and `preset`, both optional;
    /// string entries then behave exactly as in [`ConnectionConfig::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] when an entry is present
    /// with a non-string value, naming the argument and the runtime type
    /// received, or [`ConfigError::UnknownPreset`] for an unregistered
    /// preset name.
    pub fn from_table(table: &toml::Table) -> Result<Self, ConfigError> {
        let namespace = string_arg(table, "namespace")?;
        let preset = string_arg(table, "preset")?;
        Self::new(namespace, preset)
    }

    /// Effective value for `key`: the captured environment value when one
    /// was present, else the selected preset's default. `None` when neither
    /// source has a value, or for keys outside the parameter set.
    pub fn get(&self, key: &str) -> Option<ParamValue> {
        match self.params.get(key) {
            Some(Some(value)) => Some(ParamValue::from(value.clone())),
            _ => self.defaults.get(key).cloned(),
        }
    }

    /// Effective `protocol` value.
    pub fn protocol(&self) -> Option<ParamValue> {
        self.get("protocol")
    }

    /// Effective `secure` value.
    pub fn secure(&self) -> Option<ParamValue> {
        self.get("secure")
    }

    /// Effective `host` value.
    pub fn host(&self) -> Option<ParamValue> {
        self.get("host")
    }

    /// Effective `port` value.
    pub fn port(&self) -> Option<ParamValue> {
        self.get("port")
    }

    /// Effective `name` value.
    pub fn name(&self) -> Option<ParamValue> {
        self.get("name")
    }

    /// Effective `(key, value)` pairs in the default preset's key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<ParamValue>)> + '_ {
        PARAM_KEYS.iter().map(|key| (*key, self.get(key)))
    }
}

/// Serializes the effective view as a map in parameter-key order, with
/// unset values as null.
impl Serialize for ConnectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PARAM_KEYS.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}
