//! Parameter values and the built-in preset table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Parameter keys of the default preset, in its defined order.
///
/// This is the key set of every resolved instance and the deterministic
/// iteration order used throughout the crate.
pub const PARAM_KEYS: [&str; 5] = ["protocol", "secure", "host", "port", "name"];

/// A loosely-typed parameter value.
///
/// Values read from the environment are always strings; preset defaults
/// also carry integer ports and the boolean `secure` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A string value (every environment-sourced value has this form)
    Str(String),
    /// An integer value (preset ports)
    Int(i64),
    /// A boolean value (the preset `secure` flag)
    Bool(bool),
}

impl ParamValue {
    /// The contained string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The contained integer, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The contained boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// A named bundle of default parameter values.
///
/// A key absent from the bundle is an unset default: the default preset
/// leaves `host` and `name` unset. Presets other than the default are
/// partial overlays merged onto it with [`Preset::merged`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    values: HashMap<&'static str, ParamValue>,
}

/// Plain unsecured HTTP on port 80, with `host` and `name` unset.
impl Default for Preset {
    fn default() -> Self {
        Self {
            values: HashMap::from([
                ("protocol", ParamValue::from("http")),
                ("secure", ParamValue::from(false)),
                ("port", ParamValue::from(80)),
            ]),
        }
    }
}

impl Preset {
    /// Names registered in the preset table.
    pub const NAMES: [&'static str; 3] = ["default", "https", "mongodb"];

    /// The `https` overlay: secured HTTPS on port 443.
    pub fn https() -> Self {
        Self {
            values: HashMap::from([
                ("protocol", ParamValue::from("https")),
                ("secure", ParamValue::from(true)),
                ("port", ParamValue::from(443)),
            ]),
        }
    }

    /// The `mongodb` overlay: the MongoDB wire protocol on port 27017.
    pub fn mongodb() -> Self {
        Self {
            values: HashMap::from([
                ("protocol", ParamValue::from("mongodb")),
                ("port", ParamValue::from(27017)),
            ]),
        }
    }

    /// Look up the preset registered under `name`, as defined (overlays stay
    /// partial). `None` when no such preset exists.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "https" => Some(Self::https()),
            "mongodb" => Some(Self::mongodb()),
            _ => None,
        }
    }

    /// The default preset overlaid with the preset registered under `name`;
    /// the named preset wins on overlapping keys. `None` when no such
    /// preset exists.
    pub fn merged(name: &str) -> Option<Self> {
        Self::named(name).map(|overlay| Self::default().overlay(overlay))
    }

    /// Merge `other` on top of this preset; `other` wins on overlapping
    /// keys.
    pub fn overlay(mut self, other: Preset) -> Self {
        self.values.extend(other.values);
        self
    }

    /// The default value for `key`, or `None` when the preset leaves it
    /// unset.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }
}
