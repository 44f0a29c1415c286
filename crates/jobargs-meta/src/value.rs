//! Loosely-typed option values and dictionaries
//!
//! A [`Dictionary`] is the string-keyed option bag a caller hands to a
//! resolver. Values are untagged on the wire, so the same dictionary can be
//! written as a JSON object or a TOML table:
//!
//! ```
//! use jobargs_meta::{Value, parse_json_dictionary, parse_toml_dictionary};
//!
//! let from_json = parse_json_dictionary(r#"{"shadingMode": "none", "exportUVs": false}"#).unwrap();
//! let from_toml = parse_toml_dictionary("shadingMode = \"none\"\nexportUVs = false\n").unwrap();
//!
//! assert_eq!(from_json, from_toml);
//! assert_eq!(from_json["exportUVs"], Value::Bool(false));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// String-keyed option bag. Ordered, so iteration and rendering are stable.
pub type Dictionary = BTreeMap<String, Value>;

/// A single option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    StringList(Vec<String>),
    Dictionary(Dictionary),
}

/// The shape of a [`Value`], used for type checks against the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    StringList,
    Dictionary,
}

impl ValueKind {
    /// Whether a value of kind `found` may stand in for this kind.
    ///
    /// Kinds must match exactly, except that integers widen to floats.
    pub fn accepts(self, found: ValueKind) -> bool {
        self == found || (self == ValueKind::Float && found == ValueKind::Int)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "double"),
            Self::String => write!(f, "string"),
            Self::StringList => write!(f, "string list"),
            Self::Dictionary => write!(f, "dictionary"),
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::StringList(_) => ValueKind::StringList,
            Self::Dictionary(_) => ValueKind::Dictionary,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float view of the value; integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// Convert to a JSON value, e.g. for option-listing tooling.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Self::StringList(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Dictionary> for Value {
    fn from(value: Dictionary) -> Self {
        Self::Dictionary(value)
    }
}

/// Build a dictionary from key/value pairs.
///
/// ```
/// use jobargs_meta::{Value, dictionary};
///
/// let dict = dictionary([("exportUVs", Value::from(false)), ("kind", Value::from("component"))]);
/// assert_eq!(dict.len(), 2);
/// ```
pub fn dictionary<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Dictionary
where
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Parse an option dictionary from a JSON object.
pub fn parse_json_dictionary(content: &str) -> Result<Dictionary> {
    match serde_json::from_str::<Value>(content)? {
        Value::Dictionary(dict) => Ok(dict),
        other => Err(Error::NotADictionary {
            found: other.kind().to_string(),
        }),
    }
}

/// Parse an option dictionary from a TOML document.
pub fn parse_toml_dictionary(content: &str) -> Result<Dictionary> {
    let dict: Dictionary = toml::from_str(content)?;
    Ok(dict)
}

/// Render a dictionary as a JSON object.
pub fn dictionary_to_json(dict: &Dictionary) -> serde_json::Value {
    serde_json::to_value(dict).unwrap_or_else(|_| serde_json::json!({}))
}
