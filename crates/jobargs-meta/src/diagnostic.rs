//! Non-fatal resolution diagnostics
//!
//! Each diagnostic degrades exactly one field to its default (or, for the
//! type filter, to a no-op). Resolution always completes.

use serde::Serialize;

use crate::value::ValueKind;

/// A problem found while resolving a single option.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// The user dictionary holds a key the schema does not know.
    #[error("Unrecognized option '{key}'")]
    UnrecognizedKey { key: String },

    /// A recognized key holds a value of the wrong shape.
    #[error("Option '{key}' expects a {expected} value, got {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A token-domain key holds a value outside its closed set.
    #[error("Option '{key}' has unrecognized value '{value}' (expected one of: {allowed})")]
    UnrecognizedEnumValue {
        key: String,
        value: String,
        allowed: String,
    },

    /// The host type hierarchy could not resolve a filtered type name.
    #[error("Unable to resolve type name '{name}'")]
    UnresolvableTypeName { name: String },

    /// A path-valued option is not a well-formed scene path.
    #[error("Option '{key}' holds an invalid scene path '{path}'")]
    InvalidPath { key: String, path: String },

    /// Export time samples decrease at `index`; samples are kept as given.
    #[error("Time samples must be non-decreasing; sample {index} ({value}) is smaller than its predecessor")]
    UnsortedTimeSamples { index: usize, value: f64 },
}

impl Diagnostic {
    /// The option key this diagnostic refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedKey { key }
            | Self::TypeMismatch { key, .. }
            | Self::UnrecognizedEnumValue { key, .. }
            | Self::InvalidPath { key, .. } => Some(key),
            Self::UnresolvableTypeName { .. } | Self::UnsortedTimeSamples { .. } => None,
        }
    }

    pub(crate) fn unrecognized_enum_value(key: &str, value: &str, allowed: &[&str]) -> Self {
        let allowed = allowed
            .iter()
            .map(|token| format!("'{}'", token))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnrecognizedEnumValue {
            key: key.to_string(),
            value: value.to_string(),
            allowed,
        }
    }
}
