//! Dictionary overlay with type and token checks
//!
//! The user dictionary is laid over a job's default dictionary. User values
//! win, but only when they are recognized, of the declared kind, and (for
//! token keys) inside the declared domain. Anything else is reported and the
//! default is kept, so one bad key never costs the rest of the job.

use std::str::FromStr;

use jobargs_meta::{Diagnostic, Dictionary, Value, ValueKind};

use super::defaults::OptionVocabulary;
use crate::resolved::DiagnosticSink;

/// A user dictionary overlaid on a job's defaults.
///
/// Holds every recognized key, each with a value of its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedOptions {
    values: Dictionary,
}

impl MergedOptions {
    /// Overlay `user` onto the defaults of `vocabulary`.
    pub(crate) fn overlay(
        vocabulary: &OptionVocabulary,
        user: &Dictionary,
        sink: &mut DiagnosticSink,
    ) -> Self {
        let mut values = vocabulary.defaults().clone();

        for (key, user_value) in user {
            let Some(spec) = vocabulary.schema().get(key) else {
                sink.report(Diagnostic::UnrecognizedKey { key: key.clone() });
                continue;
            };

            let expected = spec.kind();
            if !expected.accepts(user_value.kind()) {
                sink.report(Diagnostic::TypeMismatch {
                    key: key.clone(),
                    expected,
                    found: user_value.kind(),
                });
                continue;
            }

            if let Value::String(token) = user_value {
                if let Err(diagnostic) = vocabulary.tokens().validate(key, token) {
                    sink.report(diagnostic);
                    continue;
                }
            }

            let slot = values
                .entry(key.clone())
                .or_insert_with(|| spec.default.to_value());
            overlay_value(slot, user_value, expected, key, sink);
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or_default()
    }

    pub fn string(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn string_list(&self, key: &str) -> &[String] {
        self.get(key)
            .and_then(Value::as_string_list)
            .unwrap_or_default()
    }

    pub fn dictionary(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(Value::as_dictionary)
    }

    /// Parse a token option into its typed enum.
    ///
    /// Tokens were validated during the overlay, so the fallback only
    /// applies to keys missing from the schema.
    pub fn token<T: FromStr + Default>(&self, key: &str) -> T {
        self.string(key).parse().unwrap_or_default()
    }

    /// The merged dictionary.
    pub fn as_dictionary(&self) -> &Dictionary {
        &self.values
    }
}

/// Overlay a type-checked user value onto its slot.
///
/// Dictionaries merge key-wise (recursively), integers widen into float
/// slots, everything else is replaced. A nested value of the wrong kind
/// is reported under its dotted key and the existing value is kept.
fn overlay_value(
    slot: &mut Value,
    user: &Value,
    expected: ValueKind,
    key: &str,
    sink: &mut DiagnosticSink,
) {
    match (slot, user) {
        (Value::Dictionary(base), Value::Dictionary(overlay)) => {
            for (name, value) in overlay {
                let nested_key = format!("{key}.{name}");
                match base.get_mut(name) {
                    Some(existing) => {
                        let kind = existing.kind();
                        if kind.accepts(value.kind()) {
                            overlay_value(existing, value, kind, &nested_key, sink);
                        } else {
                            sink.report(Diagnostic::TypeMismatch {
                                key: nested_key,
                                expected: kind,
                                found: value.kind(),
                            });
                        }
                    }
                    None => {
                        base.insert(name.clone(), value.clone());
                    }
                }
            }
        }
        (slot, Value::Int(i)) if expected == ValueKind::Float => {
            *slot = Value::Float(*i as f64);
        }
        (slot, user) => {
            *slot = user.clone();
        }
    }
}
