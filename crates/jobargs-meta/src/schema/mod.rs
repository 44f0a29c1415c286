//! Typed option schemas
//!
//! An [`OptionSchema`] is a static table of [`OptionSpec`]s: for every
//! recognized key, its expected value kind, its default, and (for token
//! keys) the closed set of accepted values. The default dictionaries and the
//! token registry are both derived from these tables.
//!
//! - [`EXPORT_SCHEMA`] - options for export jobs
//! - [`IMPORT_SCHEMA`] - options for import jobs

mod export;
mod import;

pub use export::EXPORT_SCHEMA;
pub use import::IMPORT_SCHEMA;

use crate::value::{Dictionary, Value, ValueKind};

/// Default value of an option, in a form that can live in a static table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(&'static str),
    StringList(&'static [&'static str]),
    /// An empty nested dictionary.
    Dictionary,
}

impl DefaultValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::StringList(_) => ValueKind::StringList,
            Self::Dictionary => ValueKind::Dictionary,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Int(*i),
            Self::Float(x) => Value::Float(*x),
            Self::String(s) => Value::String((*s).to_string()),
            Self::StringList(list) => Value::StringList(list.iter().map(|s| s.to_string()).collect()),
            Self::Dictionary => Value::Dictionary(Dictionary::new()),
        }
    }
}

/// Schema entry for a single recognized option key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec {
    pub key: &'static str,
    pub default: DefaultValue,
    /// Closed token domain, for string options that only accept fixed values.
    pub domain: Option<&'static [&'static str]>,
}

impl OptionSpec {
    pub const fn new(key: &'static str, default: DefaultValue) -> Self {
        Self {
            key,
            default,
            domain: None,
        }
    }

    /// Restrict the option to a closed set of tokens (builder pattern).
    pub const fn with_domain(mut self, domain: &'static [&'static str]) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn kind(&self) -> ValueKind {
        self.default.kind()
    }

    /// Whether `token` is accepted. Options without a domain accept anything.
    pub fn allows(&self, token: &str) -> bool {
        match self.domain {
            Some(domain) => domain.contains(&token),
            None => true,
        }
    }
}

/// A closed vocabulary of option keys with declared kinds and defaults.
#[derive(Debug)]
pub struct OptionSchema {
    name: &'static str,
    options: &'static [OptionSpec],
}

impl OptionSchema {
    pub const fn new(name: &'static str, options: &'static [OptionSpec]) -> Self {
        Self { name, options }
    }

    /// Short name of the job kind this schema describes ("export", "import").
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<&'static OptionSpec> {
        self.options.iter().find(|spec| spec.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All specs, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static OptionSpec> {
        self.options.iter()
    }

    /// All recognized keys, in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.options.iter().map(|spec| spec.key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Build a dictionary holding every key at its default value.
    pub fn default_dictionary(&self) -> Dictionary {
        self.options
            .iter()
            .map(|spec| (spec.key.to_string(), spec.default.to_value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_OPTIONS: &[OptionSpec] = &[
        OptionSpec::new("flag", DefaultValue::Bool(true)),
        OptionSpec::new("mode", DefaultValue::String("a")).with_domain(&["a", "b"]),
        OptionSpec::new("names", DefaultValue::StringList(&["x"])),
    ];

    static SAMPLE: OptionSchema = OptionSchema::new("sample", SAMPLE_OPTIONS);

    #[test]
    fn test_lookup() {
        assert_eq!(SAMPLE.name(), "sample");
        assert_eq!(SAMPLE.len(), 3);
        assert!(SAMPLE.contains("flag"));
        assert!(!SAMPLE.contains("Flag"));
        assert_eq!(SAMPLE.get("mode").unwrap().kind(), ValueKind::String);
    }

    #[test]
    fn test_domain() {
        let mode = SAMPLE.get("mode").unwrap();
        assert!(mode.allows("b"));
        assert!(!mode.allows("c"));
        assert!(SAMPLE.get("flag").unwrap().allows("anything"));
    }

    #[test]
    fn test_default_dictionary() {
        let dict = SAMPLE.default_dictionary();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict["flag"], Value::Bool(true));
        assert_eq!(dict["names"], Value::StringList(vec!["x".into()]));
    }
}
