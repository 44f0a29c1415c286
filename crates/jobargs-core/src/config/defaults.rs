//! Process-wide default dictionaries
//!
//! Each job kind has one [`OptionVocabulary`]: its schema, the default
//! dictionary derived from it, and the token registry derived from it. They
//! are built on first access and never mutated afterwards, so any number of
//! threads can resolve against them without locking.

use std::sync::LazyLock;

use jobargs_meta::{Dictionary, EXPORT_SCHEMA, IMPORT_SCHEMA, OptionSchema, TokenRegistry};

/// Schema, defaults and token registry for one job kind.
#[derive(Debug)]
pub struct OptionVocabulary {
    schema: &'static OptionSchema,
    defaults: Dictionary,
    tokens: TokenRegistry,
}

impl OptionVocabulary {
    fn build(schema: &'static OptionSchema) -> Self {
        tracing::debug!(job = schema.name(), keys = schema.len(), "Building default options");
        Self {
            schema,
            defaults: schema.default_dictionary(),
            tokens: TokenRegistry::from_schema(schema),
        }
    }

    pub fn schema(&self) -> &'static OptionSchema {
        self.schema
    }

    /// Every recognized key at its default value.
    pub fn defaults(&self) -> &Dictionary {
        &self.defaults
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }
}

static EXPORT_VOCABULARY: LazyLock<OptionVocabulary> =
    LazyLock::new(|| OptionVocabulary::build(&EXPORT_SCHEMA));

static IMPORT_VOCABULARY: LazyLock<OptionVocabulary> =
    LazyLock::new(|| OptionVocabulary::build(&IMPORT_SCHEMA));

pub fn export_vocabulary() -> &'static OptionVocabulary {
    &EXPORT_VOCABULARY
}

pub fn import_vocabulary() -> &'static OptionVocabulary {
    &IMPORT_VOCABULARY
}
