//! Import option table

use super::{DefaultValue, OptionSchema, OptionSpec};
use crate::tokens::{AssemblyRep, ShadingConversion, ShadingMode, import_keys as key};

const IMPORT_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new(key::API_SCHEMA, DefaultValue::StringList(&[])),
    OptionSpec::new(key::ASSEMBLY_REP, DefaultValue::String(AssemblyRep::Collapsed.as_str()))
        .with_domain(AssemblyRep::TOKENS),
    OptionSpec::new(key::EXCLUDE_PRIMVAR, DefaultValue::StringList(&[])),
    OptionSpec::new(
        key::METADATA,
        DefaultValue::StringList(&["hidden", "instanceable", "kind"]),
    ),
    OptionSpec::new(key::SHADING_MODE, DefaultValue::String(ShadingMode::DisplayColor.as_str()))
        .with_domain(ShadingMode::TOKENS),
    OptionSpec::new(
        key::SHADING_CONVERSION,
        DefaultValue::String(ShadingConversion::Lambert.as_str()),
    )
    .with_domain(ShadingConversion::TOKENS),
    OptionSpec::new(key::USE_AS_ANIMATION_CACHE, DefaultValue::Bool(false)),
];

/// Every option an import job recognizes.
pub static IMPORT_SCHEMA: OptionSchema = OptionSchema::new("import", IMPORT_OPTIONS);
