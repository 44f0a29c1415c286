//! Option vocabulary for USD import/export job arguments.
//!
//! This crate defines what a job option dictionary may contain: value
//! shapes, the recognized keys with their defaults and token domains, the
//! typed tokens, and the diagnostics raised when a dictionary strays from
//! that vocabulary. Resolution itself lives in `jobargs-core`.

pub mod diagnostic;
pub mod error;
pub mod hierarchy;
pub mod path;
pub mod registry;
pub mod schema;
pub mod tokens;
pub mod value;

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use hierarchy::{TypeHierarchy, TypeId, TypeTree};
pub use path::{DagPath, InvalidScenePath, ScenePath};
pub use registry::TokenRegistry;
pub use schema::{DefaultValue, EXPORT_SCHEMA, IMPORT_SCHEMA, OptionSchema, OptionSpec};
pub use tokens::{
    AssemblyRep, Compatibility, MeshScheme, RenderLayerMode, ShadingConversion, ShadingMode,
    SkelExportMode, UnknownToken, UsdFormat,
};
pub use value::{
    Dictionary, Value, ValueKind, dictionary, dictionary_to_json, parse_json_dictionary,
    parse_toml_dictionary,
};
