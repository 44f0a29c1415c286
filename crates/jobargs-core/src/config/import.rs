//! Import job configuration

use std::collections::BTreeSet;
use std::fmt;

use jobargs_meta::tokens::import_keys as key;
use jobargs_meta::{AssemblyRep, Dictionary, ShadingConversion, ShadingMode, parse_json_dictionary};
use serde::Serialize;

use super::defaults::import_vocabulary;
use super::merge::MergedOptions;
use super::render;
use crate::Result;
use crate::interval::TimeInterval;
use crate::resolved::{DiagnosticSink, Resolved};

/// Typed configuration of one import job.
///
/// The shading mode changes only through [`with_shading_mode`], and the
/// time interval is fixed by the resolver. Other fields are plain option
/// values; writes to an owned copy are not checked again.
///
/// [`with_shading_mode`]: ImportConfig::with_shading_mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportConfig {
    pub assembly_rep: AssemblyRep,
    pub exclude_primvar_names: BTreeSet<String>,
    pub include_api_names: BTreeSet<String>,
    pub include_metadata_keys: BTreeSet<String>,
    shading_mode: ShadingMode,
    pub shading_conversion: ShadingConversion,
    pub use_as_animation_cache: bool,
    pub import_with_proxy_shapes: bool,
    time_interval: TimeInterval,
}

impl ImportConfig {
    pub fn shading_mode(&self) -> ShadingMode {
        self.shading_mode
    }

    /// Empty imports no animation, full imports all of it.
    pub fn time_interval(&self) -> TimeInterval {
        self.time_interval
    }

    pub fn imports_animation(&self) -> bool {
        !self.time_interval.is_empty()
    }

    /// A copy of this config reading materials with another shading mode.
    pub fn with_shading_mode(&self, shading_mode: ShadingMode) -> Self {
        Self {
            shading_mode,
            ..self.clone()
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ImportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::field(f, "assemblyRep", self.assembly_rep)?;
        render::items(f, "excludePrimvarNames", &self.exclude_primvar_names)?;
        render::items(f, "includeAPINames", &self.include_api_names)?;
        render::items(f, "includeMetadataKeys", &self.include_metadata_keys)?;
        render::field(f, "shadingMode", self.shading_mode)?;
        render::field(f, "shadingConversion", self.shading_conversion)?;
        render::field(f, "useAsAnimationCache", self.use_as_animation_cache)?;
        render::field(f, "importWithProxyShapes", self.import_with_proxy_shapes)?;
        render::field(f, "timeInterval", self.time_interval)
    }
}

/// Builds [`ImportConfig`]s from user option dictionaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportConfigResolver;

impl ImportConfigResolver {
    /// Every recognized import option at its default value.
    pub fn default_dictionary() -> &'static Dictionary {
        import_vocabulary().defaults()
    }

    /// Resolve `user` against the import defaults.
    ///
    /// A missing `time_interval` means the full interval: import all
    /// animation.
    pub fn resolve(
        user: &Dictionary,
        import_with_proxy_shapes: bool,
        time_interval: Option<TimeInterval>,
    ) -> Resolved<ImportConfig> {
        let mut sink = DiagnosticSink::new("import");
        let merged = MergedOptions::overlay(import_vocabulary(), user, &mut sink);

        let name_set = |key: &str| -> BTreeSet<String> {
            merged.string_list(key).iter().cloned().collect()
        };

        let config = ImportConfig {
            assembly_rep: merged.token(key::ASSEMBLY_REP),
            exclude_primvar_names: name_set(key::EXCLUDE_PRIMVAR),
            include_api_names: name_set(key::API_SCHEMA),
            include_metadata_keys: name_set(key::METADATA),
            shading_mode: merged.token(key::SHADING_MODE),
            shading_conversion: merged.token(key::SHADING_CONVERSION),
            use_as_animation_cache: merged.bool(key::USE_AS_ANIMATION_CACHE),
            import_with_proxy_shapes,
            time_interval: time_interval.unwrap_or_default(),
        };

        sink.finish(config)
    }

    /// Parse a JSON object and resolve it.
    pub fn resolve_json(
        json: &str,
        import_with_proxy_shapes: bool,
        time_interval: Option<TimeInterval>,
    ) -> Result<Resolved<ImportConfig>> {
        let user = parse_json_dictionary(json)?;
        Ok(Self::resolve(&user, import_with_proxy_shapes, time_interval))
    }
}
