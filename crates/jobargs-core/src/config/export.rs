//! Export job configuration

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use jobargs_meta::tokens::export_keys as key;
use jobargs_meta::{
    Compatibility, DagPath, Diagnostic, Dictionary, MeshScheme, RenderLayerMode, ScenePath,
    ShadingMode, SkelExportMode, TypeHierarchy, TypeId, UsdFormat, ValueKind,
    parse_json_dictionary,
};
use serde::Serialize;

use super::defaults::export_vocabulary;
use super::merge::MergedOptions;
use super::render::{self, INDENT, Samples};
use crate::Result;
use crate::resolved::{DiagnosticSink, Resolved};
use crate::type_filter::TypeFilter;

/// Argument name -> value for a single chaser.
pub type ChaserArgs = BTreeMap<String, String>;

/// How materials get bound to exported geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialBinding {
    /// Each object binds its material directly.
    Direct,
    /// Bindings go through material collections.
    Collection,
}

/// Typed configuration of one export job.
///
/// Only [`ExportConfigResolver`] builds these. Once built, a config is
/// plain data and can be shared read-only across threads. The excluded
/// type set is the one part that changes afterwards, and it only grows
/// until cleared.
///
/// Public fields hold option values whose type is their whole contract;
/// writes to an owned copy are not checked again. Anchored paths, time
/// samples and the model root are read through accessors, and the model
/// root only changes through [`with_model_root_override`].
///
/// [`with_model_root_override`]: ExportConfig::with_model_root_override
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportConfig {
    pub compatibility: Compatibility,
    pub default_mesh_scheme: MeshScheme,
    #[serde(rename = "defaultUSDFormat")]
    pub default_usd_format: UsdFormat,
    pub euler_filter: bool,
    /// Derived from `renderableOnly`.
    pub exclude_invisible: bool,
    pub export_collection_based_bindings: bool,
    pub export_color_sets: bool,
    pub export_default_cameras: bool,
    pub export_display_color: bool,
    pub export_instances: bool,
    pub export_material_collections: bool,
    /// Derived from `exportUVs`.
    #[serde(rename = "exportMeshUVs")]
    pub export_mesh_uvs: bool,
    /// Derived from `exportUVs`.
    #[serde(rename = "exportNurbsExplicitUV")]
    pub export_nurbs_explicit_uv: bool,
    pub export_reference_objects: bool,
    pub export_refs_as_instanceable: bool,
    pub export_skels: SkelExportMode,
    pub export_skin: SkelExportMode,
    pub export_visibility: bool,
    material_collections_path: ScenePath,
    pub materials_scope_name: String,
    pub merge_transform_and_shape: bool,
    pub normalize_nurbs: bool,
    parent_scope: ScenePath,
    pub render_layer_mode: RenderLayerMode,
    /// Kind authored on root prims; taken from `kind`.
    pub root_kind: String,
    pub shading_mode: ShadingMode,
    pub strip_namespaces: bool,
    pub verbose: bool,
    /// Chasers in execution order.
    pub chaser_names: Vec<String>,
    /// Arguments per chaser. Every declared chaser has an entry.
    pub all_chaser_args: BTreeMap<String, ChaserArgs>,
    pub mel_per_frame_callback: String,
    pub mel_post_callback: String,
    pub python_per_frame_callback: String,
    pub python_post_callback: String,
    pub dag_paths: BTreeSet<DagPath>,
    time_samples: Vec<f64>,
    model_root_override_path: ScenePath,
    filtered_type_ids: TypeFilter,
}

impl ExportConfig {
    /// Whether materials are bound through collections or directly.
    ///
    /// Collection binding needs both `exportCollectionBasedBindings` and
    /// a collections path; either one alone falls back to direct binding.
    pub fn material_binding(&self) -> MaterialBinding {
        if self.export_collection_based_bindings && !self.material_collections_path.is_empty() {
            MaterialBinding::Collection
        } else {
            MaterialBinding::Direct
        }
    }

    /// Collections path, absolute or empty when unset.
    pub fn material_collections_path(&self) -> &ScenePath {
        &self.material_collections_path
    }

    /// Scope exported prims are parented under, absolute or empty.
    pub fn parent_scope(&self) -> &ScenePath {
        &self.parent_scope
    }

    /// Samples as given to the resolver. Empty means no animation.
    pub fn time_samples(&self) -> &[f64] {
        &self.time_samples
    }

    /// Root substituted when exporting model variants. Empty when unused.
    pub fn model_root_override_path(&self) -> &ScenePath {
        &self.model_root_override_path
    }

    pub fn exports_animation(&self) -> bool {
        !self.time_samples.is_empty()
    }

    /// Arguments for `chaser`. Declared chasers without arguments get an
    /// empty map.
    pub fn chaser_args(&self, chaser: &str) -> Option<&ChaserArgs> {
        self.all_chaser_args.get(chaser)
    }

    /// A copy of this config exporting under a different model root.
    pub fn with_model_root_override(&self, path: ScenePath) -> Self {
        Self {
            model_root_override_path: path,
            ..self.clone()
        }
    }

    /// Exclude `name` and every subtype of it from the export.
    ///
    /// Returns how many type ids were newly excluded. An unresolvable name
    /// excludes nothing.
    pub fn add_filtered_type_name<H>(
        &mut self,
        name: &str,
        hierarchy: &H,
    ) -> std::result::Result<usize, Diagnostic>
    where
        H: TypeHierarchy + ?Sized,
    {
        self.filtered_type_ids
            .add_type_name(name, hierarchy)
            .inspect_err(|diagnostic| tracing::warn!(job = "export", "{}", diagnostic))
    }

    pub fn filtered_type_ids(&self) -> &BTreeSet<TypeId> {
        self.filtered_type_ids.ids()
    }

    pub fn is_type_filtered(&self, id: TypeId) -> bool {
        self.filtered_type_ids.contains(id)
    }

    pub fn clear_filtered_type_ids(&mut self) {
        self.filtered_type_ids.clear();
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::field(f, "compatibility", self.compatibility)?;
        render::field(f, "defaultMeshScheme", self.default_mesh_scheme)?;
        render::field(f, "defaultUSDFormat", self.default_usd_format)?;
        render::field(f, "eulerFilter", self.euler_filter)?;
        render::field(f, "excludeInvisible", self.exclude_invisible)?;
        render::field(
            f,
            "exportCollectionBasedBindings",
            self.export_collection_based_bindings,
        )?;
        render::field(f, "exportColorSets", self.export_color_sets)?;
        render::field(f, "exportDefaultCameras", self.export_default_cameras)?;
        render::field(f, "exportDisplayColor", self.export_display_color)?;
        render::field(f, "exportInstances", self.export_instances)?;
        render::field(f, "exportMaterialCollections", self.export_material_collections)?;
        render::field(f, "exportMeshUVs", self.export_mesh_uvs)?;
        render::field(f, "exportNurbsExplicitUV", self.export_nurbs_explicit_uv)?;
        render::field(f, "exportReferenceObjects", self.export_reference_objects)?;
        render::field(f, "exportRefsAsInstanceable", self.export_refs_as_instanceable)?;
        render::field(f, "exportSkels", self.export_skels)?;
        render::field(f, "exportSkin", self.export_skin)?;
        render::field(f, "exportVisibility", self.export_visibility)?;
        render::field(f, "materialCollectionsPath", &self.material_collections_path)?;
        render::field(f, "materialsScopeName", &self.materials_scope_name)?;
        render::field(f, "mergeTransformAndShape", self.merge_transform_and_shape)?;
        render::field(f, "normalizeNurbs", self.normalize_nurbs)?;
        render::field(f, "parentScope", &self.parent_scope)?;
        render::field(f, "renderLayerMode", self.render_layer_mode)?;
        render::field(f, "rootKind", &self.root_kind)?;
        render::field(f, "shadingMode", self.shading_mode)?;
        render::field(f, "stripNamespaces", self.strip_namespaces)?;
        render::field(f, "verbose", self.verbose)?;
        render::items(f, "chaserNames", &self.chaser_names)?;

        writeln!(f, "chaserArgs ({})", self.all_chaser_args.len())?;
        for (chaser, args) in &self.all_chaser_args {
            writeln!(f, "{}{} ({})", INDENT, chaser, args.len())?;
            for (name, value) in args {
                writeln!(f, "{0}{0}{1}: {2}", INDENT, name, value)?;
            }
        }

        render::field(f, "melPerFrameCallback", &self.mel_per_frame_callback)?;
        render::field(f, "melPostCallback", &self.mel_post_callback)?;
        render::field(f, "pythonPerFrameCallback", &self.python_per_frame_callback)?;
        render::field(f, "pythonPostCallback", &self.python_post_callback)?;
        render::items(f, "dagPaths", &self.dag_paths)?;
        render::field(f, "timeSamples", Samples(&self.time_samples))?;
        render::field(f, "modelRootOverridePath", &self.model_root_override_path)?;
        render::items(f, "filteredTypeIds", self.filtered_type_ids.ids())
    }
}

/// Builds [`ExportConfig`]s from user option dictionaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportConfigResolver;

impl ExportConfigResolver {
    /// Every recognized export option at its default value.
    pub fn default_dictionary() -> &'static Dictionary {
        export_vocabulary().defaults()
    }

    /// Resolve `user` against the export defaults.
    ///
    /// Never fails. Each problem with the input is reported as a
    /// diagnostic and leaves the affected field at its default.
    pub fn resolve(
        user: &Dictionary,
        dag_paths: impl IntoIterator<Item = DagPath>,
        time_samples: &[f64],
    ) -> Resolved<ExportConfig> {
        let mut sink = DiagnosticSink::new("export");
        let merged = MergedOptions::overlay(export_vocabulary(), user, &mut sink);

        let chaser_names = merged.string_list(key::CHASER).to_vec();
        let all_chaser_args = resolve_chaser_args(&merged, &chaser_names, &mut sink);
        check_time_samples(time_samples, &mut sink);

        let export_uvs = merged.bool(key::EXPORT_UVS);
        let config = ExportConfig {
            compatibility: merged.token(key::COMPATIBILITY),
            default_mesh_scheme: merged.token(key::DEFAULT_MESH_SCHEME),
            default_usd_format: merged.token(key::DEFAULT_USD_FORMAT),
            euler_filter: merged.bool(key::EULER_FILTER),
            exclude_invisible: merged.bool(key::RENDERABLE_ONLY),
            export_collection_based_bindings: merged.bool(key::EXPORT_COLLECTION_BASED_BINDINGS),
            export_color_sets: merged.bool(key::EXPORT_COLOR_SETS),
            export_default_cameras: merged.bool(key::DEFAULT_CAMERAS),
            export_display_color: merged.bool(key::EXPORT_DISPLAY_COLOR),
            export_instances: merged.bool(key::EXPORT_INSTANCES),
            export_material_collections: merged.bool(key::EXPORT_MATERIAL_COLLECTIONS),
            export_mesh_uvs: export_uvs,
            export_nurbs_explicit_uv: export_uvs,
            export_reference_objects: merged.bool(key::EXPORT_REFERENCE_OBJECTS),
            export_refs_as_instanceable: merged.bool(key::EXPORT_REFS_AS_INSTANCEABLE),
            export_skels: merged.token(key::EXPORT_SKELS),
            export_skin: merged.token(key::EXPORT_SKIN),
            export_visibility: merged.bool(key::EXPORT_VISIBILITY),
            material_collections_path: resolve_path(
                &merged,
                key::MATERIAL_COLLECTIONS_PATH,
                &mut sink,
            ),
            materials_scope_name: merged.string(key::MATERIALS_SCOPE_NAME).to_string(),
            merge_transform_and_shape: merged.bool(key::MERGE_TRANSFORM_AND_SHAPE),
            normalize_nurbs: merged.bool(key::NORMALIZE_NURBS),
            parent_scope: resolve_path(&merged, key::PARENT_SCOPE, &mut sink),
            render_layer_mode: merged.token(key::RENDER_LAYER_MODE),
            root_kind: merged.string(key::KIND).to_string(),
            shading_mode: merged.token(key::SHADING_MODE),
            strip_namespaces: merged.bool(key::STRIP_NAMESPACES),
            verbose: merged.bool(key::VERBOSE),
            chaser_names,
            all_chaser_args,
            mel_per_frame_callback: merged.string(key::MEL_PER_FRAME_CALLBACK).to_string(),
            mel_post_callback: merged.string(key::MEL_POST_CALLBACK).to_string(),
            python_per_frame_callback: merged.string(key::PYTHON_PER_FRAME_CALLBACK).to_string(),
            python_post_callback: merged.string(key::PYTHON_POST_CALLBACK).to_string(),
            dag_paths: dag_paths.into_iter().collect(),
            time_samples: time_samples.to_vec(),
            model_root_override_path: ScenePath::empty(),
            filtered_type_ids: TypeFilter::new(),
        };

        sink.finish(config)
    }

    /// Parse a JSON object and resolve it.
    ///
    /// Only a malformed document is an error; problems with individual
    /// options are diagnostics, as with [`resolve`](Self::resolve).
    pub fn resolve_json(
        json: &str,
        dag_paths: impl IntoIterator<Item = DagPath>,
        time_samples: &[f64],
    ) -> Result<Resolved<ExportConfig>> {
        let user = parse_json_dictionary(json)?;
        Ok(Self::resolve(&user, dag_paths, time_samples))
    }
}

/// Build the per-chaser argument maps.
///
/// Argument maps for chasers that are not declared are kept. Declared
/// chasers without arguments get an empty map.
fn resolve_chaser_args(
    merged: &MergedOptions,
    chaser_names: &[String],
    sink: &mut DiagnosticSink,
) -> BTreeMap<String, ChaserArgs> {
    let mut all_args = BTreeMap::new();

    for (chaser, args) in merged.dictionary(key::CHASER_ARGS).into_iter().flatten() {
        let Some(args) = args.as_dictionary() else {
            sink.report(Diagnostic::TypeMismatch {
                key: format!("{}.{}", key::CHASER_ARGS, chaser),
                expected: ValueKind::Dictionary,
                found: args.kind(),
            });
            continue;
        };

        let mut parsed = ChaserArgs::new();
        for (name, value) in args {
            match value.as_str() {
                Some(value) => {
                    parsed.insert(name.clone(), value.to_string());
                }
                None => sink.report(Diagnostic::TypeMismatch {
                    key: format!("{}.{}.{}", key::CHASER_ARGS, chaser, name),
                    expected: ValueKind::String,
                    found: value.kind(),
                }),
            }
        }
        all_args.insert(chaser.clone(), parsed);
    }

    for chaser in chaser_names {
        all_args.entry(chaser.clone()).or_default();
    }
    all_args
}

/// Parse a path option and anchor it at the root.
fn resolve_path(merged: &MergedOptions, key: &str, sink: &mut DiagnosticSink) -> ScenePath {
    match ScenePath::parse(merged.string(key)) {
        Ok(path) => path.make_absolute(),
        Err(err) => {
            sink.report(Diagnostic::InvalidPath {
                key: key.to_string(),
                path: err.path,
            });
            ScenePath::empty()
        }
    }
}

/// Report the first sample that is smaller than one before it.
///
/// NaN samples are skipped, so they cannot hide a decrease around them.
fn check_time_samples(samples: &[f64], sink: &mut DiagnosticSink) {
    let mut highest = f64::NEG_INFINITY;
    for (index, &value) in samples.iter().enumerate() {
        if value < highest {
            sink.report(Diagnostic::UnsortedTimeSamples { index, value });
            return;
        }
        highest = highest.max(value);
    }
}
