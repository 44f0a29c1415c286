//! Export option table

use super::{DefaultValue, OptionSchema, OptionSpec};
use crate::tokens::{
    Compatibility, MeshScheme, RenderLayerMode, ShadingMode, SkelExportMode, UsdFormat,
    export_keys as key,
};

const EXPORT_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new(key::CHASER, DefaultValue::StringList(&[])),
    // chaser name -> { argument name -> string value }
    OptionSpec::new(key::CHASER_ARGS, DefaultValue::Dictionary),
    OptionSpec::new(key::COMPATIBILITY, DefaultValue::String(Compatibility::None.as_str()))
        .with_domain(Compatibility::TOKENS),
    OptionSpec::new(key::DEFAULT_CAMERAS, DefaultValue::Bool(false)),
    OptionSpec::new(
        key::DEFAULT_MESH_SCHEME,
        DefaultValue::String(MeshScheme::CatmullClark.as_str()),
    )
    .with_domain(MeshScheme::TOKENS),
    OptionSpec::new(key::DEFAULT_USD_FORMAT, DefaultValue::String(UsdFormat::Usdc.as_str()))
        .with_domain(UsdFormat::TOKENS),
    OptionSpec::new(key::EULER_FILTER, DefaultValue::Bool(false)),
    OptionSpec::new(key::EXPORT_COLLECTION_BASED_BINDINGS, DefaultValue::Bool(false)),
    OptionSpec::new(key::EXPORT_COLOR_SETS, DefaultValue::Bool(true)),
    OptionSpec::new(key::EXPORT_DISPLAY_COLOR, DefaultValue::Bool(false)),
    OptionSpec::new(key::EXPORT_INSTANCES, DefaultValue::Bool(true)),
    OptionSpec::new(key::EXPORT_MATERIAL_COLLECTIONS, DefaultValue::Bool(false)),
    OptionSpec::new(key::EXPORT_REFERENCE_OBJECTS, DefaultValue::Bool(false)),
    OptionSpec::new(key::EXPORT_REFS_AS_INSTANCEABLE, DefaultValue::Bool(false)),
    OptionSpec::new(key::EXPORT_SKELS, DefaultValue::String(SkelExportMode::None.as_str()))
        .with_domain(SkelExportMode::TOKENS),
    OptionSpec::new(key::EXPORT_SKIN, DefaultValue::String(SkelExportMode::None.as_str()))
        .with_domain(SkelExportMode::TOKENS),
    OptionSpec::new(key::EXPORT_UVS, DefaultValue::Bool(true)),
    OptionSpec::new(key::EXPORT_VISIBILITY, DefaultValue::Bool(true)),
    OptionSpec::new(key::KIND, DefaultValue::String("")),
    OptionSpec::new(key::MATERIAL_COLLECTIONS_PATH, DefaultValue::String("")),
    OptionSpec::new(key::MATERIALS_SCOPE_NAME, DefaultValue::String("Looks")),
    OptionSpec::new(key::MEL_PER_FRAME_CALLBACK, DefaultValue::String("")),
    OptionSpec::new(key::MEL_POST_CALLBACK, DefaultValue::String("")),
    OptionSpec::new(key::MERGE_TRANSFORM_AND_SHAPE, DefaultValue::Bool(true)),
    OptionSpec::new(key::NORMALIZE_NURBS, DefaultValue::Bool(false)),
    OptionSpec::new(key::PARENT_SCOPE, DefaultValue::String("")),
    OptionSpec::new(key::PYTHON_PER_FRAME_CALLBACK, DefaultValue::String("")),
    OptionSpec::new(key::PYTHON_POST_CALLBACK, DefaultValue::String("")),
    OptionSpec::new(key::RENDERABLE_ONLY, DefaultValue::Bool(false)),
    OptionSpec::new(
        key::RENDER_LAYER_MODE,
        DefaultValue::String(RenderLayerMode::DefaultLayer.as_str()),
    )
    .with_domain(RenderLayerMode::TOKENS),
    OptionSpec::new(key::SHADING_MODE, DefaultValue::String(ShadingMode::DisplayColor.as_str()))
        .with_domain(ShadingMode::TOKENS),
    OptionSpec::new(key::STRIP_NAMESPACES, DefaultValue::Bool(false)),
    OptionSpec::new(key::VERBOSE, DefaultValue::Bool(false)),
];

/// Every option an export job recognizes.
pub static EXPORT_SCHEMA: OptionSchema = OptionSchema::new("export", EXPORT_OPTIONS);
