//! Tests for the export and import option schemas

use jobargs_meta::tokens::{export_keys, import_keys};
use jobargs_meta::{
    AssemblyRep, Compatibility, DefaultValue, EXPORT_SCHEMA, IMPORT_SCHEMA, MeshScheme,
    OptionSchema, RenderLayerMode, ShadingConversion, ShadingMode, SkelExportMode, UsdFormat,
    Value, ValueKind,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod export_schema {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recognized_keys() {
        let keys: Vec<_> = EXPORT_SCHEMA.keys().collect();
        assert_eq!(
            keys,
            vec![
                "chaser",
                "chaserArgs",
                "compatibility",
                "defaultCameras",
                "defaultMeshScheme",
                "defaultUSDFormat",
                "eulerFilter",
                "exportCollectionBasedBindings",
                "exportColorSets",
                "exportDisplayColor",
                "exportInstances",
                "exportMaterialCollections",
                "exportReferenceObjects",
                "exportRefsAsInstanceable",
                "exportSkels",
                "exportSkin",
                "exportUVs",
                "exportVisibility",
                "kind",
                "materialCollectionsPath",
                "materialsScopeName",
                "melPerFrameCallback",
                "melPostCallback",
                "mergeTransformAndShape",
                "normalizeNurbs",
                "parentScope",
                "pythonPerFrameCallback",
                "pythonPostCallback",
                "renderableOnly",
                "renderLayerMode",
                "shadingMode",
                "stripNamespaces",
                "verbose",
            ]
        );
    }

    #[rstest]
    #[case(export_keys::SHADING_MODE, Value::from("displayColor"))]
    #[case(export_keys::EXPORT_UVS, Value::from(true))]
    #[case(export_keys::MERGE_TRANSFORM_AND_SHAPE, Value::from(true))]
    #[case(export_keys::MATERIALS_SCOPE_NAME, Value::from("Looks"))]
    #[case(export_keys::RENDER_LAYER_MODE, Value::from("defaultLayer"))]
    #[case(export_keys::DEFAULT_MESH_SCHEME, Value::from("catmullClark"))]
    #[case(export_keys::DEFAULT_USD_FORMAT, Value::from("usdc"))]
    #[case(export_keys::EXPORT_SKIN, Value::from("none"))]
    #[case(export_keys::CHASER, Value::StringList(vec![]))]
    fn test_defaults(#[case] key: &str, #[case] expected: Value) {
        assert_eq!(EXPORT_SCHEMA.default_dictionary()[key], expected);
    }

    #[rstest]
    #[case(export_keys::COMPATIBILITY, Compatibility::TOKENS)]
    #[case(export_keys::DEFAULT_MESH_SCHEME, MeshScheme::TOKENS)]
    #[case(export_keys::DEFAULT_USD_FORMAT, UsdFormat::TOKENS)]
    #[case(export_keys::EXPORT_SKELS, SkelExportMode::TOKENS)]
    #[case(export_keys::EXPORT_SKIN, SkelExportMode::TOKENS)]
    #[case(export_keys::RENDER_LAYER_MODE, RenderLayerMode::TOKENS)]
    #[case(export_keys::SHADING_MODE, ShadingMode::TOKENS)]
    fn test_domains_come_from_typed_tokens(#[case] key: &str, #[case] tokens: &[&str]) {
        assert_eq!(EXPORT_SCHEMA.get(key).unwrap().domain, Some(tokens));
    }

    #[test]
    fn test_chaser_args_is_a_dictionary() {
        let spec = EXPORT_SCHEMA.get(export_keys::CHASER_ARGS).unwrap();
        assert_eq!(spec.kind(), ValueKind::Dictionary);
        assert_eq!(spec.default, DefaultValue::Dictionary);
    }
}

mod import_schema {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recognized_keys() {
        let keys: Vec<_> = IMPORT_SCHEMA.keys().collect();
        assert_eq!(
            keys,
            vec![
                "apiSchema",
                "assemblyRep",
                "excludePrimvar",
                "metadata",
                "shadingMode",
                "shadingConversion",
                "useAsAnimationCache",
            ]
        );
    }

    #[test]
    fn test_metadata_default() {
        assert_eq!(
            IMPORT_SCHEMA.default_dictionary()[import_keys::METADATA],
            Value::from(vec!["hidden", "instanceable", "kind"])
        );
    }

    #[test]
    fn test_assembly_rep_domain_includes_unloaded() {
        let spec = IMPORT_SCHEMA.get(import_keys::ASSEMBLY_REP).unwrap();
        assert_eq!(spec.domain, Some(AssemblyRep::TOKENS));
        assert!(spec.allows(""));
        assert_eq!(spec.default, DefaultValue::String("Collapsed"));
    }

    #[test]
    fn test_shading_conversion_domain() {
        let spec = IMPORT_SCHEMA.get(import_keys::SHADING_CONVERSION).unwrap();
        assert_eq!(spec.domain, Some(ShadingConversion::TOKENS));
    }
}

#[rstest]
#[case(&EXPORT_SCHEMA)]
#[case(&IMPORT_SCHEMA)]
fn test_every_default_is_inside_its_domain(#[case] schema: &OptionSchema) {
    for spec in schema.iter() {
        if let DefaultValue::String(default) = spec.default {
            assert!(
                spec.allows(default),
                "{} default '{}' is outside its domain",
                spec.key,
                default
            );
        }
        if spec.domain.is_some() {
            assert_eq!(spec.kind(), ValueKind::String, "{} has a domain", spec.key);
        }
    }
}

#[rstest]
#[case(&EXPORT_SCHEMA)]
#[case(&IMPORT_SCHEMA)]
fn test_keys_are_unique(#[case] schema: &OptionSchema) {
    let mut keys: Vec<_> = schema.keys().collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), schema.len());
}
