//! Integration tests for the token registry

use jobargs_meta::{Diagnostic, EXPORT_SCHEMA, IMPORT_SCHEMA, TokenRegistry};

#[test]
fn test_registry_knows_every_schema_key() {
    let registry = TokenRegistry::from_schema(&EXPORT_SCHEMA);
    for key in EXPORT_SCHEMA.keys() {
        assert!(registry.is_known_key(key), "missing {}", key);
    }
    assert_eq!(registry.len(), EXPORT_SCHEMA.len());
}

#[test]
fn test_registry_and_default_dictionary_agree() {
    for schema in [&EXPORT_SCHEMA, &IMPORT_SCHEMA] {
        let registry = TokenRegistry::from_schema(schema);
        let defaults = schema.default_dictionary();
        let default_keys: Vec<&str> = defaults.keys().map(String::as_str).collect();
        assert_eq!(registry.keys(), default_keys);
    }
}

#[test]
fn test_export_token_keys() {
    let registry = TokenRegistry::from_schema(&EXPORT_SCHEMA);
    assert_eq!(
        registry.token_keys(),
        vec![
            "compatibility",
            "defaultMeshScheme",
            "defaultUSDFormat",
            "exportSkels",
            "exportSkin",
            "renderLayerMode",
            "shadingMode",
        ]
    );
}

#[test]
fn test_validate_bogus_render_layer_mode() {
    let registry = TokenRegistry::from_schema(&EXPORT_SCHEMA);
    let diagnostic = registry
        .validate("renderLayerMode", "bogusValue")
        .unwrap_err();

    assert_eq!(
        diagnostic,
        Diagnostic::UnrecognizedEnumValue {
            key: "renderLayerMode".into(),
            value: "bogusValue".into(),
            allowed: "'defaultLayer', 'currentLayer', 'modelingVariant'".into(),
        }
    );
}

#[test]
fn test_shading_mode_none_sentinel() {
    for schema in [&EXPORT_SCHEMA, &IMPORT_SCHEMA] {
        let registry = TokenRegistry::from_schema(schema);
        assert!(registry.is_recognized("shadingMode", "none"));
    }
}
