//! End-to-end flows across jobargs-meta and jobargs-core.

use std::sync::Arc;
use std::thread;

use jobargs_core::{
    ExportConfig, ExportConfigResolver, ImportConfigResolver, MaterialBinding, TimeInterval,
};
use jobargs_meta::{
    EXPORT_SCHEMA, IMPORT_SCHEMA, ScenePath, ShadingMode, TokenRegistry, TypeHierarchy,
    parse_toml_dictionary,
};
use jobargs_test_utils::hierarchy::scene_type_tree;
use jobargs_test_utils::options::{frame_range, read_preset, selected_dag_paths};
use pretty_assertions::assert_eq;

#[test]
fn test_full_vertical_slice() {
    // 1. Load a preset from disk
    let user = parse_toml_dictionary(&read_preset("game_export.toml")).unwrap();

    // 2. Resolve it for a selection and a frame range
    let samples = frame_range(1001, 1024);
    let resolved = ExportConfigResolver::resolve(&user, selected_dag_paths(), &samples);
    assert!(resolved.is_clean(), "{:?}", resolved.diagnostics);
    let mut config = resolved.into_config();

    // 3. Exclude constraints and cameras
    let tree = scene_type_tree();
    config.add_filtered_type_name("constraint", &tree).unwrap();
    config.add_filtered_type_name("camera", &tree).unwrap();
    assert!(config.is_type_filtered(tree.resolve("aimConstraint").unwrap()));
    assert!(config.is_type_filtered(tree.resolve("camera").unwrap()));
    assert!(!config.is_type_filtered(tree.resolve("mesh").unwrap()));

    // 4. Derive one variant per model root; the base config is untouched
    let roots = ["/Hero", "/Villain"];
    let variants: Vec<ExportConfig> = roots
        .iter()
        .map(|root| config.with_model_root_override(ScenePath::parse(root).unwrap()))
        .collect();
    assert!(config.model_root_override_path().is_empty());
    for (variant, root) in variants.iter().zip(roots) {
        assert_eq!(variant.model_root_override_path().as_str(), root);
        assert_eq!(variant.filtered_type_ids(), config.filtered_type_ids());
    }

    // 5. Share the base config read-only with a pool of workers
    let shared = Arc::new(config);
    let frames_seen: usize = thread::scope(|scope| {
        let handles: Vec<_> = shared
            .time_samples()
            .chunks(6)
            .map(|chunk| {
                let config = Arc::clone(&shared);
                scope.spawn(move || {
                    assert!(config.exports_animation());
                    assert_eq!(config.material_binding(), MaterialBinding::Direct);
                    chunk.len()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });
    assert_eq!(frames_seen, 24);

    // 6. Render for the job log
    let rendered = shared.to_string();
    assert!(rendered.contains("chaserNames (1)\n    unity\n"));
    assert!(rendered.contains("timeSamples: [1001, 1002,"));
}

#[test]
fn test_import_variant_flow() {
    let base = ImportConfigResolver::resolve_json(
        &read_preset("review_import.json"),
        true,
        Some(TimeInterval::closed(1.0, 120.0)),
    )
    .unwrap()
    .into_config();

    let look_dev = base.with_shading_mode(ShadingMode::UseRegistry);

    assert_eq!(base.shading_mode(), ShadingMode::None);
    assert_eq!(look_dev.shading_mode(), ShadingMode::UseRegistry);
    assert_eq!(look_dev.time_interval(), base.time_interval());
    assert!(look_dev.imports_animation());
    assert!(look_dev.use_as_animation_cache);
}

#[test]
fn test_option_listing_matches_validation() {
    // UI tooling lists options from the default dictionaries; every listed
    // key must be one the resolvers accept, and vice versa.
    for (defaults, schema) in [
        (ExportConfigResolver::default_dictionary(), &EXPORT_SCHEMA),
        (ImportConfigResolver::default_dictionary(), &IMPORT_SCHEMA),
    ] {
        let registry = TokenRegistry::from_schema(schema);
        let listed: Vec<&str> = defaults.keys().map(String::as_str).collect();
        assert_eq!(listed, registry.keys());

        for key in registry.token_keys() {
            let default = defaults[key].as_str().unwrap();
            assert!(registry.is_recognized(key, default), "{key} default {default:?}");
        }
    }
}

#[test]
fn test_json_output_for_tooling() {
    let config = ExportConfigResolver::resolve_json(&read_preset("game_export.json"), [], &[])
        .unwrap()
        .into_config();
    let json = config.to_json();

    assert_eq!(json["shadingMode"], "useRegistry");
    assert_eq!(json["chaserNames"], serde_json::json!(["unity"]));
    assert_eq!(json["allChaserArgs"]["unity"]["lod"], "0");
    assert_eq!(json["parentScope"], "/Game");
}
