//! Scenario tests
//!
//! Each test walks one documented behavior of the resolvers from a raw
//! option dictionary to the resolved record, the way a job would.

use jobargs_core::{ExportConfigResolver, ImportConfigResolver, MaterialBinding, TimeInterval};
use jobargs_meta::{
    Diagnostic, Dictionary, RenderLayerMode, ShadingMode, TypeHierarchy, TypeTree, Value,
    dictionary,
};
use jobargs_test_utils::hierarchy::scene_type_tree;
use pretty_assertions::assert_eq;
use rstest::rstest;

// =============================================================================
// Dictionary overlay
// =============================================================================

#[test]
fn scenario_user_overrides_with_everything_else_default() {
    let user = dictionary([
        ("shadingMode", Value::from("none")),
        ("exportUVs", Value::from(false)),
    ]);
    let resolved = ExportConfigResolver::resolve(&user, [], &[]);

    assert!(resolved.is_clean());
    let config = resolved.config;
    assert_eq!(config.shading_mode, ShadingMode::None);
    assert!(!config.export_mesh_uvs);

    let defaults = ExportConfigResolver::resolve(&Dictionary::new(), [], &[]).config;
    let mut expected = defaults.clone();
    expected.shading_mode = ShadingMode::None;
    expected.export_mesh_uvs = false;
    expected.export_nurbs_explicit_uv = false;
    assert_eq!(config, expected);
    assert_ne!(config, defaults);
}

#[test]
fn scenario_bogus_token_degrades_to_default() {
    let resolved =
        ExportConfigResolver::resolve(&dictionary([("renderLayerMode", "bogusValue")]), [], &[]);

    assert_eq!(resolved.config.render_layer_mode, RenderLayerMode::DefaultLayer);
    assert_eq!(
        resolved.diagnostics,
        vec![Diagnostic::UnrecognizedEnumValue {
            key: "renderLayerMode".into(),
            value: "bogusValue".into(),
            allowed: "'defaultLayer', 'currentLayer', 'modelingVariant'".into(),
        }]
    );
}

#[test]
fn scenario_nested_chaser_args_merge_key_wise() {
    let user = dictionary([
        ("chaser", Value::from(vec!["alembic", "unity"])),
        (
            "chaserArgs",
            Value::Dictionary(dictionary([(
                "alembic",
                Value::Dictionary(dictionary([("attrprefix", "ABC_"), ("primvarprefix", "P_")])),
            )])),
        ),
    ]);
    let config = ExportConfigResolver::resolve(&user, [], &[]).into_config();

    assert_eq!(config.chaser_names, ["alembic", "unity"]);
    let alembic = config.chaser_args("alembic").unwrap();
    assert_eq!(alembic.len(), 2);
    assert_eq!(alembic["primvarprefix"], "P_");
    assert!(config.chaser_args("unity").unwrap().is_empty());
}

// =============================================================================
// Type filtering
// =============================================================================

#[test]
fn scenario_constraint_filter_includes_parent_constraint() {
    let tree = scene_type_tree();
    let mut config = ExportConfigResolver::resolve(&Dictionary::new(), [], &[]).into_config();

    config.add_filtered_type_name("constraint", &tree).unwrap();

    let parent_constraint = tree.resolve("parentConstraint").unwrap();
    assert!(config.filtered_type_ids().contains(&parent_constraint));
}

#[test]
fn scenario_unresolvable_filter_name_is_a_no_op() {
    let tree = TypeTree::new();
    let mut config = ExportConfigResolver::resolve(&Dictionary::new(), [], &[]).into_config();

    let err = config.add_filtered_type_name("constraint", &tree).unwrap_err();
    assert_eq!(err.to_string(), "Unable to resolve type name 'constraint'");
    assert!(config.filtered_type_ids().is_empty());
}

#[test]
fn scenario_filter_is_cleared_and_rebuilt() {
    let tree = scene_type_tree();
    let mut config = ExportConfigResolver::resolve(&Dictionary::new(), [], &[]).into_config();

    config.add_filtered_type_name("shape", &tree).unwrap();
    let shapes = config.filtered_type_ids().len();
    config.clear_filtered_type_ids();
    config.add_filtered_type_name("joint", &tree).unwrap();

    assert_eq!(shapes, 6);
    assert_eq!(config.filtered_type_ids().len(), 1);
}

// =============================================================================
// Material binding
// =============================================================================

#[rstest]
#[case(true, "Looks", MaterialBinding::Collection)]
#[case(true, "", MaterialBinding::Direct)]
#[case(false, "Looks", MaterialBinding::Direct)]
fn scenario_material_binding_mode(
    #[case] collection_bindings: bool,
    #[case] collections_path: &str,
    #[case] expected: MaterialBinding,
) {
    let user = dictionary([
        ("exportCollectionBasedBindings", Value::from(collection_bindings)),
        ("materialCollectionsPath", Value::from(collections_path)),
    ]);
    let config = ExportConfigResolver::resolve(&user, [], &[]).into_config();

    assert_eq!(config.material_binding(), expected);
}

// =============================================================================
// Import time interval
// =============================================================================

#[rstest]
#[case(None, true)]
#[case(Some(TimeInterval::full()), true)]
#[case(Some(TimeInterval::closed(1.0, 10.0)), true)]
#[case(Some(TimeInterval::empty()), false)]
fn scenario_import_animation_follows_interval(
    #[case] interval: Option<TimeInterval>,
    #[case] imports_animation: bool,
) {
    let config = ImportConfigResolver::resolve(&Dictionary::new(), false, interval).into_config();
    assert_eq!(config.imports_animation(), imports_animation);
}

#[test]
fn scenario_omitted_interval_is_full_not_empty() {
    let config = ImportConfigResolver::resolve(&Dictionary::new(), false, None).into_config();

    assert!(config.time_interval().is_full());
    assert!(!config.time_interval().is_empty());
}
