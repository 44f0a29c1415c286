//! Option presets and job inputs used across test suites.
//!
//! Presets live as files under `test-fixtures/presets/` at the workspace
//! root, next to the renderings they are expected to produce under
//! `test-fixtures/expected/`.

use std::fs;
use std::path::PathBuf;

use jobargs_meta::{DagPath, Dictionary, Value, dictionary};

/// Path to the test-fixtures directory (relative to the workspace root).
pub fn fixtures_dir() -> PathBuf {
    // crates/jobargs-test-utils -> ../../test-fixtures
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

/// Read a preset document from `test-fixtures/presets/`.
///
/// Panics if the fixture is missing.
pub fn read_preset(name: &str) -> String {
    let path = fixtures_dir().join("presets").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read preset at {}: {}", path.display(), e))
}

/// Read an expected rendering from `test-fixtures/expected/`, with LF line
/// endings.
pub fn read_expected(name: &str) -> String {
    let path = fixtures_dir().join("expected").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read expected output at {}: {}", path.display(), e))
        .replace("\r\n", "\n")
}

/// One dictionary holding every kind of mistake a caller can make.
///
/// Resolving it against the export defaults raises exactly four
/// diagnostics: one unknown key, one type mismatch, one bad token and one
/// invalid path. `presets/legacy_export.json` holds the same options.
pub fn faulty_export_options() -> Dictionary {
    dictionary([
        ("exportNormals", Value::from(true)),
        ("exportUVs", Value::from("yes")),
        ("compatibility", Value::from("hololens")),
        ("parentScope", Value::from("World/1Geo")),
        ("exportColorSets", Value::from(false)),
    ])
}

/// A typical export selection.
pub fn selected_dag_paths() -> Vec<DagPath> {
    ["|char|body", "|char|head", "|props|sword"]
        .into_iter()
        .map(DagPath::from)
        .collect()
}

/// Frames `start..=end` as time samples.
pub fn frame_range(start: i32, end: i32) -> Vec<f64> {
    (start..=end).map(f64::from).collect()
}
