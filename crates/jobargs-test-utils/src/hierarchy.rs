//! Host-like type hierarchy fixture.

use jobargs_meta::TypeTree;

/// `(type, parent)` pairs in registration order. Parents always come first.
pub const SCENE_TYPES: &[(&str, Option<&str>)] = &[
    ("dagNode", None),
    ("transform", Some("dagNode")),
    ("joint", Some("transform")),
    ("constraint", Some("transform")),
    ("parentConstraint", Some("constraint")),
    ("pointConstraint", Some("constraint")),
    ("orientConstraint", Some("constraint")),
    ("aimConstraint", Some("constraint")),
    ("shape", Some("dagNode")),
    ("surfaceShape", Some("shape")),
    ("mesh", Some("surfaceShape")),
    ("nurbsSurface", Some("surfaceShape")),
    ("nurbsCurve", Some("shape")),
    ("camera", Some("shape")),
];

/// Concrete constraint types, all derived from `constraint`.
pub const CONSTRAINT_TYPES: &[&str] = &[
    "parentConstraint",
    "pointConstraint",
    "orientConstraint",
    "aimConstraint",
];

/// Build a [`TypeTree`] holding every entry of [`SCENE_TYPES`].
///
/// # Example
///
/// ```
/// use jobargs_meta::TypeHierarchy;
/// use jobargs_test_utils::hierarchy::scene_type_tree;
///
/// let tree = scene_type_tree();
/// let constraint = tree.resolve("constraint").unwrap();
/// let parent = tree.resolve("parentConstraint").unwrap();
/// assert!(tree.subtypes_of(constraint).contains(&parent));
/// ```
pub fn scene_type_tree() -> TypeTree {
    let mut tree = TypeTree::new();
    for (name, parent) in SCENE_TYPES {
        tree.register(name, *parent);
    }
    tree
}

/// Every type name in [`SCENE_TYPES`].
pub fn scene_type_names() -> Vec<&'static str> {
    SCENE_TYPES.iter().map(|(name, _)| *name).collect()
}
