//! Host type hierarchy interface
//!
//! Filtering scene objects by type needs two answers from the host: what id
//! a type name resolves to, and which ids derive from a given id. The
//! [`TypeHierarchy`] trait captures exactly that. [`TypeTree`] is an
//! in-memory implementation for hosts that describe their types up front.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;

/// Opaque host type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-hierarchy oracle supplied by the host environment.
pub trait TypeHierarchy {
    /// Resolve a type name to its id.
    fn resolve(&self, name: &str) -> Option<TypeId>;

    /// All ids that derive from `id`, directly or transitively.
    ///
    /// Does not include `id` itself.
    fn subtypes_of(&self, id: TypeId) -> BTreeSet<TypeId>;
}

/// In-memory single-inheritance type registry.
///
/// ```
/// use jobargs_meta::{TypeHierarchy, TypeTree};
///
/// let mut tree = TypeTree::new();
/// let constraint = tree.register("constraint", None);
/// let parent = tree.register("parentConstraint", Some("constraint"));
///
/// assert_eq!(tree.resolve("constraint"), Some(constraint));
/// assert!(tree.subtypes_of(constraint).contains(&parent));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeTree {
    ids: HashMap<String, TypeId>,
    names: BTreeMap<TypeId, String>,
    children: BTreeMap<TypeId, Vec<TypeId>>,
}

impl TypeTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as a subtype of `parent` and return its id.
    ///
    /// Ids are assigned sequentially from 1. Registering a name twice
    /// returns the existing id and leaves its parent unchanged. An unknown
    /// parent registers the type as a root.
    pub fn register(&mut self, name: &str, parent: Option<&str>) -> TypeId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = TypeId(self.names.len() as u32 + 1);
        self.ids.insert(name.to_string(), id);
        self.names.insert(id, name.to_string());

        match parent.and_then(|p| self.ids.get(p).copied()) {
            Some(parent_id) => self.children.entry(parent_id).or_default().push(id),
            None => {
                if let Some(p) = parent {
                    tracing::debug!(
                        type_name = name,
                        parent = p,
                        "Unknown parent type; registering as root"
                    );
                }
            }
        }

        id
    }

    /// Name of a registered id.
    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TypeHierarchy for TypeTree {
    fn resolve(&self, name: &str) -> Option<TypeId> {
        self.ids.get(name).copied()
    }

    fn subtypes_of(&self, id: TypeId) -> BTreeSet<TypeId> {
        let mut found = BTreeSet::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            for child in self.children.get(&current).into_iter().flatten() {
                if found.insert(*child) {
                    pending.push(*child);
                }
            }
        }
        found
    }
}

impl<T: TypeHierarchy + ?Sized> TypeHierarchy for &T {
    fn resolve(&self, name: &str) -> Option<TypeId> {
        (**self).resolve(name)
    }

    fn subtypes_of(&self, id: TypeId) -> BTreeSet<TypeId> {
        (**self).subtypes_of(id)
    }
}
