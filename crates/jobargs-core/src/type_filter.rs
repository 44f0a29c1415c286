//! Excluded scene types, expanded across the type hierarchy

use std::collections::BTreeSet;

use jobargs_meta::{Diagnostic, TypeHierarchy, TypeId};
use serde::Serialize;

/// Accumulated set of type ids excluded from an export.
///
/// Adding a type name adds the type itself and every registered subtype,
/// so a filter on a base category also suppresses its concrete types.
/// The set only grows until it is explicitly cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeFilter {
    ids: BTreeSet<TypeId>,
}

impl TypeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` through `hierarchy` and add it with all its subtypes.
    ///
    /// Returns how many ids were newly added. An unresolvable name adds
    /// nothing and is returned as a diagnostic.
    pub fn add_type_name<H>(&mut self, name: &str, hierarchy: &H) -> Result<usize, Diagnostic>
    where
        H: TypeHierarchy + ?Sized,
    {
        let Some(id) = hierarchy.resolve(name) else {
            return Err(Diagnostic::UnresolvableTypeName {
                name: name.to_string(),
            });
        };

        let before = self.ids.len();
        self.ids.insert(id);
        self.ids.extend(hierarchy.subtypes_of(id));
        let added = self.ids.len() - before;

        tracing::trace!(type_name = name, %id, added, "Expanded type filter");
        Ok(added)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &BTreeSet<TypeId> {
        &self.ids
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.ids.iter().copied()
    }
}
