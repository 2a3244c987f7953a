//! Versioned sidebar map.
//!
//! One prefixed copy of the canonical outline per registered version,
//! keyed by the version's path prefix. Entries are stored in registry
//! order in a flat `Vec` with a `HashMap` index for O(1) prefix lookups,
//! so serialized output order is deterministic.

use std::collections::HashMap;

use serde::Serialize;
use serde::ser::SerializeMap;

use verdocs_nav::{NavItem, NavTree, prefix_tree};

use crate::version::VersionRegistry;

/// Per-version navigation trees, keyed by version path prefix.
///
/// Built once at startup and immutable thereafter. Each entry is a deep
/// copy of the outline: no substructure is shared between versions, so
/// the external renderer may mutate one version's tree without affecting
/// another's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionedSidebar {
    entries: Vec<(String, NavTree)>,
    prefix_index: HashMap<String, usize>,
}

impl VersionedSidebar {
    /// Build the sidebar map: one [`prefix_tree`] pass per registered
    /// version, in registry order.
    ///
    /// The resulting map has exactly one entry per version. The outline
    /// is read-only and remains canonical (version-prefix free).
    #[must_use]
    pub fn build(outline: &[NavItem], registry: &VersionRegistry) -> Self {
        let entries: Vec<(String, NavTree)> = registry
            .iter()
            .map(|version| {
                (
                    version.prefix.as_str().to_owned(),
                    prefix_tree(outline, &version.prefix),
                )
            })
            .collect();

        let prefix_index = entries
            .iter()
            .enumerate()
            .map(|(i, (prefix, _))| (prefix.clone(), i))
            .collect();

        Self {
            entries,
            prefix_index,
        }
    }

    /// Get the navigation tree for a version path prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&NavTree> {
        self.prefix_index.get(prefix).map(|&i| &self.entries[i].1)
    }

    /// Iterate entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NavTree)> {
        self.entries.iter().map(|(prefix, tree)| (prefix.as_str(), tree))
    }

    /// Number of versions in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for VersionedSidebar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, tree) in &self.entries {
            map.serialize_entry(prefix, tree)?;
        }
        map.end()
    }
}
