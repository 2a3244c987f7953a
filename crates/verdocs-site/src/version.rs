//! Version registry for documentation versions.
//!
//! A [`VersionRegistry`] is a fixed ordered set of [`VersionDescriptor`]s
//! with one designated default version. Descriptors are stored in a flat
//! `Vec` with a `HashMap` key index for O(1) lookups; registry order is
//! display order for the version-switcher UI.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use verdocs_nav::{PathPrefix, PrefixError};

/// One documentation version and its URL path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionDescriptor {
    /// Unique short key (e.g., "v3").
    pub key: String,
    /// Display label for the version-switcher UI (e.g., "3.x").
    pub label: String,
    /// URL path prefix all of this version's pages live under.
    pub prefix: PathPrefix,
}

impl VersionDescriptor {
    /// Create a descriptor, validating the path prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError`] if `prefix` is not a `/`-delimited
    /// root-relative segment.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Result<Self, PrefixError> {
        Ok(Self {
            key: key.into(),
            label: label.into(),
            prefix: PathPrefix::new(prefix)?,
        })
    }
}

/// Error constructing a [`VersionRegistry`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors share a key.
    #[error("duplicate version key: {0:?}")]
    DuplicateKey(String),

    /// Two descriptors share a path prefix.
    #[error("duplicate version path prefix: {0:?}")]
    DuplicatePrefix(String),

    /// The default key names no registered version.
    #[error("default version key {0:?} is not registered")]
    UnknownDefaultKey(String),

    /// No versions were registered.
    #[error("version registry must contain at least one version")]
    Empty,
}

/// Ordered registry of documentation versions.
///
/// Immutable after construction. Serializes as the ordered descriptor
/// list for the version-switcher UI.
#[derive(Clone, Debug)]
pub struct VersionRegistry {
    versions: Vec<VersionDescriptor>,
    key_index: HashMap<String, usize>,
    default_index: usize,
}

impl VersionRegistry {
    /// Build a registry from descriptors and the default version's key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the descriptor list is empty, two
    /// descriptors share a `key` or `prefix`, or `default_key` names no
    /// registered version. Duplicates are startup-fatal rather than
    /// silently overwriting a sidebar entry.
    pub fn new(
        versions: Vec<VersionDescriptor>,
        default_key: &str,
    ) -> Result<Self, RegistryError> {
        if versions.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut key_index = HashMap::new();
        let mut seen_prefixes = HashSet::new();
        for (i, version) in versions.iter().enumerate() {
            if key_index.insert(version.key.clone(), i).is_some() {
                return Err(RegistryError::DuplicateKey(version.key.clone()));
            }
            if !seen_prefixes.insert(version.prefix.as_str()) {
                return Err(RegistryError::DuplicatePrefix(
                    version.prefix.as_str().to_owned(),
                ));
            }
        }

        let default_index = *key_index
            .get(default_key)
            .ok_or_else(|| RegistryError::UnknownDefaultKey(default_key.to_owned()))?;

        Ok(Self {
            versions,
            key_index,
            default_index,
        })
    }

    /// Ordered iterator over all registered versions.
    pub fn iter(&self) -> impl Iterator<Item = &VersionDescriptor> {
        self.versions.iter()
    }

    /// Number of registered versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the registry is empty (never true after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Look up a version by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VersionDescriptor> {
        self.key_index.get(key).map(|&i| &self.versions[i])
    }

    /// The default version's descriptor.
    ///
    /// The site router maps the bare root path here, and search indexing
    /// is scoped to this version.
    #[must_use]
    pub fn default_version(&self) -> &VersionDescriptor {
        &self.versions[self.default_index]
    }

    /// The default version's path prefix.
    #[must_use]
    pub fn default_prefix(&self) -> &PathPrefix {
        &self.default_version().prefix
    }
}

impl Serialize for VersionRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.versions)
    }
}
