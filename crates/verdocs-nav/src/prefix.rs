//! Path prefixing for versioned navigation trees.
//!
//! [`prefix_tree`] deep-copies a canonical outline and rewrites every leaf
//! link under a version's [`PathPrefix`]. The outline itself is shared
//! across all versions and is never mutated.

use serde::Serialize;

use crate::item::NavItem;

/// Error constructing a [`PathPrefix`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrefixError {
    /// Prefix was empty.
    #[error("path prefix must not be empty")]
    Empty,

    /// Prefix did not start with `/`.
    #[error("path prefix must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    /// Prefix did not end with `/`.
    #[error("path prefix must end with '/': {0:?}")]
    MissingTrailingSlash(String),

    /// Prefix contained an empty segment (adjacent slashes).
    #[error("path prefix must not contain empty segments: {0:?}")]
    EmptySegment(String),
}

/// Validated version path prefix.
///
/// A root-relative path segment with a leading and a trailing `/`,
/// e.g. `/v3/`. A prefix without the trailing separator is a caller
/// contract violation and is rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Validate and wrap a prefix string.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError`] if the string is empty, lacks a leading
    /// or trailing `/`, or contains an empty segment.
    pub fn new(prefix: impl Into<String>) -> Result<Self, PrefixError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(PrefixError::Empty);
        }
        if !prefix.starts_with('/') {
            return Err(PrefixError::MissingLeadingSlash(prefix));
        }
        if !prefix.ends_with('/') {
            return Err(PrefixError::MissingTrailingSlash(prefix));
        }
        // Adjacent slashes are an empty segment
        if prefix.contains("//") {
            return Err(PrefixError::EmptySegment(prefix));
        }
        Ok(Self(prefix))
    }

    /// The prefix as a string slice, including both separators.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a root-relative link under this prefix.
    ///
    /// The duplicate slash at the seam is collapsed, so `/v3/` joined
    /// with either `/installation` or `installation` yields
    /// `/v3/installation`.
    #[must_use]
    pub fn join(&self, link: &str) -> String {
        format!("{}/{}", self.0.trim_end_matches('/'), link.trim_start_matches('/'))
    }

    /// Whether a root-relative document path falls under this prefix.
    ///
    /// The exact prefix itself matches. Paths are normalized to a
    /// leading `/` before comparison.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        let normalized = format!("/{}", path.trim_start_matches('/'));
        normalized.starts_with(&self.0)
    }
}

impl std::fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clone a navigation tree, rewriting every leaf link under `prefix`.
///
/// The output is structurally identical to the input: node order,
/// nesting, `text`, and `collapsed` are preserved at every depth; only
/// leaf links change, each becoming the prefix joined with the original
/// link. The input is never mutated and shares no substructure with the
/// output.
#[must_use]
pub fn prefix_tree(tree: &[NavItem], prefix: &PathPrefix) -> Vec<NavItem> {
    tree.iter().map(|item| prefix_item(item, prefix)).collect()
}

/// Recursively clone one item under `prefix`.
fn prefix_item(item: &NavItem, prefix: &PathPrefix) -> NavItem {
    match item {
        NavItem::Leaf { text, link } => NavItem::Leaf {
            text: text.clone(),
            link: prefix.join(link),
        },
        NavItem::Group {
            text,
            collapsed,
            items,
        } => NavItem::Group {
            text: text.clone(),
            collapsed: *collapsed,
            items: prefix_tree(items, prefix),
        },
    }
}
