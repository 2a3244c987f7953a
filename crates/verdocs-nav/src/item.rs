//! Navigation tree model.
//!
//! The canonical outline is a tree of [`NavItem`]s. The leaf/group
//! distinction is explicit at the type level, so a node carrying both a
//! link and children is unrepresentable. A bare group header is a
//! [`NavItem::Group`] with no items.

use serde::Serialize;

/// Ordered sequence of top-level navigation items.
///
/// Order is display order and is preserved by every transformation.
pub type NavTree = Vec<NavItem>;

/// Navigation item: a link leaf or an interior group.
///
/// Serializes to the duck-typed shape the external renderer consumes:
/// `{text, link}` for leaves, `{text, collapsed?, items?}` for groups
/// (`collapsed` omitted when false, `items` omitted when empty).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Linked page entry.
    Leaf {
        /// Display text.
        text: String,
        /// Link target path, root-relative in the canonical outline.
        link: String,
    },
    /// Section grouping child items.
    Group {
        /// Display text.
        text: String,
        /// Whether the group renders collapsed initially.
        #[serde(skip_serializing_if = "is_false")]
        collapsed: bool,
        /// Child navigation items.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        items: Vec<NavItem>,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl NavItem {
    /// Create a leaf item.
    #[must_use]
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Leaf {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Create an expanded group with the given children.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self::Group {
            text: text.into(),
            collapsed: false,
            items,
        }
    }

    /// Create a collapsed group with the given children.
    #[must_use]
    pub fn collapsed_group(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self::Group {
            text: text.into(),
            collapsed: true,
            items,
        }
    }

    /// Display text of this item.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Leaf { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Link target, `None` for groups.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Child items, empty for leaves and bare headers.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { items, .. } => items,
        }
    }

    /// Total node count of this item's subtree, itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.items().iter().map(NavItem::node_count).sum::<usize>()
    }
}
