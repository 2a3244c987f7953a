//! Navigation tree model and path prefixing for Verdocs.
//!
//! This crate provides:
//! - **Tree model**: [`NavItem`] as an explicit leaf/group variant
//! - **Path prefixing**: [`prefix_tree`] for replicating one canonical
//!   outline across documentation versions
//!
//! # Example
//!
//! ```
//! use verdocs_nav::{NavItem, PathPrefix, prefix_tree};
//!
//! let outline = vec![NavItem::leaf("Installation", "/installation")];
//! let prefix = PathPrefix::new("/v3/")?;
//!
//! let tree = prefix_tree(&outline, &prefix);
//! assert_eq!(tree[0].link(), Some("/v3/installation"));
//! # Ok::<(), verdocs_nav::PrefixError>(())
//! ```

mod item;
mod prefix;

pub use item::{NavItem, NavTree};
pub use prefix::{PathPrefix, PrefixError, prefix_tree};
