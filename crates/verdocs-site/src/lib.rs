//! Versioned sidebar building and search scoping for Verdocs.
//!
//! This crate provides:
//! - **Version registry**: ordered [`VersionDescriptor`]s with a
//!   designated default version
//! - **Sidebar building**: one prefixed navigation tree per version,
//!   assembled into a [`VersionedSidebar`]
//! - **Search scoping**: [`SearchScope`] restricting full-text indexing
//!   to the default version
//!
//! # Example
//!
//! ```
//! use verdocs_nav::NavItem;
//! use verdocs_site::{SiteNavigation, VersionDescriptor, VersionRegistry};
//!
//! let registry = VersionRegistry::new(
//!     vec![
//!         VersionDescriptor::new("v3", "3.x", "/v3/")?,
//!         VersionDescriptor::new("master", "Development", "/master/")?,
//!     ],
//!     "v3",
//! )?;
//! let outline = vec![NavItem::leaf("Installation", "/installation")];
//!
//! let nav = SiteNavigation::build(&outline, registry);
//! let tree = nav.sidebar.get("/v3/").unwrap();
//! assert_eq!(tree[0].link(), Some("/v3/installation"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod navigation;
mod search;
mod sidebar;
mod version;

pub use navigation::SiteNavigation;
pub use search::SearchScope;
pub use sidebar::VersionedSidebar;
pub use version::{RegistryError, VersionDescriptor, VersionRegistry};
