//! Assembled site navigation.
//!
//! The single configuration object handed to the external site renderer
//! at startup: the per-version sidebar map, the version registry for the
//! version-switcher UI, and the default version's prefix for root-path
//! routing and search scoping.

use serde::Serialize;

use verdocs_nav::NavItem;

use crate::search::SearchScope;
use crate::sidebar::VersionedSidebar;
use crate::version::VersionRegistry;

/// Site navigation configuration for the external renderer.
///
/// Built once at startup and immutable thereafter; rebuilt only on a
/// full config reload.
#[derive(Clone, Debug, Serialize)]
pub struct SiteNavigation {
    /// Per-version navigation trees keyed by version path prefix.
    pub sidebar: VersionedSidebar,
    /// Registered versions, in display order.
    pub versions: VersionRegistry,
    /// The default version's path prefix. The site router maps the bare
    /// root path here.
    pub default_prefix: String,
}

impl SiteNavigation {
    /// Build the navigation configuration from the canonical outline and
    /// a version registry.
    #[must_use]
    pub fn build(outline: &[NavItem], versions: VersionRegistry) -> Self {
        let sidebar = VersionedSidebar::build(outline, &versions);
        let default_prefix = versions.default_prefix().as_str().to_owned();
        Self {
            sidebar,
            versions,
            default_prefix,
        }
    }

    /// Search filter scoped to the default version.
    #[must_use]
    pub fn search_scope(&self) -> SearchScope {
        SearchScope::from_registry(&self.versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::version::VersionDescriptor;

    fn registry() -> VersionRegistry {
        VersionRegistry::new(
            vec![
                VersionDescriptor::new("v3", "3.x", "/v3/").unwrap(),
                VersionDescriptor::new("master", "Development", "/master/").unwrap(),
            ],
            "v3",
        )
        .unwrap()
    }

    #[test]
    fn test_build_assembles_all_outputs() {
        let outline = vec![NavItem::leaf("Installation", "/installation")];

        let nav = SiteNavigation::build(&outline, registry());

        assert_eq!(nav.default_prefix, "/v3/");
        assert_eq!(nav.versions.len(), 2);
        assert_eq!(
            nav.sidebar.get("/v3/").unwrap()[0].link(),
            Some("/v3/installation")
        );
        assert_eq!(
            nav.sidebar.get("/master/").unwrap()[0].link(),
            Some("/master/installation")
        );
    }

    #[test]
    fn test_search_scope_uses_default_version() {
        let nav = SiteNavigation::build(&[], registry());

        let scope = nav.search_scope();

        assert!(scope.should_index("/v3/guide.md"));
        assert!(!scope.should_index("/master/guide.md"));
    }

    #[test]
    fn test_serialization_shape_for_renderer() {
        let outline = vec![NavItem::leaf("Installation", "/installation")];

        let nav = SiteNavigation::build(&outline, registry());
        let json = serde_json::to_value(&nav).unwrap();

        assert_eq!(json["default_prefix"], "/v3/");
        assert_eq!(json["versions"][0]["key"], "v3");
        assert_eq!(json["versions"][1]["label"], "Development");
        assert_eq!(json["sidebar"]["/v3/"][0]["link"], "/v3/installation");
    }
}
