//! Search scope filter.
//!
//! Hook invoked by the external search-indexing pipeline once per
//! document, before indexing. Only documents under the default version's
//! path prefix are indexed, so search results never straddle versions
//! and always reflect the default version.

use verdocs_nav::PathPrefix;

use crate::version::VersionRegistry;

/// Stateless per-document indexing filter scoped to the default version.
#[derive(Clone, Debug)]
pub struct SearchScope {
    default_prefix: PathPrefix,
}

impl SearchScope {
    /// Create a scope for the registry's default version.
    #[must_use]
    pub fn from_registry(registry: &VersionRegistry) -> Self {
        Self {
            default_prefix: registry.default_prefix().clone(),
        }
    }

    /// The path prefix documents must fall under to be indexed.
    #[must_use]
    pub fn default_prefix(&self) -> &PathPrefix {
        &self.default_prefix
    }

    /// Whether a document at `relative_path` should be indexed.
    ///
    /// True iff the path falls under the default version's prefix; the
    /// exact prefix itself matches. An empty path is malformed input and
    /// is excluded rather than treated as fatal — indexing is
    /// best-effort.
    #[must_use]
    pub fn should_index(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() {
            tracing::warn!("excluding document with empty path from search index");
            return false;
        }
        self.default_prefix.contains(relative_path)
    }

    /// Render a document for indexing, or exclude it.
    ///
    /// Returns the rendered content for documents under the default
    /// version, `None` for all others. The `render` callback is never
    /// invoked for excluded documents.
    pub fn index_content<F>(&self, relative_path: &str, raw_content: &str, render: F) -> Option<String>
    where
        F: FnOnce(&str) -> String,
    {
        if !self.should_index(relative_path) {
            tracing::debug!(path = %relative_path, "document outside default version, skipping index");
            return None;
        }
        Some(render(raw_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::version::VersionDescriptor;

    fn scope() -> SearchScope {
        let registry = VersionRegistry::new(
            vec![
                VersionDescriptor::new("v3", "3.x", "/v3/").unwrap(),
                VersionDescriptor::new("master", "Development", "/master/").unwrap(),
            ],
            "v3",
        )
        .unwrap();
        SearchScope::from_registry(&registry)
    }

    #[test]
    fn test_default_version_documents_indexed() {
        assert!(scope().should_index("/v3/installation.md"));
        assert!(scope().should_index("/v3/guide/configuration.md"));
    }

    #[test]
    fn test_other_version_documents_excluded() {
        assert!(!scope().should_index("/master/installation.md"));
        assert!(!scope().should_index("/v2/installation.md"));
    }

    #[test]
    fn test_exact_prefix_root_indexed() {
        assert!(scope().should_index("/v3/"));
    }

    #[test]
    fn test_empty_path_excluded_not_fatal() {
        assert!(!scope().should_index(""));
    }

    #[test]
    fn test_path_without_leading_slash_normalized() {
        assert!(scope().should_index("v3/installation.md"));
        assert!(!scope().should_index("master/installation.md"));
    }

    #[test]
    fn test_index_content_renders_included_documents() {
        let rendered = scope().index_content("/v3/installation.md", "# Install", |raw| {
            format!("<h1>{}</h1>", raw.trim_start_matches("# "))
        });

        assert_eq!(rendered, Some("<h1>Install</h1>".to_owned()));
    }

    #[test]
    fn test_index_content_never_renders_excluded_documents() {
        let mut rendered_calls = 0;

        let result = scope().index_content("/master/installation.md", "# Install", |raw| {
            rendered_calls += 1;
            raw.to_owned()
        });

        assert_eq!(result, None);
        assert_eq!(rendered_calls, 0);
    }

    #[test]
    fn test_no_ordering_dependency_between_calls() {
        let scope = scope();

        assert!(!scope.should_index("/master/a.md"));
        assert!(scope.should_index("/v3/a.md"));
        assert!(!scope.should_index("/master/a.md"));
    }
}
