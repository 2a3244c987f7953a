//! Configuration management for Verdocs.
//!
//! Parses `verdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The raw TOML shape is duck-typed (a nav node may carry any of `link`,
//! `collapsed`, `items`); loading validates it into the explicit
//! [`NavItem`] leaf/group model and a [`VersionRegistry`], failing fast
//! on ambiguous nodes and duplicate versions. All configuration errors
//! are startup-fatal: a broken config prevents the site from building.
//!
//! ```toml
//! default_version = "v3"
//!
//! [[versions]]
//! key = "v3"
//! label = "3.x"
//! prefix = "/v3/"
//!
//! [[nav]]
//! text = "Guide"
//! items = [{ text = "Installation", link = "/installation" }]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use verdocs_nav::{NavItem, NavTree, PrefixError};
use verdocs_site::{RegistryError, SiteNavigation, VersionDescriptor, VersionRegistry};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "verdocs.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Nav node with both a link and children.
    #[error("nav item {text:?} has both a link and child items; use one or the other")]
    AmbiguousNavItem {
        /// Display text of the offending node.
        text: String,
    },

    /// Invalid version path prefix.
    #[error(transparent)]
    Prefix(#[from] PrefixError),

    /// Invalid version registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Raw navigation node as parsed from TOML (duck-typed shape).
#[derive(Debug, Clone, Deserialize)]
struct RawNavItem {
    text: String,
    link: Option<String>,
    collapsed: Option<bool>,
    items: Option<Vec<RawNavItem>>,
}

impl RawNavItem {
    /// Validate into the explicit leaf/group model.
    ///
    /// A node with both `link` and non-empty `items` is rejected as
    /// ambiguous. An empty `items` list is treated as absent, so a node
    /// with a link and `items = []` is a leaf, and a node with neither
    /// is a bare group header.
    fn resolve(self) -> Result<NavItem, ConfigError> {
        let items = self.items.unwrap_or_default();
        match self.link {
            Some(_) if !items.is_empty() => {
                Err(ConfigError::AmbiguousNavItem { text: self.text })
            }
            Some(link) => Ok(NavItem::Leaf {
                text: self.text,
                link,
            }),
            None => Ok(NavItem::Group {
                text: self.text,
                collapsed: self.collapsed.unwrap_or(false),
                items: items
                    .into_iter()
                    .map(RawNavItem::resolve)
                    .collect::<Result<_, _>>()?,
            }),
        }
    }
}

/// Raw version entry as parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
struct RawVersion {
    key: String,
    label: String,
    prefix: String,
}

/// Raw configuration file shape.
#[derive(Debug, Deserialize)]
struct RawConfig {
    default_version: String,
    versions: Vec<RawVersion>,
    #[serde(default)]
    nav: Vec<RawNavItem>,
}

/// Validated site configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical version-agnostic navigation outline.
    pub outline: NavTree,
    /// Registered documentation versions.
    pub versions: VersionRegistry,
    /// Path to the config file (set after loading from disk).
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file or by discovery.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `verdocs.toml` in the current directory and parents.
    /// There is no default configuration: a site without a version
    /// registry cannot be built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no config file is found, or if parsing
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        let discovered =
            Self::discover_config().ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?;
        Self::load_from_file(&discovered)
    }

    /// Search for a config file in the current directory and parents.
    #[must_use]
    pub fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on TOML errors, ambiguous nav nodes,
    /// invalid prefixes, or duplicate/unknown versions.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;

        let outline = raw
            .nav
            .into_iter()
            .map(RawNavItem::resolve)
            .collect::<Result<NavTree, _>>()?;

        let descriptors = raw
            .versions
            .into_iter()
            .map(|v| VersionDescriptor::new(v.key, v.label, v.prefix))
            .collect::<Result<Vec<_>, _>>()?;
        let versions = VersionRegistry::new(descriptors, &raw.default_version)?;

        Ok(Self {
            outline,
            versions,
            config_path: None,
        })
    }

    /// Build the renderer-facing navigation configuration.
    #[must_use]
    pub fn navigation(&self) -> SiteNavigation {
        SiteNavigation::build(&self.outline, self.versions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASIC: &str = r#"
default_version = "v3"

[[versions]]
key = "v3"
label = "3.x"
prefix = "/v3/"

[[versions]]
key = "master"
label = "Development"
prefix = "/master/"

[[nav]]
text = "Installation"
link = "/installation"

[[nav]]
text = "Guide"
collapsed = true
items = [
    { text = "Configuration", link = "/guide/configuration" },
    { text = "Deployment", link = "/guide/deployment" },
]
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = Config::from_toml(BASIC).unwrap();

        assert_eq!(config.versions.len(), 2);
        assert_eq!(config.versions.default_version().key, "v3");
        assert_eq!(config.outline.len(), 2);
        assert_eq!(config.outline[0].link(), Some("/installation"));
        assert_eq!(config.outline[1].items().len(), 2);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_collapsed_defaults_to_false() {
        let toml = r#"
default_version = "v1"
versions = [{ key = "v1", label = "1.x", prefix = "/v1/" }]
nav = [{ text = "Guide", items = [] }]
"#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(
            config.outline[0],
            NavItem::group("Guide", Vec::new())
        );
    }

    #[test]
    fn test_nav_section_optional() {
        let toml = r#"
default_version = "v1"
versions = [{ key = "v1", label = "1.x", prefix = "/v1/" }]
"#;
        let config = Config::from_toml(toml).unwrap();

        assert!(config.outline.is_empty());
    }

    #[test]
    fn test_missing_versions_is_parse_error() {
        let result = Config::from_toml("default_version = \"v1\"");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_ambiguous_nav_item_rejected() {
        let toml = r#"
default_version = "v1"
versions = [{ key = "v1", label = "1.x", prefix = "/v1/" }]

[[nav]]
text = "Guide"
link = "/guide"
items = [{ text = "Setup", link = "/guide/setup" }]
"#;
        let result = Config::from_toml(toml);

        assert!(
            matches!(result, Err(ConfigError::AmbiguousNavItem { text }) if text == "Guide")
        );
    }

    #[test]
    fn test_link_with_empty_items_is_a_leaf() {
        let toml = r#"
default_version = "v1"
versions = [{ key = "v1", label = "1.x", prefix = "/v1/" }]
nav = [{ text = "Guide", link = "/guide", items = [] }]
"#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(config.outline[0], NavItem::leaf("Guide", "/guide"));
    }

    #[test]
    fn test_ambiguous_nested_nav_item_rejected() {
        let toml = r#"
default_version = "v1"
versions = [{ key = "v1", label = "1.x", prefix = "/v1/" }]

[[nav]]
text = "Guide"
items = [{ text = "Setup", link = "/setup", items = [{ text = "X", link = "/x" }] }]
"#;
        let result = Config::from_toml(toml);

        assert!(
            matches!(result, Err(ConfigError::AmbiguousNavItem { text }) if text == "Setup")
        );
    }

    #[test]
    fn test_bad_prefix_rejected() {
        let toml = r#"
default_version = "v1"
versions = [{ key = "v1", label = "1.x", prefix = "/v1" }]
"#;
        let result = Config::from_toml(toml);

        assert!(matches!(result, Err(ConfigError::Prefix(_))));
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let toml = r#"
default_version = "v1"
versions = [
    { key = "v1", label = "1.x", prefix = "/v1/" },
    { key = "v1-lts", label = "1.x LTS", prefix = "/v1/" },
]
"#;
        let result = Config::from_toml(toml);

        assert!(matches!(
            result,
            Err(ConfigError::Registry(RegistryError::DuplicatePrefix(_)))
        ));
    }

    #[test]
    fn test_unknown_default_version_rejected() {
        let toml = r#"
default_version = "v2"
versions = [{ key = "v1", label = "1.x", prefix = "/v1/" }]
"#;
        let result = Config::from_toml(toml);

        assert!(matches!(
            result,
            Err(ConfigError::Registry(RegistryError::UnknownDefaultKey(_)))
        ));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, BASIC).unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.versions.default_prefix().as_str(), "/v3/");
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = Config::load(Some(&path));

        assert!(matches!(result, Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_navigation_built_from_config() {
        let config = Config::from_toml(BASIC).unwrap();

        let nav = config.navigation();

        assert_eq!(nav.default_prefix, "/v3/");
        assert_eq!(
            nav.sidebar.get("/master/").unwrap()[1].items()[0].link(),
            Some("/master/guide/configuration")
        );
        assert!(nav.search_scope().should_index("/v3/installation.md"));
        assert!(!nav.search_scope().should_index("/master/installation.md"));
    }
}
