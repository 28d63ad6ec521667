//! Configuration management for xmd.
//!
//! Parses `xmd.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. When no config
//! file exists, built-in defaults apply: the `UXF` root namespace and a
//! `wiki` output directory next to the working directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "xmd.toml";

/// Default root namespace filter.
const DEFAULT_ROOT_NAMESPACE: &str = "UXF";

/// Default output directory name.
const DEFAULT_OUTPUT_DIR: &str = "wiki";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsRaw {
    root_namespace: Option<String>,
    output_dir: Option<String>,
}

/// Resolved documentation configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Top-level symbol namespace considered documented; symbols outside
    /// it are invisible to the generator.
    pub root_namespace: String,
    /// Directory the Markdown pages are written to.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `xmd.toml` in the current directory and parents,
    /// falling back to built-in defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or
    /// when parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsRaw::default(),
            docs_resolved: DocsConfig {
                root_namespace: DEFAULT_ROOT_NAMESPACE.to_owned(),
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Resolve relative paths and defaults based on the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            root_namespace: self
                .docs
                .root_namespace
                .clone()
                .unwrap_or_else(|| DEFAULT_ROOT_NAMESPACE.to_owned()),
            output_dir: config_dir.join(self.docs.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)),
        };
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let root = &self.docs_resolved.root_namespace;
        if root.is_empty() {
            return Err(ConfigError::Validation(
                "docs.root_namespace cannot be empty".to_owned(),
            ));
        }
        // The filter matches a single path segment; a dotted value would
        // never match anything.
        if root.contains('.') {
            return Err(ConfigError::Validation(format!(
                "docs.root_namespace must be a single segment, got '{root}'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.docs_resolved.root_namespace, "UXF");
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/test/wiki"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.docs_resolved.root_namespace, "UXF");
        assert_eq!(
            config.docs_resolved.output_dir,
            PathBuf::from("/project/wiki")
        );
    }

    #[test]
    fn test_parse_docs_config() {
        let toml = r#"
[docs]
root_namespace = "MyLib"
output_dir = "site/reference"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.docs_resolved.root_namespace, "MyLib");
        assert_eq!(
            config.docs_resolved.output_dir,
            PathBuf::from("/project/site/reference")
        );
    }

    #[test]
    fn test_validate_empty_root_namespace() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.root_namespace = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("root_namespace"));
    }

    #[test]
    fn test_validate_dotted_root_namespace() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.root_namespace = "UXF.UI".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("single segment"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/xmd.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
