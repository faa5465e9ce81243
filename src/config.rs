//! Configuration for the schema studio
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (studio.toml)
//! - Environment variables (STUDIO_*)
//!
//! ## Example config file (studio.toml):
//! ```toml
//! [store]
//! path = "./schemas.json"
//!
//! [export]
//! output_format = "pretty"
//!
//! [editor]
//! default_title = "NewSchema"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::schema::DEFAULT_DRAFT;

/// Main configuration for the studio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Editor defaults
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format (pretty or compact)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// File suffix for exported documents
    #[serde(default = "default_export_suffix")]
    pub suffix: String,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

/// Editor defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Title given to newly created schemas
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Draft identifier stamped onto newly created schemas
    #[serde(default = "default_draft")]
    pub draft: String,
}

// Default value functions
fn default_store_path() -> PathBuf {
    PathBuf::from("schemas.json")
}

fn default_export_suffix() -> String {
    ".schema.json".to_string()
}

fn default_title() -> String {
    "NewSchema".to_string()
}

fn default_draft() -> String {
    DEFAULT_DRAFT.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Pretty,
            suffix: default_export_suffix(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            draft: default_draft(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["studio.toml", ".studio.toml", "config/studio.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "schema-studio") {
            let xdg_config = config_dir.config_dir().join("studio.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (STUDIO_*)
        builder = builder.add_source(
            Environment::with_prefix("STUDIO")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Get the store path (resolves relative paths)
    pub fn store_path(&self) -> PathBuf {
        if self.store.path.is_absolute() {
            self.store.path.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_default()
                .join(&self.store.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.store.path, PathBuf::from("schemas.json"));
        assert_eq!(config.editor.default_title, "NewSchema");
        assert_eq!(config.editor.draft, DEFAULT_DRAFT);
        assert_eq!(config.export.output_format, OutputFormat::Pretty);
    }

    #[test]
    fn test_serialize_config() {
        let config = StudioConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[export]"));
        assert!(toml_str.contains("[editor]"));
    }
}
