//! Configuration types for auditmill builds

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            template_dir: default_template_dir(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,
    #[serde(default = "default_docx_dir")]
    pub docx_dir: PathBuf,
    #[serde(default)]
    pub export_docx: bool,
    /// Write a JSON build summary to this path
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

fn default_site_dir() -> PathBuf {
    PathBuf::from("source")
}

fn default_docx_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            docx_dir: default_docx_dir(),
            export_docx: false,
            manifest: None,
        }
    }
}

/// Complete build configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BuildConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default locations with cascade:
    /// 1. ./auditmill.toml (local override)
    /// 2. ~/.auditmill/config.toml (global defaults)
    /// 3. Built-in defaults
    pub fn load_default() -> Self {
        // Try local config first
        if let Ok(config) = Self::from_file("auditmill.toml") {
            return config;
        }

        // Try global config
        if let Some(home) = dirs::home_dir() {
            let global_path = home.join(".auditmill").join("config.toml");
            if let Ok(config) = Self::from_file(&global_path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".auditmill").join("config.toml"))
    }
}
