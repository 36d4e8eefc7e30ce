//! Controller configuration
//!
//! Hosts typically embed these settings in their own config file; `load` and
//! `save` handle a standalone YAML file for convenience.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_HISTORY_LIMIT;
use crate::util::DEFAULT_TAB_WIDTH;

/// Settings that shape how the controller edits text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBoxConfig {
    /// Number of spaces inserted or removed by indent/unindent
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Maximum caret snapshots kept in the location history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Whether Enter copies the current line's indentation
    #[serde(default = "default_keep_indent")]
    pub keep_indent_on_newline: bool,
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_keep_indent() -> bool {
    true
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            history_limit: default_history_limit(),
            keep_indent_on_newline: default_keep_indent(),
        }
    }
}

impl TextBoxConfig {
    /// Parse a config from YAML. Missing fields take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse text box config")
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize text box config")
    }

    /// Load config from disk, or return defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to disk
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = self.to_yaml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TextBoxConfig::default();
        assert_eq!(config.tab_width, 4);
        assert_eq!(config.history_limit, 1000);
        assert!(config.keep_indent_on_newline);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = TextBoxConfig::from_yaml_str("tab_width: 2\n").unwrap();
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.history_limit, 1000);
        assert!(config.keep_indent_on_newline);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = TextBoxConfig::from_yaml_str("tab_width: [oops").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = TextBoxConfig {
            tab_width: 8,
            history_limit: 5,
            keep_indent_on_newline: false,
        };
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(TextBoxConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
