//! Tool configuration.
//!
//! Handles loading and validating the optional `config.toml` in the source
//! root. Every value has a default, so the file only needs the keys it wants
//! to change, and command-line flags override whatever the file says.
//!
//! ## Config File Location
//!
//! ```text
//! assets/src/
//! ├── config.toml      # Tool configuration (optional)
//! ├── common.yaml
//! └── *.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [index]
//! layout = "table"     # "table" (column-balanced) or "list" (one link per line)
//! max_columns = 3      # Upper bound on table columns
//! column_size = 10     # Items per column before another column is added
//!
//! [slug]
//! allow_unicode = false  # Keep non-ASCII letters in directory names
//!
//! [git]
//! enabled = true       # Stage and commit the output after building
//! push = false         # Push after a successful commit
//! # commit_message = "Update presentations"   # Omit to open the editor
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the configuration file inside the source root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Index document layout.
    pub index: IndexConfig,
    /// Canonical name generation.
    pub slug: SlugConfig,
    /// Version control after the build.
    pub git: GitConfig,
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index.max_columns == 0 {
            return Err(ConfigError::Validation(
                "index.max_columns must be at least 1".into(),
            ));
        }
        if self.index.column_size == 0 {
            return Err(ConfigError::Validation(
                "index.column_size must be at least 1".into(),
            ));
        }
        if let Some(message) = &self.git.commit_message
            && message.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "git.commit_message must not be blank".into(),
            ));
        }
        Ok(())
    }
}

/// How the index document lays out its links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Column-balanced Markdown table.
    #[default]
    Table,
    /// One link per paragraph, no columns.
    List,
}

/// Index document settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub layout: Layout,
    /// Upper bound on the number of table columns.
    pub max_columns: usize,
    /// Items a column holds before another column is opened.
    pub column_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Table,
            max_columns: 3,
            column_size: 10,
        }
    }
}

/// Canonical name settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugConfig {
    /// Keep non-ASCII letters (NFKC) instead of folding to ASCII (NFKD).
    pub allow_unicode: bool,
}

/// Version control settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    pub enabled: bool,
    pub push: bool,
    /// When absent, `git commit` opens the user's editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            push: false,
            commit_message: None,
        }
    }
}

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the defaults. A present file is parsed, checked
/// for unknown keys, and validated.
pub fn load_config(root: &Path) -> Result<ToolConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(ToolConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ToolConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# pitchgen configuration
# ======================
# Place this file in the source directory (default: assets/src/config.toml).
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

[index]
# "table": links arranged in a column-balanced Markdown table.
# "list":  one link per paragraph, in name order.
layout = "table"

# The table grows one column per `column_size` presentations,
# up to `max_columns` columns.
max_columns = 3
column_size = 10

[slug]
# false: names are folded to ASCII ("Café Talk" -> "cafe-talk").
# true:  non-ASCII letters are kept ("Café Talk" -> "café-talk").
allow_unicode = false

[git]
# Stage and commit the output directory after building.
enabled = true
# Push after a successful commit.
push = false
# Commit message. When omitted, `git commit` opens your editor.
# commit_message = "Update presentations"
"##
}
