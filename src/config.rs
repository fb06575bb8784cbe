//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ordtree/ordtree.toml`
//! 3. Environment variables: `ORDTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration could not be read, parsed or serialized.
#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", which inherits the value from the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub tree_file: Option<PathBuf>,
    pub roster_file: Option<PathBuf>,
}

/// Unified configuration for ordtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Data file read by `tree` commands when no file argument is given
    pub tree_file: PathBuf,
    /// Operations file read by `roster` commands when no file argument is given
    pub roster_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tree_file: PathBuf::from("tree.data"),
            roster_file: PathBuf::from("roster.data"),
        }
    }
}

/// Get the XDG config directory for ordtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ordtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ordtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| SettingsError {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/ordtree/ordtree.toml`
    /// 3. Environment variables: `ORDTREE_*` prefix (explicit override)
    pub fn load() -> Result<Self, SettingsError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Merge the global config file if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path fields
        current.expand_paths();

        Ok(current)
    }

    /// Merge overlay config onto self; fields the overlay leaves out keep
    /// their current value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            tree_file: overlay
                .tree_file
                .clone()
                .unwrap_or_else(|| self.tree_file.clone()),
            roster_file: overlay
                .roster_file
                .clone()
                .unwrap_or_else(|| self.roster_file.clone()),
        }
    }

    /// Apply ORDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(Environment::with_prefix("ORDTREE"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("tree_file") {
            settings.tree_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("roster_file") {
            settings.roster_file = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in path fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax. Values that fail to expand
    /// are kept as written.
    fn expand_paths(&mut self) {
        self.tree_file = PathBuf::from(expand(self.tree_file.to_string_lossy().as_ref()));
        self.roster_file = PathBuf::from(expand(self.roster_file.to_string_lossy().as_ref()));
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# ordtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/ordtree/ordtree.toml
#   Env:    ORDTREE_* environment variables (explicit overrides)

# Data file read by `ordtree tree` commands when no file is given
# tree_file = "tree.data"

# Operations file read by `ordtree roster` commands when no file is given
# roster_file = "roster.data"
"#
        .to_string()
    }
}

fn expand(text: &str) -> String {
    shellexpand::full(text)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| text.to_string())
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tree_file, PathBuf::from("tree.data"));
        assert_eq!(settings.roster_file, PathBuf::from("roster.data"));
    }

    #[test]
    fn given_overlay_when_merging_then_unspecified_fields_keep_base() {
        let base = Settings::default();
        let overlay = RawSettings {
            tree_file: Some(PathBuf::from("/data/keys.txt")),
            roster_file: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.tree_file, PathBuf::from("/data/keys.txt"));
        assert_eq!(merged.roster_file, PathBuf::from("roster.data"));
    }

    #[test]
    fn given_tilde_in_paths_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            tree_file: PathBuf::from("~/data/tree.data"),
            roster_file: PathBuf::from("$HOME/data/roster.data"),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.tree_file.to_string_lossy().starts_with(&home),
            "tree_file should start with home dir: {}",
            settings.tree_file.display()
        );
        assert!(
            settings.roster_file.to_string_lossy().starts_with(&home),
            "roster_file should expand $HOME: {}",
            settings.roster_file.display()
        );
    }

    #[test]
    fn given_env_override_when_applied_then_replaces_value() {
        // No other test reads this variable, so set/remove is race-free
        std::env::set_var("ORDTREE_TREE_FILE", "/tmp/env-tree.data");
        let settings = Settings::apply_env_overrides(Settings::default()).expect("env parse");
        std::env::remove_var("ORDTREE_TREE_FILE");

        assert_eq!(settings.tree_file, PathBuf::from("/tmp/env-tree.data"));
        assert_eq!(settings.roster_file, PathBuf::from("roster.data"));
    }

    #[test]
    fn given_settings_when_rendered_then_toml_lists_both_files() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("tree_file"));
        assert!(toml.contains("roster_file"));
    }

    #[test]
    fn given_template_when_generated_then_documents_both_settings() {
        let template = Settings::template();
        assert!(template.contains("tree_file"));
        assert!(template.contains("roster_file"));
        assert!(template.contains("ORDTREE_"));
    }
}
