//! Configuration module for tag navigation.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.tagjump/settings.toml`, found by walking up from the cwd)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `TJ_` and use double underscores
//! to separate nested levels:
//! - `TJ_HISTORY__CAPACITY=100` sets `history.capacity`
//! - `TJ_TAGS__FILE_NAME=.tags` sets `tags.file_name`
//! - `TJ_DEBUG=true` sets `debug`

use crate::history::DEFAULT_CAPACITY;
use crate::project_resolver::{TagPaths, TagRegistry};
use crate::tags::resolver::DEFAULT_INDEX_NAME;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".tagjump";
pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .tagjump is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Index file discovery
    #[serde(default)]
    pub tags: TagsConfig,

    /// Project root discovery
    #[serde(default)]
    pub project: ProjectConfig,

    /// Jump history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TagsConfig {
    /// File name looked up beside the current file and at the project root
    #[serde(default = "default_index_name")]
    pub file_name: String,

    /// Index files consulted for every query, in order
    #[serde(default)]
    pub global: Vec<PathBuf>,

    /// Extra index files keyed by project root; a single path or a list
    #[serde(default)]
    pub projects: HashMap<PathBuf, TagPaths>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    /// Entries whose presence marks a directory as a project root
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HistoryConfig {
    /// Maximum number of jump records kept
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_index_name() -> String {
    DEFAULT_INDEX_NAME.to_string()
}
fn default_markers() -> Vec<String> {
    [".git", ".hg", ".svn", CONFIG_DIR]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            tags: TagsConfig::default(),
            project: ProjectConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            file_name: default_index_name(),
            global: Vec::new(),
            projects: HashMap::new(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(&config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                // If workspace_root is not set in config, detect it
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscores stay in field names
            .merge(Env::prefixed("TJ_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the workspace config by looking for a .tagjump directory
    /// Searches from current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .tagjump is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Check if configuration is properly initialized
    pub fn check_init() -> Result<(), String> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        if !config_path.exists() {
            return Err("No configuration file found".to_string());
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                if let Err(e) = toml::from_str::<Settings>(&content) {
                    return Err(format!(
                        "Configuration file is corrupted: {e}\nRun 'tagjump init --force' to regenerate."
                    ));
                }
            }
            Err(e) => {
                return Err(format!("Cannot read configuration file: {e}"));
            }
        }

        Ok(())
    }

    /// Index registry described by the `[tags]` section.
    pub fn registry(&self) -> TagRegistry {
        TagRegistry::from_parts(self.tags.projects.clone(), self.tags.global.clone())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file in the current directory
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let current_dir = std::env::current_dir()?;
        Self::init_config_file_in(&current_dir, force)
    }

    /// Create a default settings file with helpful comments under `dir`
    pub fn init_config_file_in(
        dir: &Path,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = format!(
            r#"# tagjump configuration

# Version of the configuration schema
version = 1

# Global debug mode (debug-level logging on stderr)
debug = false

[tags]
# Index file name looked up beside the current file and at the project root
file_name = "{DEFAULT_INDEX_NAME}"

# Index files consulted for every query, in order
global = []

# Extra index files per project root: a single path or a list
[tags.projects]
# "/path/to/project" = "/path/to/vendor.tags"
# "/path/to/mono" = ["/path/to/a.tags", "/path/to/b.tags"]

[project]
# A directory holding any of these entries is a project root
markers = [".git", ".hg", ".svn", "{CONFIG_DIR}"]

[history]
# Maximum number of jump records kept in one session
capacity = {DEFAULT_CAPACITY}
"#
        );

        std::fs::write(&config_path, template)?;
        Ok(config_path)
    }
}
