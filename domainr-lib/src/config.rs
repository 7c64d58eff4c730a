//! Configuration file parsing and management.
//!
//! This module loads credentials from TOML files and `DOMAINR_*` environment
//! variables and merges them with proper precedence rules.
//!
//! ```toml
//! [Default]
//! mashape-key = ""
//! client_id = "your-client-id"
//! ```

use crate::credentials::ConfiguredCredentials;
use crate::error::DomainrError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// The `[Default]` section holding credentials
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultSection>,
}

/// Credential keys of the `[Default]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultSection {
    /// Key for the Mashape-hosted API
    #[serde(rename = "mashape-key", skip_serializing_if = "Option::is_none")]
    pub mashape_key: Option<String>,

    /// Client id for the direct API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// A merged configuration plus the files it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: FileConfig,
    /// Files that were loaded, lowest precedence first
    pub loaded_files: Vec<PathBuf>,
}

/// Configuration discovery and loading functionality.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    home: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    working_dir: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a manager that searches the real home, XDG and current directories.
    pub fn new() -> Self {
        Self {
            home: env::var_os("HOME").map(PathBuf::from),
            xdg_config_home: env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            working_dir: PathBuf::from("."),
        }
    }

    /// Create a manager rooted at explicit directories.
    pub fn with_dirs(
        home: Option<PathBuf>,
        xdg_config_home: Option<PathBuf>,
        working_dir: PathBuf,
    ) -> Self {
        Self {
            home,
            xdg_config_home,
            working_dir,
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// `FileError` if the file is missing or unreadable, `ConfigError` if it
    /// is not valid TOML of the expected shape.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, DomainrError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DomainrError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DomainrError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            DomainrError::config(format!(
                "Failed to parse TOML configuration '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// Unreadable or invalid files are skipped with a warning.
    pub fn discover_and_load(&self) -> LoadedConfig {
        let mut loaded = LoadedConfig::default();

        // XDG (lowest), then global, then local (highest)
        let candidates = [
            self.get_xdg_config_path(),
            self.get_global_config_path(),
            self.get_local_config_path(),
        ];

        for path in candidates.into_iter().flatten() {
            match self.load_file(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config file");
                    loaded.config = merge_configs(loaded.config, config);
                    loaded.loaded_files.push(path);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping config file");
                }
            }
        }

        if loaded.loaded_files.len() > 1 {
            tracing::info!(
                files = ?loaded.loaded_files,
                "multiple config files found, later files take precedence"
            );
        }

        loaded
    }

    /// Resolve the candidate credentials for this invocation.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`DOMAINR_MASHAPE_KEY`, `DOMAINR_CLIENT_ID`)
    /// 2. The explicit config file, if one is given (discovery is skipped)
    /// 3. Discovered config files
    ///
    /// # Errors
    ///
    /// Only an explicit config file that cannot be loaded is an error.
    pub fn load_credentials(
        &self,
        explicit_path: Option<&Path>,
        env_config: &EnvConfig,
    ) -> Result<ConfiguredCredentials, DomainrError> {
        let (config, source) = match explicit_path {
            Some(path) => {
                let config = self.load_file(path)?;
                (config, path.to_path_buf())
            }
            None => {
                let loaded = self.discover_and_load();
                let source = loaded
                    .loaded_files
                    .last()
                    .cloned()
                    .unwrap_or_else(|| self.default_config_path());
                (loaded.config, source)
            }
        };

        let section = config.default.unwrap_or_default();

        Ok(ConfiguredCredentials {
            mashape_key: env_config.mashape_key.clone().or(section.mashape_key),
            client_id: env_config.client_id.clone().or(section.client_id),
            source: source.display().to_string(),
        })
    }

    /// Where a user is expected to put their configuration.
    ///
    /// The XDG location, falling back to `~/.domainr.toml`, then `./domainr.toml`.
    pub fn default_config_path(&self) -> PathBuf {
        if let Some(config_dir) = self.xdg_config_dir() {
            return config_dir.join("domainr").join("config.toml");
        }
        if let Some(home) = &self.home {
            return home.join(".domainr.toml");
        }
        self.working_dir.join("domainr.toml")
    }

    /// Get the local configuration file path.
    ///
    /// Looks for configuration files in the current directory.
    fn get_local_config_path(&self) -> Option<PathBuf> {
        ["domainr.toml", ".domainr.toml"]
            .iter()
            .map(|candidate| self.working_dir.join(candidate))
            .find(|path| path.exists())
    }

    /// Get the global configuration file path.
    ///
    /// Looks for configuration files in the user's home directory.
    fn get_global_config_path(&self) -> Option<PathBuf> {
        let home = self.home.as_ref()?;
        [".domainr.toml", "domainr.toml"]
            .iter()
            .map(|candidate| home.join(candidate))
            .find(|path| path.exists())
    }

    /// Get the XDG configuration file path.
    fn get_xdg_config_path(&self) -> Option<PathBuf> {
        let path = self.xdg_config_dir()?.join("domainr").join("config.toml");
        path.exists().then_some(path)
    }

    fn xdg_config_dir(&self) -> Option<PathBuf> {
        self.xdg_config_home
            .clone()
            .or_else(|| self.home.as_ref().map(|home| home.join(".config")))
    }
}

/// Merge two configurations key by key.
///
/// Values from `higher` take precedence over values from `lower`.
fn merge_configs(lower: FileConfig, higher: FileConfig) -> FileConfig {
    FileConfig {
        default: match (lower.default, higher.default) {
            (Some(mut lower_section), Some(higher_section)) => {
                if higher_section.mashape_key.is_some() {
                    lower_section.mashape_key = higher_section.mashape_key;
                }
                if higher_section.client_id.is_some() {
                    lower_section.client_id = higher_section.client_id;
                }
                Some(lower_section)
            }
            (None, Some(higher_section)) => Some(higher_section),
            (Some(lower_section), None) => Some(lower_section),
            (None, None) => None,
        },
    }
}

/// Environment variable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub mashape_key: Option<String>,
    pub client_id: Option<String>,
    /// Explicit config file (`DOMAINR_CONFIG`)
    pub config: Option<String>,
}

impl EnvConfig {
    /// Build from an arbitrary variable lookup. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            let value = lookup(name).filter(|v| !v.trim().is_empty());
            if value.is_some() {
                tracing::debug!(variable = name, "using environment override");
            }
            value
        };

        Self {
            mashape_key: read("DOMAINR_MASHAPE_KEY"),
            client_id: read("DOMAINR_CLIENT_ID"),
            config: read("DOMAINR_CONFIG"),
        }
    }
}

/// Load configuration from `DOMAINR_*` environment variables.
pub fn load_env_config() -> EnvConfig {
    EnvConfig::from_lookup(|name| env::var(name).ok())
}
