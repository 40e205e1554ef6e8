//! File-based configuration loading
//!
//! Supports a user-level file (`~/.config/workshop/site.json`) and a
//! project-level file (`./site.json`), layered over the shipped record.
//! Project-level settings take precedence.

use crate::{ConfigError, Result, SiteConfig, workshop_config};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name shared by the user-level and project-level configs
pub const CONFIG_FILE_NAME: &str = "site.json";

/// Project-level config, relative to the working directory
pub const PROJECT_CONFIG_FILE: &str = CONFIG_FILE_NAME;

impl SiteConfig {
    /// Load configuration from a JSON file
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use workshop_config::SiteConfig;
    /// let config = SiteConfig::from_file("site.json")?;
    /// # Ok::<(), workshop_config::ConfigError>(())
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        let config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;

        std::fs::write(path, json).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        Ok(())
    }

    /// Load merged configuration (shipped + user + project)
    ///
    /// Starts from [`workshop_config`] and overlays the user-level and then the
    /// project-level file. Files that do not exist are skipped; files that
    /// exist but cannot be read or parsed are errors.
    pub fn load_merged() -> Result<Self> {
        Self::load_layered(&merged_layers(home_from_env()))
    }

    /// Overlay each existing file in `paths`, in order, on the shipped record
    pub fn load_layered(paths: &[PathBuf]) -> Result<Self> {
        let mut config = workshop_config().clone();

        for path in paths {
            let exists = path.try_exists().map_err(|e| ConfigError::Read {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?;
            if !exists {
                debug!(path = %path.display(), "Site config layer not found, skipping");
                continue;
            }
            config.merge(Self::from_file(path)?);
        }

        Ok(config)
    }

    /// Load user-level config from `~/.config/workshop/site.json`
    pub fn load_user_config() -> Result<Self> {
        Self::from_file(user_config_path()?)
    }

    /// Load project-level config from `./site.json`
    pub fn load_project_config() -> Result<Self> {
        Self::from_file(PROJECT_CONFIG_FILE)
    }

    /// Merge another config into this one
    ///
    /// The `other` config's values take precedence:
    /// - a non-empty `site_title` replaces ours
    /// - `analytics` replaces ours when present
    /// - each variable replaces the first one of the same name already in
    ///   `self` in place, or is appended; duplicates within `other` are all
    ///   kept
    pub fn merge(&mut self, other: SiteConfig) {
        if !other.site_title.is_empty() {
            self.site_title = other.site_title;
        }

        if other.analytics.is_some() {
            self.analytics = other.analytics;
        }

        let base_len = self.variables.len();
        for var in other.variables {
            match self.variables[..base_len]
                .iter_mut()
                .find(|v| v.name == var.name)
            {
                Some(existing) => existing.content = var.content,
                None => self.variables.push(var),
            }
        }
    }
}

/// Path of the user-level config file
pub fn user_config_path() -> Result<PathBuf> {
    user_config_path_in(home_from_env())
}

fn home_from_env() -> Option<String> {
    pick_home(std::env::var("HOME").ok(), std::env::var("USERPROFILE").ok())
}

/// First non-empty of `HOME` and `USERPROFILE`
fn pick_home(home: Option<String>, userprofile: Option<String>) -> Option<String> {
    home.filter(|h| !h.is_empty())
        .or_else(|| userprofile.filter(|h| !h.is_empty()))
}

fn user_config_path_in(home: Option<String>) -> Result<PathBuf> {
    let home = home.ok_or(ConfigError::HomeNotSet)?;

    Ok(PathBuf::from(home)
        .join(".config")
        .join("workshop")
        .join(CONFIG_FILE_NAME))
}

fn merged_layers(home: Option<String>) -> Vec<PathBuf> {
    let mut layers = Vec::with_capacity(2);
    match user_config_path_in(home) {
        Ok(path) => layers.push(path),
        Err(e) => debug!("Skipping user-level site config: {}", e),
    }
    layers.push(PathBuf::from(PROJECT_CONFIG_FILE));
    layers
}
