//! Application Configuration
//!
//! Persisted settings for the desktop host, stored as TOML in the
//! platform config directory.

use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, is_development};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const CONFIG_FILE_NAME: &str = "clinic-ui.toml";

/// Which dashboard the host shows on startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }

    /// The other dashboard
    pub fn toggled(self) -> Self {
        match self {
            Role::Patient => Role::Doctor,
            Role::Doctor => Role::Patient,
        }
    }
}

/// Persisted application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
    /// Dashboard shown on startup
    pub role: Role,
    /// JSON file with dashboard data; built-in sample data when unset
    pub data_file: Option<PathBuf>,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Also write logs to a daily rolling file in the config directory
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 840.0,
            role: Role::default(),
            data_file: None,
            log_level: if is_development() { "debug" } else { "info" }.to_string(),
            log_to_file: false,
        }
    }
}

impl AppConfig {
    /// Path of the config file in the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config directory, writing defaults on first run
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }
        Self::from_path(&path)
    }

    /// Load from an explicit path; an empty file yields defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Write to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write");

        let config = AppConfig::from_path(&path).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "role = \"doctor\"\nwindow_width = 1024.0\n").expect("write");

        let config = AppConfig::from_path(&path).expect("load");
        assert_eq!(config.role, Role::Doctor);
        assert_eq!(config.window_width, 1024.0);
        assert_eq!(config.window_height, AppConfig::default().window_height);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = AppConfig {
            role: Role::Doctor,
            data_file: Some(PathBuf::from("/tmp/clinic.json")),
            log_to_file: true,
            ..AppConfig::default()
        };

        config.save_to(&path).expect("save");
        assert_eq!(AppConfig::from_path(&path).expect("load"), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "role = [").expect("write");

        assert!(matches!(
            AppConfig::from_path(&path),
            Err(Error::TomlDe { .. })
        ));
    }

    #[test]
    fn test_role_toggle() {
        assert_eq!(Role::Patient.toggled(), Role::Doctor);
        assert_eq!(Role::Doctor.toggled().label(), "Patient");
    }
}
