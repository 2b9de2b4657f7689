use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfsyncError;

/// Default working folder, relative to the base directory.
pub const DEFAULT_CONFIG_FOLDER: &str = "config";

/// Tool-wide deployment configuration, persisted as `config.toml` in the
/// data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Deployment root. Defaults to the current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Working folder for bundle files, relative to the base directory.
    #[serde(default = "default_config_folder")]
    pub config_folder: String,
    /// Public URL base used for resolved bundle URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
    /// Whether this deployment is tenant-scoped.
    #[serde(default)]
    pub multi_tenant: bool,
    /// Default tenant for multi-tenant deployments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<u64>,
}

fn default_config_folder() -> String {
    DEFAULT_CONFIG_FOLDER.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            config_folder: default_config_folder(),
            config_url: None,
            multi_tenant: false,
            tenant_id: None,
        }
    }
}

impl GlobalConfig {
    /// Load `config.toml` from the data directory; absent means defaults.
    pub fn load(data_dir: &Path) -> Result<Self, ConfsyncError> {
        let path = data_dir.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path).map_err(|source| ConfsyncError::FileRead {
            path: path.clone(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfsyncError> {
        let path = data_dir.join("config.toml");
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents).map_err(|source| ConfsyncError::FileWrite { path, source })
    }
}
