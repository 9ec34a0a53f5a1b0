pub mod error;

pub use error::*;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable pointing directly at a config file
pub const CONFIG_PATH_ENV: &str = "NOVA_INVENTORY_CONFIG";

pub const DEFAULT_NETWORK_NAME: &str = "virtual_infrastructure_network";

const APP_DIR: &str = "nova-inventory";
const GLOBAL_FILE: &str = "config.yaml";
const LOCAL_CANDIDATES: [&str; 2] = ["nova-inventory.yaml", ".nova-inventory.yaml"];

/// Inventory settings
///
/// Every field is optional in the file. The metadata keys stay `None` unless
/// set, and the inventory builder falls back to its own attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    /// Network whose floating address identifies a host
    pub network_name: String,
    /// Metadata attribute listing host groups
    pub host_groups_key: Option<String>,
    /// Metadata attribute listing host variables
    pub host_vars_key: Option<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            host_groups_key: None,
            host_vars_key: None,
        }
    }
}

impl InventoryConfig {
    /// Parse a YAML config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the first config file found, or the defaults when there is none
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match find_config_file()? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Ok((Self::load_from(&path)?, Some(path)))
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Replace the network name when an override is given
    pub fn with_network_override(mut self, network: Option<String>) -> Self {
        if let Some(network) = network {
            self.network_name = network;
        }
        self
    }
}

/// Global config directory (`~/.config/nova-inventory`)
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join(APP_DIR);
    Ok(config_dir)
}

/// Locate the config file
///
/// Search order:
/// 1. `NOVA_INVENTORY_CONFIG` (must exist when set)
/// 2. Current directory: nova-inventory.yaml, .nova-inventory.yaml
/// 3. ~/.config/nova-inventory/config.yaml
pub fn find_config_file() -> Result<Option<PathBuf>> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::ExplicitFileNotFound { path });
    }

    let current_dir = std::env::current_dir()?;
    for filename in &LOCAL_CANDIDATES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    if let Ok(config_dir) = get_config_dir() {
        let global_config = config_dir.join(GLOBAL_FILE);
        if global_config.exists() {
            return Ok(Some(global_config));
        }
    }

    Ok(None)
}
