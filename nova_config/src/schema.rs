use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use nova_core::DEFAULT_COLLECTION_KEY;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the collection file. Defaults to `~/nova/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "StorageConfig::default_collection_key")]
    pub collection_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            collection_key: Self::default_collection_key(),
        }
    }
}

impl StorageConfig {
    fn default_collection_key() -> String {
        DEFAULT_COLLECTION_KEY.to_string()
    }

    /// Configured data directory, or `data` under the config directory.
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(Config::config_dir()?.join("data"))
    }
}

impl Config {
    fn default_log_level() -> String {
        "info".to_string()
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("nova"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/nova/config.json`, falling back to defaults when it is absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", path.display())
        })?;

        Ok(config)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    /// Write the default config template to `path`. Refuses to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let config_template = r#"{
  "storage": {
    "collection_key": "nova_card_collection"
  },
  "log_level": "info"
}"#;

        std::fs::write(path, config_template)?;
        info!("Created config file at: {}", path.display());
        Ok(())
    }
}
