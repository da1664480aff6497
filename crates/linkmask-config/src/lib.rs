use linkmask_core::{Error, OutputOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for linkmask
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub masking: MaskingConfig,

    #[serde(default)]
    pub pool: PoolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default)]
    pub order: OutputOrder,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            mask_char: default_mask_char(),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            order: OutputOrder::default(),
        }
    }
}

fn default_scheme() -> String {
    "http://".to_string()
}

fn default_mask_char() -> char {
    '*'
}

fn default_workers() -> usize {
    10
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "linkmask", "linkmask") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.linkmask/config.toml")
        }
    }

    pub fn validate(&self) -> linkmask_core::Result<()> {
        if self.pool.workers == 0 {
            return Err(Error::InvalidWorkerCount(self.pool.workers));
        }
        if self.masking.scheme.is_empty() {
            return Err(Error::InvalidScheme);
        }
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
