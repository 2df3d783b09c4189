use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::v_info;

/// Console configuration, persisted as TOML next to the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the SpaceTraders API.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where saved agent credentials live.
    pub agents_file: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: crate::API_BASE_URL.to_string(),
            },
            storage: StorageConfig {
                agents_file: crate::AGENTS_FILE.to_string(),
            },
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file, creating the default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Error> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: ConsoleConfig = toml::from_str(&config_str)?;
            config.validate()?;
            Ok(config)
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = ConsoleConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Error> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Error> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(Error::Config(
                "api.base_url must be an http(s) URL".to_string(),
            ));
        }
        if self.storage.agents_file.trim().is_empty() {
            return Err(Error::Config("storage.agents_file is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, crate::API_BASE_URL);
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = ConsoleConfig::default();
        config.api.base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ConsoleConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: ConsoleConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.api.base_url, config.api.base_url);
        assert_eq!(back.storage.agents_file, config.storage.agents_file);
    }
}
