use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Hostname of the analysis service.  `localhost` / `127.0.0.1`
    /// normalize to the local endpoint; anything else is reached at the
    /// same fixed port.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in MiB.
    #[serde(default = "default_max_file_mib")]
    pub max_file_mib: u64,
    /// Directory the file browser lists.
    #[serde(default = "default_browse_dir")]
    pub browse_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_mib: default_max_file_mib(),
            browse_dir: default_browse_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    crate::endpoint::DEFAULT_PORT
}

fn default_max_file_mib() -> u64 {
    10
}

fn default_browse_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    /// Upload size cap in bytes (10 MiB by default).
    pub fn max_upload_bytes(&self) -> u64 {
        self.upload.max_file_mib * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.host, "localhost");
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.upload.max_file_mib, 10);
        assert_eq!(config.max_upload_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[api]\nhost = \"192.168.1.40\"\n").unwrap();
        assert_eq!(config.api.host, "192.168.1.40");
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.upload.max_file_mib, 10);
    }
}
