//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`amv.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the persisted cart lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Data directory for the key-value slots.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    ".amv".to_string()
}

/// Catalog behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated fetch latency in milliseconds.
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: default_fetch_delay_ms(),
        }
    }
}

fn default_fetch_delay_ms() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.store.data_dir, ".amv");
        assert_eq!(config.catalog.fetch_delay_ms, 500);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: CliConfig = toml::from_str("[store]\ndata_dir = \"/tmp/amv\"\n").unwrap();
        assert_eq!(config.store.data_dir, "/tmp/amv");
        assert_eq!(config.catalog.fetch_delay_ms, 500);
    }
}
