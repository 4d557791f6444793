//! CLI execution context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};

use amv_commerce::catalog::{DelayedCatalog, FallbackCatalog, StaticCatalog};
use amv_commerce::cart::CartStore;
use amv_storage::JsonFileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// The persisted cart.
    pub cart: CartStore<JsonFileStore>,
}

impl Context {
    /// Load context from config file and open the cart store.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let data_dir = {
            let dir = PathBuf::from(&config.store.data_dir);
            if dir.is_absolute() {
                dir
            } else {
                cwd.join(dir)
            }
        };
        let storage = JsonFileStore::open(&data_dir)
            .with_context(|| format!("Failed to open cart store at {}", data_dir.display()))?;
        let cart = CartStore::open(storage);
        output.debug(&format!(
            "cart store at {}, {} item(s) restored",
            data_dir.display(),
            cart.cart_count()
        ));

        Ok(Self {
            config,
            output,
            cart,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["amv.toml", ".amv.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The catalog provider: bundled data behind a simulated fetch delay,
    /// degrading to the bundled data if a provider ever fails.
    pub fn catalog(&self) -> FallbackCatalog<DelayedCatalog<StaticCatalog>> {
        FallbackCatalog::new(DelayedCatalog::new(
            StaticCatalog::bundled(),
            Duration::from_millis(self.config.catalog.fetch_delay_ms),
        ))
    }
}
