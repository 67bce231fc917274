mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::{debug, warn};

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const BASE_URL_ENV: &str = "SHIPSAFE_BASE_URL";

/// Loads the configuration from `path`, `$CONFIG_PATH` or `config.yaml`,
/// in that order. A missing file yields the defaults.
pub async fn load(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path.to_string_lossy().to_string(),
        None => env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.yaml".to_string()),
    };

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => parse(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Configuration file {} not found, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Ok(base_url) = env::var(BASE_URL_ENV) {
        config.backend.base_url = base_url;
    }

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to an empty mapping
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(Error::config("backend.base_url must not be empty"));
        }
        if self.qa.top_k < 1 {
            return Err(Error::config("qa.top_k must be at least 1"));
        }
        Ok(())
    }
}
