#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::{ConfigProvider, CART_STORAGE_KEY};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_DIR: &str = "./.rocketshoes";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Settings after defaults, the TOML file and command-line overrides have been layered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_dir: String,
    pub cart_key: String,
    pub timeout_seconds: u64,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_dir: DEFAULT_STORAGE_DIR.to_string(),
            cart_key: CART_STORAGE_KEY.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_level: None,
        }
    }
}

impl AppConfig {
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(base_url) = &toml.api.base_url {
            self.api_base_url = base_url.clone();
        }
        if let Some(timeout) = toml.api.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(directory) = &toml.storage.directory {
            self.storage_dir = directory.clone();
        }
        if let Some(cart_key) = &toml.storage.cart_key {
            self.cart_key = cart_key.clone();
        }
        if let Some(level) = toml.logging.as_ref().and_then(|l| l.level.clone()) {
            self.log_level = Some(level);
        }
        self
    }
}

impl ConfigProvider for AppConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn storage_dir(&self) -> &str {
        &self.storage_dir
    }

    fn cart_key(&self) -> &str {
        &self.cart_key
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_path("storage.directory", &self.storage_dir)?;
        validate_non_empty_string("storage.cart_key", &self.cart_key)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
