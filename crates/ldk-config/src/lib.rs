//! # ldk-config
//!
//! Layered configuration loading for logdeck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LOGDECK_*` prefix, `__` as separator)
//! 2. Project-level `.logdeck/config.toml`
//! 3. User-level `~/.config/logdeck/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LOGDECK_API__BASE_URL` -> `api.base_url`,
//! `LOGDECK_PROXY__BACKEND` -> `proxy.backend`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ldk_config::LdkConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = LdkConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod proxy;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use proxy::ProxyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LdkConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LdkConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".logdeck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LOGDECK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("logdeck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LdkConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.proxy.listen, "127.0.0.1:3000");
        assert!(config.general.table_color);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = LdkConfig::figment();
        let config: LdkConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.proxy.backend, "http://localhost:8080");
    }
}
