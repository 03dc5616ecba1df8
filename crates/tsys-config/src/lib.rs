//! # tsys-config
//!
//! Layered configuration loading for tsys using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TSYS_*` prefix, `__` as separator)
//! 2. Project-level `.tsys/config.toml`
//! 3. User-level `~/.config/tsys/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TSYS_API__BASE_URL` -> `api.base_url`,
//! `TSYS_API__TIMEOUT_SECS` -> `api.timeout_secs`. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tsys_config::TsysConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = TsysConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;

pub use api::ApiConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TsysConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl TsysConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tsys/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TSYS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tsys").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = TsysConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn env_override_wins() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TSYS_API__BASE_URL", "https://tracker.example.com");
            let config: TsysConfig = TsysConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://tracker.example.com");
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".tsys")?;
            jail.create_file(
                ".tsys/config.toml",
                r#"
                [api]
                base_url = "http://from-toml:9090"
                timeout_secs = 30
                "#,
            )?;
            let config: TsysConfig = TsysConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://from-toml:9090");
            assert_eq!(config.api.timeout_secs, 30);

            jail.set_env("TSYS_API__BASE_URL", "http://from-env:7070");
            let config: TsysConfig = TsysConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://from-env:7070");
            // TOML value survives where env is silent
            assert_eq!(config.api.timeout_secs, 30);
            Ok(())
        });
    }
}
