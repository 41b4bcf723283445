//! # lab-config
//!
//! Layered configuration loading for the coding lab tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CODELAB_*` prefix, `__` as separator)
//! 2. Project-level `.codelab/config.toml`
//! 3. User-level `~/.config/codelab/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CODELAB_API__BASE_URL` -> `api.base_url`, `CODELAB_ACTOR__ID` -> `actor.id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lab_config::LabConfig;
//!
//! let config = LabConfig::load_with_dotenv().expect("config");
//! config.validate_for_network().expect("api and actor configured");
//! println!("talking to {}", config.api.normalized_base_url());
//! ```

mod actor;
mod api;
mod editor;
mod error;
mod general;

pub use actor::ActorConfig;
pub use api::ApiConfig;
pub use editor::EditorConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name used for both the user-global and project-local config.
pub const CONFIG_DIR_NAME: &str = "codelab";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "CODELAB_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub actor: ActorConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Self::local_config_path();
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check everything a command that talks to the service needs.
    ///
    /// The API section is checked before the actor.
    pub fn validate_for_network(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if !self.actor.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "actor".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Path to the project-local config file, relative to the working directory.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(format!(".{CONFIG_DIR_NAME}")).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LabConfig::default();
        assert!(!config.api.is_configured());
        assert!(!config.actor.is_configured());
        assert_eq!(config.editor.timeout_ms, 3000);
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LabConfig = LabConfig::figment().extract()?;
            assert!(!config.api.is_configured());
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn network_validation_checks_api_before_actor() {
        let config = LabConfig::default();
        assert!(matches!(
            config.validate_for_network(),
            Err(ConfigError::NotConfigured { section }) if section == "api"
        ));

        let mut config = LabConfig::default();
        config.api.base_url = "https://labs.example.com".into();
        assert!(matches!(
            config.validate_for_network(),
            Err(ConfigError::NotConfigured { section }) if section == "actor"
        ));

        config.actor.id = "author-1".into();
        assert!(config.validate_for_network().is_ok());
    }

    #[test]
    fn local_path_is_under_dot_codelab() {
        assert_eq!(
            LabConfig::local_config_path(),
            PathBuf::from(".codelab/config.toml")
        );
    }
}
