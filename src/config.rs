//! Enum registration settings.
//!
//! [`EnumConfig`] is read from the `[enum]` section of `config/enum.toml`,
//! overridable through `LIFEGUARD_ENUM__ENUM__*` environment variables, e.g.
//! `LIFEGUARD_ENUM__ENUM__CONFLICT_CHECK=class_only`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config/enum.toml";
const ENV_PREFIX: &str = "LIFEGUARD_ENUM";

/// How much conflict detection runs before accessors are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictCheck {
    /// Class accessor, plain accessor and setter are all checked
    #[default]
    Full,
    /// Only the class accessor is checked; instance accessors are overwritten
    ClassOnly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumConfig {
    #[serde(default)]
    pub conflict_check: ConflictCheck,
    /// Treat a failed column probe as "not a storage column" instead of
    /// returning the backend error
    #[serde(default = "default_mask_probe_failures")]
    pub mask_probe_failures: bool,
}

fn default_mask_probe_failures() -> bool {
    true
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            conflict_check: ConflictCheck::default(),
            mask_probe_failures: default_mask_probe_failures(),
        }
    }
}

impl EnumConfig {
    /// Load from `config/enum.toml`, falling back to env vars.
    ///
    /// A missing file or missing `[enum]` section yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if neither the file plus environment nor the
    /// environment alone can be read, or if a present section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from an explicit TOML file (optional), then env vars.
    ///
    /// # Errors
    ///
    /// See [`EnumConfig::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if path.exists() {
                    log::warn!(
                        "failed to load enum config from {}, falling back to env: {}",
                        path.display(),
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load enum configuration from file and env: {err}, then env-only error: {env_err}"
                        ))
                    })?
            }
        };

        match settings.get::<EnumConfig>("enum") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Enum configuration could not be loaded from file or environment: {e}"
            ))),
        }
    }
}
