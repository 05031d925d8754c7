//! Starter configuration model and loading.
//!
//! # Responsibility
//! - Deserialize optional JSON configuration into typed settings.
//! - Validate values before any bootstrap side effect happens.
//!
//! # Invariants
//! - Missing sections fall back to defaults.
//! - Unknown keys are rejected, not ignored.

use crate::error::{StarterError, StarterResult};
use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "HELLO_STARTER_CONFIG";
/// Greeting emitted by the default `HelloService` implementation.
pub const DEFAULT_GREETING: &str = "Hello from Default";

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarterConfig {
    pub logging: LoggingConfig,
    pub autoconfigure: AutoConfigureConfig,
    pub hello: HelloConfig,
}

/// Logging backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files; stderr when absent.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Auto-configuration selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoConfigureConfig {
    /// Auto-configuration names that must not be applied.
    pub exclude: Vec<String>,
}

impl AutoConfigureConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|value| value.trim() == name)
    }
}

/// Settings for the default greeting provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelloConfig {
    pub default_greeting: String,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            default_greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl StarterConfig {
    /// Parses configuration from a JSON document and validates it.
    pub fn from_json_str(raw: &str) -> StarterResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| StarterError::Config(format!("invalid configuration json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses one configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> StarterResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            StarterError::Config(format!(
                "failed to read configuration `{}`: {err}",
                path.display()
            ))
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads configuration from `HELLO_STARTER_CONFIG`, or defaults when unset.
    pub fn load_from_env() -> StarterResult<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Checks value-level invariants serde cannot express.
    pub fn validate(&self) -> StarterResult<()> {
        normalize_level(&self.logging.level).map_err(StarterError::Config)?;
        if let Some(dir) = &self.logging.log_dir {
            if !dir.is_absolute() {
                return Err(StarterError::Config(format!(
                    "logging.log_dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        if self.hello.default_greeting.trim().is_empty() {
            return Err(StarterError::Config(
                "hello.default_greeting must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
