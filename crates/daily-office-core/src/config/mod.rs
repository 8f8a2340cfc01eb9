//! Configuration for the daily office engine.
//!
//! Only the lectionary and logging are configurable; every calendrical rule
//! is fixed by the Prayer Book.


use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::lectionary::{JsonDirSource, PlanId};

/// Environment variable selecting the environment-specific config file.
pub const ENV_VAR: &str = "DAILY_OFFICE_ENV";

/// Prefix for environment variable overrides, e.g.
/// `DAILY_OFFICE__LECTIONARY__DATA_DIR`.
pub const ENV_PREFIX: &str = "DAILY_OFFICE";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OfficeConfig {
    #[serde(default)]
    pub lectionary: LectionaryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where plan tables live and which plan is read by default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LectionaryConfig {
    /// Directory holding `<plan-id>.json` tables
    pub data_dir: PathBuf,
    /// Plan used when the caller names none
    pub default_plan: PlanId,
}

impl Default for LectionaryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/lectionary"),
            default_plan: PlanId::BcpCivil,
        }
    }
}

impl LectionaryConfig {
    /// Table source reading from [`LectionaryConfig::data_dir`].
    pub fn table_source(&self) -> JsonDirSource {
        JsonDirSource::new(&self.data_dir)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` and `-v`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl OfficeConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{DAILY_OFFICE_ENV}.toml (environment-specific)
    /// 3. Environment variables with DAILY_OFFICE__ prefix
    ///
    /// Missing files are skipped.
    pub fn load() -> ConfigResult<Self> {
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config: OfficeConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(env = %env, ?config, "Configuration loaded");
        Ok(config)
    }

    /// Built-in defaults.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: OfficeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The data directory is not required to exist here; a missing table
    /// surfaces as a load error when the plan is first read.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.lectionary.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid(
                "lectionary.data_dir",
                "must not be empty",
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }
}
