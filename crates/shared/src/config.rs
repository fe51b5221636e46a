//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Locale;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Locale tag used for currency formatting instead of the host locale.
    #[serde(default)]
    pub locale: Option<String>,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "tiptime=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `TIPTIME__*` environment variables. Every source is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TIPTIME").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses the configured locale override.
    ///
    /// Returns `Ok(None)` when no override is set, or it is blank.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the override is not a locale tag.
    pub fn locale_override(&self) -> AppResult<Option<Locale>> {
        match self.locale.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(tag) => Ok(Some(tag.parse()?)),
        }
    }
}
