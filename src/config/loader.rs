//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file and resolving the weather API key.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollRates, WeatherConfig};

/// Environment variable consulted for the weather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Configuration file picked up when none is given explicitly.
pub const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Income tax: {}", loader.rates().taxes.income);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A rate or bonus amount is negative
    ///
    /// A relative `input.csv_path` is taken relative to the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut loader = Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        if let (Some(csv_path), Some(base)) = (&mut loader.config.input.csv_path, path.parent()) {
            if csv_path.is_relative() {
                *csv_path = base.join(&*csv_path);
                debug!(csv_path = %csv_path.display(), "Resolved CSV path against config directory");
            }
        }
        Ok(loader)
    }

    /// Loads from `path` when given, otherwise uses the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads `explicit` when given, else [`DEFAULT_CONFIG_PATH`] if that file
    /// exists, else the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> EngineResult<Self> {
        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        let path = explicit.or_else(|| fallback.is_file().then_some(fallback));
        Self::load_or_default(path)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let config: PayrollConfig = if content.trim().is_empty() {
            PayrollConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &PayrollConfig) -> EngineResult<()> {
        for (field, value) in config.rates.named_values() {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::ConfigValidation {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll rule rates.
    pub fn rates(&self) -> &PayrollRates {
        &self.config.rates
    }

    /// Returns the weather settings with the API key resolved.
    ///
    /// Precedence: `cli_key`, then `OPENWEATHER_API_KEY` (a `.env` file in the
    /// working directory is honored), then `weather.api_key` from the file.
    pub fn weather_with_key(&self, cli_key: Option<String>) -> WeatherConfig {
        dotenvy::dotenv().ok();
        let env_key = std::env::var(API_KEY_ENV).ok();
        let mut weather = self.config.weather.clone();
        weather.api_key = resolve_api_key(cli_key, env_key, weather.api_key.take());
        weather
    }
}

fn resolve_api_key(
    cli_key: Option<String>,
    env_key: Option<String>,
    file_key: Option<String>,
) -> Option<String> {
    [cli_key, env_key, file_key]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}
