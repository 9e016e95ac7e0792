//! Configuration loading and management for the payroll engine.
//!
//! This module loads payroll rule rates, the default input path and the
//! weather lookup settings from a YAML file. Every setting has a built-in
//! default, so running without a file reproduces the standard rules.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Programmer bonus: {}", config.rates().programmer_bonus);
//! ```

mod loader;
mod types;

pub use loader::{API_KEY_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    DEFAULT_WEATHER_URL, HolidayBonusRates, IndexationRates, InputConfig, PayrollConfig,
    PayrollRates, TaxRates, WeatherConfig,
};
