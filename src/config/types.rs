//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `payroll.yaml`. Every field has a default equal to
//! the built-in rule constants, so an empty file behaves like no file.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

use crate::calculation::{
    DEFAULT_HOLIDAY_BONUS, DEFAULT_INCOME_TAX_RATE, DEFAULT_INDEXATION_OVER_TEN_YEARS,
    DEFAULT_INDEXATION_UP_TO_TEN_YEARS, DEFAULT_PROGRAMMER_BONUS_RATE, DEFAULT_SOCIAL_TAX_RATE,
};

/// Default OpenWeatherMap current-weather endpoint.
pub const DEFAULT_WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Input file locations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Employee CSV used when `--csv` is not given.
    pub csv_path: Option<PathBuf>,
}

/// Fixed holiday bonus amounts selected by the name-suffix heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HolidayBonusRates {
    /// Amount paid when the last name word ends in "а".
    pub women: Decimal,
    /// Amount paid otherwise.
    pub men: Decimal,
}

impl Default for HolidayBonusRates {
    fn default() -> Self {
        Self {
            women: DEFAULT_HOLIDAY_BONUS,
            men: DEFAULT_HOLIDAY_BONUS,
        }
    }
}

/// Salary indexation rates by tenure bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexationRates {
    /// Rate applied when tenure exceeds ten whole years.
    pub over_ten_years: Decimal,
    /// Rate applied otherwise.
    pub up_to_ten_years: Decimal,
}

impl Default for IndexationRates {
    fn default() -> Self {
        Self {
            over_ten_years: DEFAULT_INDEXATION_OVER_TEN_YEARS,
            up_to_ten_years: DEFAULT_INDEXATION_UP_TO_TEN_YEARS,
        }
    }
}

/// Flat tax percentages applied to the current salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaxRates {
    /// Income tax rate.
    pub income: Decimal,
    /// Social insurance rate.
    pub social: Decimal,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_TAX_RATE,
            social: DEFAULT_SOCIAL_TAX_RATE,
        }
    }
}

/// All rates used by a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollRates {
    /// Share of salary paid as the programmer's day bonus.
    pub programmer_bonus: Decimal,
    /// Holiday bonus amounts.
    pub holiday_bonus: HolidayBonusRates,
    /// Indexation rates.
    pub indexation: IndexationRates,
    /// Tax rates.
    pub taxes: TaxRates,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            programmer_bonus: DEFAULT_PROGRAMMER_BONUS_RATE,
            holiday_bonus: HolidayBonusRates::default(),
            indexation: IndexationRates::default(),
            taxes: TaxRates::default(),
        }
    }
}

impl PayrollRates {
    /// Every rate and amount with its configuration key, for validation.
    pub(crate) fn named_values(&self) -> [(&'static str, Decimal); 7] {
        [
            ("rates.programmer_bonus", self.programmer_bonus),
            ("rates.holiday_bonus.women", self.holiday_bonus.women),
            ("rates.holiday_bonus.men", self.holiday_bonus.men),
            ("rates.indexation.over_ten_years", self.indexation.over_ten_years),
            ("rates.indexation.up_to_ten_years", self.indexation.up_to_ten_years),
            ("rates.taxes.income", self.taxes.income),
            ("rates.taxes.social", self.taxes.social),
        ]
    }
}

/// Weather lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Current-weather endpoint.
    pub base_url: String,
    /// API key; usually supplied through `OPENWEATHER_API_KEY` instead.
    pub api_key: Option<String>,
    /// Unit system requested from the service.
    pub units: String,
    /// Language of the returned description.
    pub lang: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_URL.to_string(),
            api_key: None,
            units: "metric".to_string(),
            lang: "ru".to_string(),
        }
    }
}

/// The complete configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Input file locations.
    pub input: InputConfig,
    /// Payroll rule rates.
    pub rates: PayrollRates,
    /// Weather lookup settings.
    pub weather: WeatherConfig,
}
