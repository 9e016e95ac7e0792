//! Current weather for one city.

use serde::Serialize;

/// The four fields printed by the weather lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    /// City name as returned by the service.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Localized text description, e.g. "облачно".
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: f64,
}
