//! OpenWeatherMap current-weather lookup.
//!
//! One blocking GET per lookup, no retries and no explicit timeout. Failures
//! are classified into [`WeatherError`] so callers can tell them apart; the
//! command-line front end still shows a single generic message.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::error::{EngineError, EngineResult, WeatherError};
use crate::models::WeatherReport;

/// Blocking client for the current-weather endpoint.
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl WeatherClient {
    /// Creates a client from resolved settings.
    ///
    /// Fails with [`EngineError::MissingApiKey`] when no key is configured.
    pub fn new(config: WeatherConfig) -> EngineResult<Self> {
        let api_key = config.api_key.ok_or(EngineError::MissingApiKey)?;
        Ok(Self {
            client: Client::new(),
            base_url: config.base_url,
            api_key,
            units: config.units,
            lang: config.lang,
        })
    }

    /// Fetches the current weather for `city`.
    pub fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        debug!(city, url = %self.base_url, "Requesting current weather");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .map_err(|e| WeatherError::Network {
                message: e.to_string(),
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            warn!(city, "Weather service does not know the city");
            return Err(WeatherError::NotFound {
                city: city.to_string(),
            });
        }
        if !status.is_success() {
            warn!(city, status = %status, "Weather request rejected");
            return Err(WeatherError::Network {
                message: format!("status {status}"),
            });
        }

        let body = resp.text().map_err(|e| WeatherError::Network {
            message: format!("failed to read body: {e}"),
        })?;
        parse_weather_response(&body)
    }
}

/// Extracts city, temperature, description and humidity from a response body.
pub fn parse_weather_response(body: &str) -> Result<WeatherReport, WeatherError> {
    let raw: openweather::CurrentWeather =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse {
            message: e.to_string(),
        })?;
    raw.try_into()
}

/// Format a report as the four printed lines.
pub fn format_weather(report: &WeatherReport) -> String {
    format!(
        "Погода в городе {}:\nТемпература: {}°C\nОписание: {}\nВлажность: {}%\n",
        report.city, report.temperature, report.description, report.humidity
    )
}

/// Runs one lookup and returns the text to print, success or not.
///
/// The cause of a failure is logged; the returned text is the generic
/// [`WeatherError::USER_MESSAGE`].
pub fn lookup_and_format(client: &WeatherClient, city: &str) -> String {
    match client.fetch(city) {
        Ok(report) => format_weather(&report),
        Err(err) => {
            warn!(city, error = %err, "Weather lookup failed");
            format!("{}\n", err.user_message())
        }
    }
}

/// OpenWeatherMap response structures.
mod openweather {
    use serde::Deserialize;

    use crate::error::WeatherError;
    use crate::models::WeatherReport;

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub name: String,
        pub main: Main,
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Main {
        pub temp: f64,
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    impl TryFrom<CurrentWeather> for WeatherReport {
        type Error = WeatherError;

        fn try_from(raw: CurrentWeather) -> Result<Self, Self::Error> {
            let condition = raw.weather.into_iter().next().ok_or_else(|| WeatherError::Parse {
                message: "empty `weather` array".to_string(),
            })?;
            Ok(WeatherReport {
                city: raw.name,
                temperature: raw.main.temp,
                description: condition.description,
                humidity: raw.main.humidity,
            })
        }
    }
}
