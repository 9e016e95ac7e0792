//! Error types for the payroll engine and the weather lookup.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading employees,
//! applying payroll rules, reading configuration, or querying the weather API.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All payroll operations return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidHireDate {
///     value: "2024-01-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Неверный формат даты: 2024-01-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the rules cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    ConfigValidation {
        /// The offending configuration key.
        field: String,
        /// A description of what is wrong with it.
        message: String,
    },

    /// No weather API key was supplied by flag, environment, or config.
    #[error("Missing weather API key (set OPENWEATHER_API_KEY or weather.api_key)")]
    MissingApiKey,

    /// No employee CSV path was supplied by flag or config.
    #[error("No employee CSV given (use --csv or input.csv_path)")]
    MissingInput,

    /// The employee CSV could not be opened.
    #[error("Employee file not found: {path}")]
    InputNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// The employee CSV is not well-formed.
    #[error("Failed to read employee CSV: {message}")]
    Csv {
        /// A description of the CSV error.
        message: String,
    },

    /// A required column is absent from the CSV header.
    #[error("Missing column '{column}' in employee CSV")]
    MissingColumn {
        /// The column name that was expected.
        column: String,
    },

    /// A salary value is not a non-negative number.
    #[error("Зарплата должна быть неотрицательным числом: {value}")]
    InvalidSalary {
        /// The rejected value as text.
        value: String,
    },

    /// A salary cell in the CSV could not be parsed.
    #[error("Неверное значение зарплаты для {employee}: {value}")]
    InvalidCsvSalary {
        /// The full name of the employee on the offending row.
        employee: String,
        /// The raw salary text.
        value: String,
    },

    /// A hire date matched none of the accepted formats.
    #[error("Неверный формат даты: {value}")]
    InvalidHireDate {
        /// The rejected date text.
        value: String,
    },

    /// A monetary amount exceeded the range of the decimal type.
    #[error("Слишком большая сумма: {context}")]
    AmountOverflow {
        /// What was being computed, naming the employee or group.
        context: String,
    },

    /// A general I/O failure outside configuration or input loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Process exit code for this error when it terminates a binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::ConfigValidation { .. }
            | EngineError::MissingApiKey => 2,
            EngineError::MissingInput
            | EngineError::InputNotFound { .. }
            | EngineError::Csv { .. }
            | EngineError::MissingColumn { .. }
            | EngineError::InvalidSalary { .. }
            | EngineError::InvalidCsvSalary { .. }
            | EngineError::InvalidHireDate { .. }
            | EngineError::AmountOverflow { .. } => 3,
            EngineError::Io(_) => 1,
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        EngineError::AmountOverflow {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_salary(value: Decimal) -> Self {
        EngineError::InvalidSalary {
            value: value.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure kinds of a weather lookup.
///
/// Callers can tell the causes apart, while the command-line presentation
/// collapses all of them into [`WeatherError::USER_MESSAGE`].
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request could not be sent, or the server answered with a
    /// non-success status other than 404.
    #[error("weather request failed: {message}")]
    Network {
        /// A description of the transport or status failure.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to parse weather response: {message}")]
    Parse {
        /// A description of the parse failure.
        message: String,
    },

    /// The service does not know the requested city.
    #[error("city not found: {city}")]
    NotFound {
        /// The city that was looked up.
        city: String,
    },
}

impl WeatherError {
    /// The single generic line shown to users for any failure.
    pub const USER_MESSAGE: &'static str =
        "Ошибка: что-то пошло не так, возможно, вы ввели неправильное название города";

    /// Returns the user-facing message for this error.
    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}
