//! Command-line parsing for the `payroll` and `weather` binaries.
//!
//! Argument parsing lives here; dispatch lives in [`crate::app`].

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::API_KEY_ENV;

/// Top-level CLI of the `payroll` binary.
#[derive(Debug, Parser)]
#[command(name = "payroll", version, about = "Payroll rules over an employee CSV")]
pub struct PayrollCli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: PayrollCommand,
}

/// `payroll` subcommands.
#[derive(Debug, Subcommand)]
pub enum PayrollCommand {
    /// Load employees, apply every rule and print the report with the chart.
    Report(ReportArgs),
    /// Serve `POST /payroll/report` over HTTP.
    Serve(ServeArgs),
}

/// Options for `payroll report`.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Employee CSV; falls back to `input.csv_path` from the config.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Date tenure is measured against (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Skip the bar chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Chart height in rows.
    #[arg(long, default_value_t = 12)]
    pub chart_height: usize,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Options for `payroll serve`.
#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Help footer of the `weather` binary.
pub const WEATHER_KEY_NOTE: &str = "An API key is required: pass --api-key, set OPENWEATHER_API_KEY \
(a .env file works) or weather.api_key in the config. Without one the command exits \
with status 2 before any request is made.";

/// CLI of the `weather` binary.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Current weather for a city",
    after_help = WEATHER_KEY_NOTE
)]
pub struct WeatherCli {
    /// City to look up; prompted for when omitted.
    pub city: Option<String>,

    /// YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// OpenWeatherMap API key; required, see the note below.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
