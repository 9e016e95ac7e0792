//! Top-level orchestration for the binaries.
//!
//! `src/bin/*.rs` only map the result to an exit code; this module parses
//! arguments, loads configuration and input, and writes to stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;

use crate::api::{AppState, create_router};
use crate::cli::{PayrollCli, PayrollCommand, ReportArgs, ServeArgs, WeatherCli};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::io::load_employees_from_csv;
use crate::logging::init_logging;
use crate::report::{ChartOptions, PayrollReport, format_report, render_bar_chart};
use crate::weather::{WeatherClient, lookup_and_format};

/// Prompt shown when `weather` is started without a city.
pub const CITY_PROMPT: &str = "Введите город: ";

/// Entry point for the `payroll` binary.
pub fn run_payroll() -> EngineResult<()> {
    let cli = PayrollCli::parse();
    match cli.command {
        PayrollCommand::Report(args) => {
            init_logging(args.verbose);
            let text = run_report(&args)?;
            print!("{text}");
            io::stdout().flush()?;
            Ok(())
        }
        PayrollCommand::Serve(args) => {
            init_logging(args.verbose);
            serve(args)
        }
    }
}

/// Loads the staff list, runs the payroll and returns the printed text.
pub fn run_report(args: &ReportArgs) -> EngineResult<String> {
    let loader = ConfigLoader::discover(args.config.as_deref())?;
    let csv_path = resolve_csv_path(args.csv.clone(), &loader)?;
    let as_of = args.as_of.unwrap_or_else(today);

    let mut employees = load_employees_from_csv(&csv_path)?;
    let report = PayrollReport::build(&mut employees, loader.rates(), as_of)?;

    // Rendered for display, then dropped.
    let chart = (!args.no_chart).then(|| {
        let options = ChartOptions {
            height: args.chart_height,
            ..ChartOptions::default()
        };
        render_bar_chart(&report.position_averages, &options)
    });

    Ok(format_report(&report, chart.as_deref()))
}

fn resolve_csv_path(cli_path: Option<PathBuf>, loader: &ConfigLoader) -> EngineResult<PathBuf> {
    cli_path
        .or_else(|| loader.config().input.csv_path.clone())
        .ok_or(EngineError::MissingInput)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn serve(args: ServeArgs) -> EngineResult<()> {
    let loader = ConfigLoader::discover(args.config.as_deref())?;
    let router = create_router(AppState::new(loader));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(args.addr).await?;
        info!(addr = %args.addr, "Payroll API listening");
        axum::serve(listener, router).await?;
        Ok::<(), EngineError>(())
    })
}

/// Entry point for the `weather` binary.
///
/// A failed lookup is not a process failure: the generic message is printed
/// and the binary exits successfully. Only setup problems (configuration,
/// missing API key, unreadable stdin) are returned as errors.
pub fn run_weather() -> EngineResult<()> {
    let cli = WeatherCli::parse();
    init_logging(cli.verbose);

    let loader = ConfigLoader::discover(cli.config.as_deref())?;
    let client = WeatherClient::new(loader.weather_with_key(cli.api_key))?;

    let city = match cli.city {
        Some(city) => city,
        None => prompt_city(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    print!("{}", lookup_and_format(&client, city.trim()));
    io::stdout().flush()?;
    Ok(())
}

/// Writes [`CITY_PROMPT`] and reads one line.
pub fn prompt_city<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> EngineResult<String> {
    output.write_all(CITY_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
