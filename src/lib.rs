//! Payroll rules and a weather lookup.
//!
//! This crate loads a staff list from CSV, applies the payroll rules
//! (programmer's day bonus, holiday bonus, salary indexation, vacation
//! eligibility, flat-rate taxes), and reports the results as text, as a
//! terminal bar chart, or as JSON over HTTP. A separate binary looks up the
//! current weather for a city through OpenWeatherMap.

#![warn(missing_docs)]

pub mod api;
pub mod app;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod report;
pub mod weather;
