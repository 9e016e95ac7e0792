//! Core data models for the payroll engine.
//!
//! This module contains the employee record, the derived report rows,
//! and the weather lookup result.

mod employee;
mod position_average;
mod tax_record;
mod weather;

pub use employee::{Employee, HIRE_DATE_FORMATS, parse_hire_date, parse_salary};
pub use position_average::PositionAverage;
pub use tax_record::TaxRecord;
pub use weather::WeatherReport;
