//! Request types for the payroll API.
//!
//! Employees arrive in the same shape as a CSV row: the hire date is text in
//! one of the accepted formats and the salary may be a number or text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, parse_salary};

/// Request body for the `/payroll/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReportRequest {
    /// The staff list to run the payroll over.
    pub employees: Vec<EmployeeRequest>,
    /// Date tenure is measured against; today when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// One employee in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Full name, surname first.
    pub full_name: String,
    /// Job title.
    pub position: String,
    /// Hire date as `DD.MM.YYYY` or `MM/DD/YYYY`.
    pub hire_date: String,
    /// Monthly salary.
    pub salary: SalaryInput,
}

/// A salary given either as a JSON number or as spreadsheet text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    /// A numeric amount.
    Amount(Decimal),
    /// Text such as `"120,000"`, parsed like a CSV cell.
    Text(String),
}

impl SalaryInput {
    fn resolve(&self) -> EngineResult<Decimal> {
        match self {
            SalaryInput::Amount(amount) => Ok(*amount),
            SalaryInput::Text(text) => parse_salary(text),
        }
    }
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        let salary = req.salary.resolve()?;
        Employee::new(req.full_name, req.position, &req.hire_date, salary)
    }
}
