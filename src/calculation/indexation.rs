//! Salary indexation by tenure bracket.
//!
//! Unlike the bonus calculators, indexation changes the employee: the salary
//! is raised in place by the bracket's rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::IndexationRates;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::tenure::tenure_years;

/// Tenure, in whole years, that must be exceeded for the higher rate.
pub const INDEXATION_TENURE_THRESHOLD_YEARS: i64 = 10;

/// Default rate for tenure over ten years, 7%.
pub const DEFAULT_INDEXATION_OVER_TEN_YEARS: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Default rate for tenure of ten years or less, 5%.
pub const DEFAULT_INDEXATION_UP_TO_TEN_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// The outcome of indexing one employee's salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexationResult {
    /// Salary before indexation.
    pub previous_salary: Decimal,
    /// Salary after indexation; equal to the employee's salary after the call.
    pub new_salary: Decimal,
    /// Whole tenure years used to pick the rate.
    pub tenure_years: i64,
    /// The rate that was applied.
    pub rate: Decimal,
}

/// Picks the indexation rate for a tenure in whole years.
pub fn indexation_rate(tenure_years: i64, rates: &IndexationRates) -> Decimal {
    if tenure_years > INDEXATION_TENURE_THRESHOLD_YEARS {
        rates.over_ten_years
    } else {
        rates.up_to_ten_years
    }
}

/// Raises the employee's salary by the rate of their tenure bracket.
///
/// The salary is mutated in place; the returned result carries the new
/// value.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_salary_indexation;
/// use payroll_engine::config::IndexationRates;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("Петров", "Инженер", "01.01.2010", Decimal::new(100_000, 0)).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// let result = apply_salary_indexation(&mut employee, &IndexationRates::default(), as_of).unwrap();
/// assert_eq!(result.new_salary, Decimal::new(107_000, 0));
/// assert_eq!(employee.salary(), result.new_salary);
/// ```
pub fn apply_salary_indexation(
    employee: &mut Employee,
    rates: &IndexationRates,
    as_of: NaiveDate,
) -> EngineResult<IndexationResult> {
    let previous_salary = employee.salary();
    let years = tenure_years(employee.hire_date(), as_of);
    let rate = indexation_rate(years, rates);

    let new_salary = previous_salary
        .checked_mul(rate)
        .and_then(|raise| previous_salary.checked_add(raise))
        .ok_or_else(|| EngineError::overflow(format!("индексация для {}", employee.full_name())))?;
    employee.set_salary(new_salary)?;

    debug!(
        employee = employee.full_name(),
        tenure_years = years,
        rate = %rate,
        previous_salary = %previous_salary,
        new_salary = %new_salary,
        "Indexed salary"
    );

    Ok(IndexationResult {
        previous_salary,
        new_salary,
        tenure_years: years,
        rate,
    })
}
