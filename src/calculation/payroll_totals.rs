//! Payroll-wide aggregates: total salary fund and averages per position.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PositionAverage};

/// Sum of all current salaries.
///
/// Fails with [`EngineError::AmountOverflow`] when the sum leaves the
/// decimal range.
pub fn calculate_total_payroll(employees: &[Employee]) -> EngineResult<Decimal> {
    employees
        .iter()
        .try_fold(Decimal::ZERO, |total, employee| {
            total.checked_add(employee.salary())
        })
        .ok_or_else(|| EngineError::overflow("фонд оплаты труда"))
}

/// Groups employees by position and averages their current salaries.
///
/// Groups are ordered by position title.
pub fn average_salary_by_position(employees: &[Employee]) -> EngineResult<Vec<PositionAverage>> {
    let mut groups: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for employee in employees {
        let entry = groups.entry(employee.position()).or_insert((Decimal::ZERO, 0));
        entry.0 = entry
            .0
            .checked_add(employee.salary())
            .ok_or_else(|| EngineError::overflow(format!("оклады должности {}", employee.position())))?;
        entry.1 += 1;
    }

    Ok(groups
        .into_iter()
        .map(|(position, (sum, count))| PositionAverage {
            position: position.to_string(),
            average_salary: sum / Decimal::from(count),
            employees: count,
        })
        .collect())
}
