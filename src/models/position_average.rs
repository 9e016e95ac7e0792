//! Average salary per position, one bar of the salary chart.

use rust_decimal::Decimal;
use serde::Serialize;

/// Mean current salary of all employees sharing a position title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionAverage {
    /// The position title as written in the input.
    pub position: String,
    /// Arithmetic mean of the group's salaries.
    pub average_salary: Decimal,
    /// Number of employees in the group.
    pub employees: usize,
}
