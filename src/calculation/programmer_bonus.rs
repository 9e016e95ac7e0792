//! Programmer's day bonus.
//!
//! Employees whose position mentions "программист" in any letter case get a
//! share of their current salary; everyone else gets nothing.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Position keyword that qualifies for the bonus, lower-case.
pub const PROGRAMMER_KEYWORD: &str = "программист";

/// Default bonus rate, 3% of salary.
pub const DEFAULT_PROGRAMMER_BONUS_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Returns true if the position title contains [`PROGRAMMER_KEYWORD`],
/// ignoring case.
pub fn is_programmer(position: &str) -> bool {
    position.to_lowercase().contains(PROGRAMMER_KEYWORD)
}

/// Calculates the programmer's day bonus for an employee.
///
/// Returns `salary * rate` for programmers and zero otherwise. The salary
/// is not changed. A product outside the `Decimal` range is
/// [`EngineError::AmountOverflow`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_programmer_bonus, DEFAULT_PROGRAMMER_BONUS_RATE};
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let dev = Employee::new("Петров Пётр", "Ведущий программист", "01.01.2020", Decimal::new(100_000, 0)).unwrap();
/// assert_eq!(
///     calculate_programmer_bonus(&dev, DEFAULT_PROGRAMMER_BONUS_RATE).unwrap(),
///     Decimal::new(3000, 0)
/// );
/// ```
pub fn calculate_programmer_bonus(employee: &Employee, rate: Decimal) -> EngineResult<Decimal> {
    if !is_programmer(employee.position()) {
        return Ok(Decimal::ZERO);
    }
    employee.salary().checked_mul(rate).ok_or_else(|| {
        EngineError::overflow(format!("премия ко Дню программиста для {}", employee.full_name()))
    })
}
