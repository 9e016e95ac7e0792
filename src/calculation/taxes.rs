//! Flat-rate tax breakdown.

use rust_decimal::Decimal;

use crate::config::TaxRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, TaxRecord};

/// Default income tax rate, 13%.
pub const DEFAULT_INCOME_TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Default social insurance rate, 30%.
pub const DEFAULT_SOCIAL_TAX_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Computes income and social tax on one employee's current salary.
///
/// Fails with [`EngineError::AmountOverflow`] when a tax or the total leaves
/// the `Decimal` range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax_record;
/// use payroll_engine::config::TaxRates;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Иванов", "Менеджер", "01.01.2020", Decimal::new(100_000, 0)).unwrap();
/// let record = calculate_tax_record(&employee, &TaxRates::default()).unwrap();
/// assert_eq!(record.income_tax, Decimal::new(13_000, 0));
/// assert_eq!(record.social_tax, Decimal::new(30_000, 0));
/// assert_eq!(record.total, Decimal::new(43_000, 0));
/// ```
pub fn calculate_tax_record(employee: &Employee, rates: &TaxRates) -> EngineResult<TaxRecord> {
    let overflow = || EngineError::overflow(format!("налоги для {}", employee.full_name()));
    let salary = employee.salary();
    let income_tax = salary.checked_mul(rates.income).ok_or_else(overflow)?;
    let social_tax = salary.checked_mul(rates.social).ok_or_else(overflow)?;
    let total = income_tax.checked_add(social_tax).ok_or_else(overflow)?;

    Ok(TaxRecord {
        full_name: employee.full_name().to_string(),
        salary,
        income_tax,
        social_tax,
        total,
    })
}

/// Computes tax records for every employee, in input order.
pub fn calculate_taxes(employees: &[Employee], rates: &TaxRates) -> EngineResult<Vec<TaxRecord>> {
    employees
        .iter()
        .map(|employee| calculate_tax_record(employee, rates))
        .collect()
}
