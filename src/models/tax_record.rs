//! Derived per-employee tax figures.

use rust_decimal::Decimal;
use serde::Serialize;

/// Income and social tax owed on one employee's current salary.
///
/// Records are computed on demand from the employee list and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxRecord {
    /// The employee's full name.
    pub full_name: String,
    /// The salary the taxes were computed from.
    pub salary: Decimal,
    /// Flat income tax on the salary.
    pub income_tax: Decimal,
    /// Flat social insurance contribution on the salary.
    pub social_tax: Decimal,
    /// `income_tax + social_tax`.
    pub total: Decimal,
}
