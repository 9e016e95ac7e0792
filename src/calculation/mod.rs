//! Calculation logic for the payroll engine.
//!
//! This module contains the payroll rule calculators: tenure arithmetic,
//! the programmer's day bonus, the holiday bonus, salary indexation,
//! vacation eligibility, flat-rate taxes, and payroll-wide aggregates.
//! Every calculator that depends on tenure takes an explicit as-of date.

mod holiday_bonus;
mod indexation;
mod payroll_totals;
mod programmer_bonus;
mod taxes;
mod tenure;
mod vacation;

pub use holiday_bonus::{
    DEFAULT_HOLIDAY_BONUS, FEMININE_SUFFIX, calculate_holiday_bonus, has_feminine_suffix,
};
pub use indexation::{
    DEFAULT_INDEXATION_OVER_TEN_YEARS, DEFAULT_INDEXATION_UP_TO_TEN_YEARS,
    INDEXATION_TENURE_THRESHOLD_YEARS, IndexationResult, apply_salary_indexation,
    indexation_rate,
};
pub use payroll_totals::{average_salary_by_position, calculate_total_payroll};
pub use programmer_bonus::{
    DEFAULT_PROGRAMMER_BONUS_RATE, PROGRAMMER_KEYWORD, calculate_programmer_bonus, is_programmer,
};
pub use taxes::{
    DEFAULT_INCOME_TAX_RATE, DEFAULT_SOCIAL_TAX_RATE, calculate_tax_record, calculate_taxes,
};
pub use tenure::{DAYS_PER_MONTH, DAYS_PER_YEAR, tenure_days, tenure_months, tenure_years};
pub use vacation::{VACATION_TENURE_THRESHOLD_MONTHS, is_eligible_for_vacation};
