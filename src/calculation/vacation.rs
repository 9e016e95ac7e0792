//! Vacation eligibility.

use chrono::NaiveDate;

use crate::models::Employee;

use super::tenure::tenure_months;

/// Whole tenure months that must be exceeded to be eligible.
pub const VACATION_TENURE_THRESHOLD_MONTHS: i64 = 6;

/// Returns true if the employee has worked more than six 30-day months.
pub fn is_eligible_for_vacation(employee: &Employee, as_of: NaiveDate) -> bool {
    tenure_months(employee.hire_date(), as_of) > VACATION_TENURE_THRESHOLD_MONTHS
}
