//! Tenure arithmetic.
//!
//! Tenure is counted from raw day differences, not calendar months or years:
//! a "year" is 365 days and a "month" is 30 days, with floor division. Leap
//! days and month lengths are deliberately ignored, so an employee hired
//! exactly ten calendar years ago has 3652 or 3653 days and still counts ten
//! whole years.

use chrono::NaiveDate;

/// Days per tenure year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Days per tenure month.
pub const DAYS_PER_MONTH: i64 = 30;

/// Signed number of days from `hire_date` to `as_of`.
pub fn tenure_days(hire_date: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - hire_date).num_days()
}

/// Whole tenure years, `floor(days / 365)`.
///
/// A hire date after `as_of` yields a negative value.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tenure_years;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(tenure_years(hired, as_of), 11);
/// ```
pub fn tenure_years(hire_date: NaiveDate, as_of: NaiveDate) -> i64 {
    tenure_days(hire_date, as_of).div_euclid(DAYS_PER_YEAR)
}

/// Whole tenure months, `floor(days / 30)`.
pub fn tenure_months(hire_date: NaiveDate, as_of: NaiveDate) -> i64 {
    tenure_days(hire_date, as_of).div_euclid(DAYS_PER_MONTH)
}
