//! Employee model and salary/hire-date validation.
//!
//! An [`Employee`] is created once per CSV row (or API entry). Name and
//! position never change afterwards; the salary can only be replaced through
//! [`Employee::set_salary`], which re-applies the same validation as the
//! constructor.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Accepted hire date formats, tried in order.
pub const HIRE_DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%m/%d/%Y"];

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    full_name: String,
    position: String,
    hire_date: NaiveDate,
    salary: Decimal,
}

impl Employee {
    /// Creates an employee, parsing the hire date from text.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHireDate`] when the date matches none of
    /// [`HIRE_DATE_FORMATS`], and [`EngineError::InvalidSalary`] when the
    /// salary is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     "Петров Пётр",
    ///     "Ведущий программист",
    ///     "15.03.2012",
    ///     Decimal::new(100_000, 0),
    /// )
    /// .unwrap();
    /// assert_eq!(employee.salary(), Decimal::new(100_000, 0));
    ///
    /// assert!(Employee::new("Петров Пётр", "Тестировщик", "2024-01-01", Decimal::ONE).is_err());
    /// ```
    pub fn new(
        full_name: impl Into<String>,
        position: impl Into<String>,
        hire_date: &str,
        salary: Decimal,
    ) -> EngineResult<Self> {
        let hire_date = parse_hire_date(hire_date)?;
        Self::with_hire_date(full_name, position, hire_date, salary)
    }

    /// Creates an employee from an already parsed hire date.
    pub fn with_hire_date(
        full_name: impl Into<String>,
        position: impl Into<String>,
        hire_date: NaiveDate,
        salary: Decimal,
    ) -> EngineResult<Self> {
        Ok(Self {
            full_name: full_name.into(),
            position: position.into(),
            hire_date,
            salary: validate_salary(salary)?,
        })
    }

    /// Returns the employee's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the employee's position title.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the current salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Replaces the salary after validating it.
    pub fn set_salary(&mut self, salary: Decimal) -> EngineResult<()> {
        self.salary = validate_salary(salary)?;
        Ok(())
    }

    /// The last whitespace-separated word of the full name.
    pub fn last_name_word(&self) -> Option<&str> {
        self.full_name.split_whitespace().last()
    }
}

fn validate_salary(salary: Decimal) -> EngineResult<Decimal> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(EngineError::invalid_salary(salary));
    }
    Ok(salary)
}

/// Parses a hire date, trying each of [`HIRE_DATE_FORMATS`] in turn.
pub fn parse_hire_date(text: &str) -> EngineResult<NaiveDate> {
    let trimmed = text.trim();
    HIRE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| EngineError::InvalidHireDate {
            value: text.to_string(),
        })
}

/// Parses salary text such as `"120,500.50"`.
///
/// Comma thousands separators are stripped before parsing; anything that is
/// not a non-negative decimal afterwards is rejected.
pub fn parse_salary(text: &str) -> EngineResult<Decimal> {
    let normalized: String = text.trim().chars().filter(|c| *c != ',').collect();
    let salary = Decimal::from_str(&normalized).map_err(|_| EngineError::InvalidSalary {
        value: text.to_string(),
    })?;
    validate_salary(salary)
}
