//! Payroll run: rule application in a fixed order, plus terminal output.
//!
//! We keep the run order and all formatting in one place so:
//! - the calculators stay small and side-effect free (except indexation)
//! - the CLI and the HTTP API produce the same figures

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::calculation::{
    IndexationResult, apply_salary_indexation, average_salary_by_position,
    calculate_holiday_bonus, calculate_programmer_bonus, calculate_taxes,
    calculate_total_payroll, is_eligible_for_vacation,
};
use crate::config::PayrollRates;
use crate::error::EngineResult;
use crate::models::{Employee, PositionAverage, TaxRecord};

pub mod chart;
pub mod format;

pub use chart::{CHART_TITLE, CHART_Y_LABEL, ChartOptions, render_bar_chart};
pub use format::*;

/// A bonus paid to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusLine {
    /// The employee's full name.
    pub full_name: String,
    /// The bonus amount.
    pub amount: Decimal,
}

/// Indexation outcome for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexationLine {
    /// The employee's full name.
    pub full_name: String,
    /// Salary before/after and the applied rate.
    #[serde(flatten)]
    pub result: IndexationResult,
}

/// Everything a payroll run produces.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollReport {
    /// Date tenure was measured against.
    pub as_of: NaiveDate,
    /// Non-zero programmer's day bonuses, computed on pre-indexation salaries.
    pub programmer_bonuses: Vec<BonusLine>,
    /// Holiday bonuses for every employee.
    pub holiday_bonuses: Vec<BonusLine>,
    /// Indexation of every employee's salary.
    pub indexations: Vec<IndexationLine>,
    /// Names of employees eligible for vacation.
    pub vacation_eligible: Vec<String>,
    /// Sum of salaries after indexation.
    pub total_payroll: Decimal,
    /// Average salary per position after indexation.
    pub position_averages: Vec<PositionAverage>,
    /// Tax breakdown on salaries after indexation.
    pub taxes: Vec<TaxRecord>,
}

impl PayrollReport {
    /// Applies every payroll rule to `employees`, in order.
    ///
    /// 1. programmer's day bonus
    /// 2. holiday bonus
    /// 3. salary indexation (mutates `employees`)
    /// 4. vacation eligibility
    /// 5. total payroll
    /// 6. averages by position
    /// 7. taxes
    ///
    /// Any amount leaving the `Decimal` range stops the run with
    /// [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow).
    pub fn build(
        employees: &mut [Employee],
        rates: &PayrollRates,
        as_of: NaiveDate,
    ) -> EngineResult<Self> {
        let mut programmer_bonuses = Vec::new();
        for employee in employees.iter() {
            let amount = calculate_programmer_bonus(employee, rates.programmer_bonus)?;
            if amount > Decimal::ZERO {
                programmer_bonuses.push(BonusLine {
                    full_name: employee.full_name().to_string(),
                    amount,
                });
            }
        }

        let holiday_bonuses = employees
            .iter()
            .map(|e| BonusLine {
                full_name: e.full_name().to_string(),
                amount: calculate_holiday_bonus(e, &rates.holiday_bonus),
            })
            .collect();

        let mut indexations = Vec::with_capacity(employees.len());
        for employee in employees.iter_mut() {
            let result = apply_salary_indexation(employee, &rates.indexation, as_of)?;
            indexations.push(IndexationLine {
                full_name: employee.full_name().to_string(),
                result,
            });
        }

        let vacation_eligible = employees
            .iter()
            .filter(|e| is_eligible_for_vacation(e, as_of))
            .map(|e| e.full_name().to_string())
            .collect();

        let total_payroll = calculate_total_payroll(employees)?;
        let position_averages = average_salary_by_position(employees)?;
        let taxes = calculate_taxes(employees, &rates.taxes)?;

        info!(
            employees = employees.len(),
            as_of = %as_of,
            total_payroll = %total_payroll,
            "Payroll report built"
        );

        Ok(Self {
            as_of,
            programmer_bonuses,
            holiday_bonuses,
            indexations,
            vacation_eligible,
            total_payroll,
            position_averages,
            taxes,
        })
    }
}
