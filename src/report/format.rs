//! Terminal formatting of a payroll run.
//!
//! Labels are fixed Russian strings; money is shown with two decimals except
//! the holiday bonus, which is a whole configured amount.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::TaxRecord;

use super::{BonusLine, IndexationLine, PayrollReport};

/// Rounds half away from zero to kopecks before `{:.2}` padding.
fn money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format programmer's day bonus lines.
pub fn format_programmer_bonuses(lines: &[BonusLine]) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                "Премия ко Дню программиста для {}: {:.2} руб.\n",
                line.full_name,
                money(line.amount)
            )
        })
        .collect()
}

/// Format holiday bonus lines.
pub fn format_holiday_bonuses(lines: &[BonusLine]) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                "Премия к празднику для {}: {} руб.\n",
                line.full_name,
                line.amount.normalize()
            )
        })
        .collect()
}

/// Format indexed salary lines.
pub fn format_indexations(lines: &[IndexationLine]) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                "Индексация зарплаты для {}: {:.2} руб.\n",
                line.full_name,
                money(line.result.new_salary)
            )
        })
        .collect()
}

/// Format the vacation list as a bracketed, quoted list of names.
pub fn format_vacation_list(names: &[String]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| format!("'{}'", name.replace('\'', "\\'")))
        .collect();
    format!(
        "Сотрудники, имеющие право на отпуск: [{}]\n",
        quoted.join(", ")
    )
}

/// Format the total payroll line.
pub fn format_total_payroll(total: Decimal) -> String {
    format!("Фонд оплаты труда: {:.2} руб.\n", money(total))
}

/// Format tax lines.
pub fn format_taxes(records: &[TaxRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "Налоги для {}: {:.2} руб. (подоходный), {:.2} руб. (соц. страх.)\n",
                record.full_name,
                money(record.income_tax),
                money(record.social_tax)
            )
        })
        .collect()
}

/// Format the whole run, with an optional rendered chart before the taxes.
pub fn format_report(report: &PayrollReport, chart: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format_programmer_bonuses(&report.programmer_bonuses));
    out.push_str(&format_holiday_bonuses(&report.holiday_bonuses));
    out.push_str(&format_indexations(&report.indexations));
    out.push_str(&format_vacation_list(&report.vacation_eligible));
    out.push_str(&format_total_payroll(report.total_payroll));
    if let Some(chart) = chart {
        out.push_str(chart);
    }
    out.push_str(&format_taxes(&report.taxes));
    out
}
