//! Holiday bonus (8 March / 23 February).
//!
//! There is no gender field on an employee. The amount is picked by a name
//! heuristic: if the last word of the full name ends in the Cyrillic letter
//! "а" the women's amount is paid, otherwise the men's amount. This mirrors
//! how the payroll has always been computed and is kept as is.

use rust_decimal::Decimal;

use crate::config::HolidayBonusRates;
use crate::models::Employee;

/// Default holiday bonus for both groups.
pub const DEFAULT_HOLIDAY_BONUS: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Ending of the last name word that selects the women's amount.
pub const FEMININE_SUFFIX: char = 'а';

/// Returns true if the full name takes the women's holiday bonus.
pub fn has_feminine_suffix(employee: &Employee) -> bool {
    employee
        .last_name_word()
        .is_some_and(|word| word.ends_with(FEMININE_SUFFIX))
}

/// Calculates the fixed holiday bonus for an employee.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_holiday_bonus;
/// use payroll_engine::config::HolidayBonusRates;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let rates = HolidayBonusRates { women: Decimal::new(1500, 0), men: Decimal::new(3000, 0) };
/// let anna = Employee::new("Анна Иванова", "Бухгалтер", "01.01.2020", Decimal::ONE).unwrap();
/// assert_eq!(calculate_holiday_bonus(&anna, &rates), Decimal::new(1500, 0));
/// ```
pub fn calculate_holiday_bonus(employee: &Employee, rates: &HolidayBonusRates) -> Decimal {
    if has_feminine_suffix(employee) {
        rates.women
    } else {
        rates.men
    }
}
