//! Salary display helpers

use contracts::domain::a001_employee::aggregate::Salary;

/// Currency marker shown before every salary
pub const CURRENCY_MARKER: &str = "Rp";

/// Salary as shown in tables: the stored amount behind the currency marker.
///
/// No locale formatting is applied; the amount is rendered as received.
pub fn format_salary(salary: &Salary) -> String {
    format!("{} {}", CURRENCY_MARKER, salary.as_str())
}
