//! Utilities for date formatting
//!
//! Employee dates are shown as DD-MM-YYYY everywhere in the dashboard

use chrono::NaiveDate;

pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Format a calendar date for display
/// Example: 2024-03-15 -> "15-03-2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05-03-2024");
    }

    #[test]
    fn test_format_date_keeps_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(2009, 1, 9).unwrap();
        assert_eq!(format_date(date), "09-01-2009");
    }
}
