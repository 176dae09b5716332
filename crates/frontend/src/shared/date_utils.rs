//! Utilities for date formatting
//!
//! Dates are shown day first with slashes

use chrono::NaiveDate;
use contracts::shared::dates::parse_day;

/// Format a calendar date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date or timestamp string as DD/MM/YYYY.
/// Example: "2024-03-15 10:00:00" -> "15/03/2024"
/// Strings that are not dates are returned unchanged.
pub fn format_date(date_str: &str) -> String {
    match parse_day(date_str) {
        Some(date) => format_day(date),
        None => date_str.to_string(),
    }
}
