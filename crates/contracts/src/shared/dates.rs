//! Разбор дат, приходящих в текстовом виде

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Calendar date of a textual date or timestamp.
///
/// Accepts RFC 3339 (the date in the stated offset), ISO / SQL-style
/// timestamps without an offset, and bare `YYYY-MM-DD` or `YYYY/MM/DD` dates.
/// Anything else, including blank text, yields `None`.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_bare_dates() {
        assert_eq!(parse_day("2024-03-15"), day(2024, 3, 15));
        assert_eq!(parse_day("2024/03/15"), day(2024, 3, 15));
        assert_eq!(parse_day("  2024-03-15 "), day(2024, 3, 15));
    }

    #[test]
    fn test_parse_timestamps() {
        assert_eq!(parse_day("2024-03-15T14:02:26.123Z"), day(2024, 3, 15));
        assert_eq!(parse_day("2024-03-15T09:30:00+03:00"), day(2024, 3, 15));
        assert_eq!(parse_day("2024-03-15T10:00:00"), day(2024, 3, 15));
        assert_eq!(parse_day("2024-03-15 10:00:00"), day(2024, 3, 15));
        assert_eq!(parse_day("2024-03-15 10:00:00.5"), day(2024, 3, 15));
        assert_eq!(parse_day("2024-03-15T10:00"), day(2024, 3, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("   "), None);
        assert_eq!(parse_day("next week"), None);
        assert_eq!(parse_day("2024-13-40"), None);
        assert_eq!(parse_day("2024-03-15Tlater"), None);
    }
}
