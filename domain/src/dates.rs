//! Date parsing and display helpers shared by the calendar, summary and notes.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use shared::Locale;

use crate::error::AttendanceError;

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a supplied date string into a calendar date.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps and naive date-times. For
/// timestamps the calendar date is taken as written, without shifting into
/// any other time zone.
pub fn parse_attendance_date(value: &str) -> Result<NaiveDate, AttendanceError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|date_time| date_time.date())
        .ok_or_else(|| AttendanceError::InvalidDate {
            value: value.to_string(),
        })
}

/// Get the human-readable name for a 1-based month number
pub fn month_name(month: u32, locale: Locale) -> &'static str {
    match month {
        1..=12 => locale.month_names()[(month - 1) as usize],
        _ => "Invalid Month",
    }
}

/// Long-form date, e.g. "January 5, 2025" or "5 Januari 2025"
pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let month = month_name(date.month(), locale);
    match locale {
        Locale::En => format!("{} {}, {}", month, date.day(), date.year()),
        Locale::Id => format!("{} {} {}", date.day(), month, date.year()),
    }
}

/// Format a supplied date string for display, falling back to the raw text
pub fn format_date_for_display(value: &str, locale: Locale) -> String {
    match parse_attendance_date(value) {
        Ok(date) => format_long_date(date, locale),
        Err(_) => value.to_string(),
    }
}
