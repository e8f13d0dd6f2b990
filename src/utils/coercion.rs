//! Text coercion helpers
//!
//! Lenient conversions from KML text content to numbers, booleans and
//! dates. None of these fail: malformed text degrades to NaN, `false` or
//! an invalid date.

use std::fmt;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref GYEAR: Regex = Regex::new(r"^(-?\d{4,})$").unwrap();
    static ref GYEAR_MONTH: Regex = Regex::new(r"^(-?\d{4,})-(\d{2})$").unwrap();
}

/// Convert text to a number
///
/// Surrounding whitespace is ignored. Empty text and anything that is not a
/// decimal number (or `Infinity` with an optional sign) is NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => f64::NAN,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf" and "nan" spellings that KML never uses
        t if t.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => f64::NAN,
        t => t.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Convert text to a boolean
///
/// `1` and `true` are true, everything else (including `0`, `false` and
/// empty text) is false.
pub fn transform_to_boolean(text: &str) -> bool {
    matches!(text.trim(), "1" | "true")
}

/// A date read from KML, possibly invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmlDate(Option<DateTime<Utc>>);

impl KmlDate {
    /// Marker for text that could not be read as a date
    pub fn invalid() -> Self {
        KmlDate(None)
    }

    /// Parse the date forms KML allows for `when`, `begin` and `end`
    ///
    /// Accepted: `dateTime` with `Z` or an offset, `dateTime` without a zone
    /// (read as UTC), either of those without seconds, `YYYY-MM-DD`, `YYYY-MM` and `YYYY`. Truncated forms
    /// start at the beginning of their period.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();

        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return KmlDate(Some(date_time.with_timezone(&Utc)));
        }

        // Minute precision with an explicit offset
        if let Ok(date_time) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M%:z") {
            return KmlDate(Some(date_time.with_timezone(&Utc)));
        }

        let utc_text = trimmed.strip_suffix('Z').unwrap_or(trimmed);
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(utc_text, format) {
                return KmlDate(Some(naive.and_utc()));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::start_of_day(date);
        }

        if let Some(captures) = GYEAR_MONTH.captures(trimmed) {
            let year = captures[1].parse::<i32>().ok();
            let month = captures[2].parse::<u32>().ok();
            if let (Some(year), Some(month)) = (year, month) {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
                    return Self::start_of_day(date);
                }
            }
            return KmlDate::invalid();
        }

        if let Some(captures) = GYEAR.captures(trimmed) {
            if let Some(date) = captures[1].parse::<i32>().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)) {
                return Self::start_of_day(date);
            }
        }

        KmlDate::invalid()
    }

    fn start_of_day(date: NaiveDate) -> Self {
        KmlDate(date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The instant in UTC, `None` for invalid dates
    pub fn value(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Milliseconds since the Unix epoch, `None` for invalid dates
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.map(|d| d.timestamp_millis())
    }
}

impl fmt::Display for KmlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => f.write_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => f.write_str("Invalid Date"),
        }
    }
}
