//! Payroll date parsing.
//!
//! Exports from different systems write dates differently. This module
//! accepts the common unambiguous forms (ISO dates and date-times, textual
//! month names) and numeric `a/b/yyyy` dates, where the configured
//! [`DateOrder`] settles the day/month order only when both leading parts
//! could be a month.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Which component comes first in an ambiguous numeric date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `03/04/2024` is 4 March 2024.
    #[default]
    MonthFirst,
    /// `03/04/2024` is 3 April 2024.
    DayFirst,
}

const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const TEXT_DATE_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d %b %Y",
    "%d-%B-%Y",
    "%d-%b-%Y",
    "%B %d %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a payroll date, returning `None` if the value is not a date.
///
/// # Example
///
/// ```
/// use hours_review::ingest::{DateOrder, parse_payroll_date};
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 14);
///
/// assert_eq!(parse_payroll_date("2024-03-14", DateOrder::MonthFirst), expected);
/// assert_eq!(parse_payroll_date("14 Mar 2024", DateOrder::MonthFirst), expected);
/// assert_eq!(parse_payroll_date("14/03/2024", DateOrder::MonthFirst), expected);
/// assert_eq!(parse_payroll_date("03/14/2024 08:30", DateOrder::DayFirst), expected);
/// assert_eq!(parse_payroll_date("not a date", DateOrder::MonthFirst), None);
/// ```
pub fn parse_payroll_date(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(date) = parse_date_only(value, order) {
        return Some(date);
    }

    if starts_with_year(value) {
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
                return Some(datetime.date());
            }
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(datetime.date_naive());
        }
    }

    // "14/03/2024 08:30 AM" and similar: drop the time tokens and retry.
    let date_part = strip_time(value);
    if date_part.len() < value.len() && !date_part.is_empty() {
        return parse_date_only(&date_part, order);
    }

    None
}

fn parse_date_only(value: &str, order: DateOrder) -> Option<NaiveDate> {
    // %Y alone would read "3-4-24" as the year 3.
    if starts_with_year(value) {
        return ISO_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok());
    }

    TEXT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| parse_numeric(value, order))
}

fn starts_with_year(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && !bytes[4].is_ascii_digit()
}

/// Parses `a/b/year` with `/`, `-` or `.` separators.
fn parse_numeric(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let separator = ['/', '-', '.'].into_iter().find(|s| value.contains(*s))?;
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != 3
        || parts[0].len() > 2
        || parts[1].len() > 2
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let year = match parts[2].len() {
        4 => parts[2].parse::<i32>().ok()?,
        2 => {
            let short: i32 = parts[2].parse().ok()?;
            if short < 70 { 2000 + short } else { 1900 + short }
        }
        _ => return None,
    };

    let (month, day) = if first > 12 {
        (second, first)
    } else if second > 12 {
        (first, second)
    } else {
        match order {
            DateOrder::MonthFirst => (first, second),
            DateOrder::DayFirst => (second, first),
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn strip_time(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    while let Some(last) = tokens.last() {
        let is_time = last.contains(':')
            || last.eq_ignore_ascii_case("am")
            || last.eq_ignore_ascii_case("pm");
        if !is_time {
            break;
        }
        tokens.pop();
    }
    tokens.join(" ")
}
