//! Day detection for payroll dates.
//!
//! This module derives the calendar attributes attached to every daily total:
//! the English day name and whether the date falls inside the configured work
//! week. The default work week is Monday through Friday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Whether a date falls inside or outside the work week.
///
/// # Example
///
/// ```
/// use hours_review::calculation::DayType;
///
/// assert_eq!(DayType::Weekend.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// A day inside the work week.
    Weekday,
    /// A day outside the work week.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// The set of weekdays treated as working days.
///
/// # Example
///
/// ```
/// use hours_review::calculation::WorkWeek;
/// use chrono::NaiveDate;
///
/// let week = WorkWeek::default();
///
/// // 2024-01-06 is a Saturday
/// assert!(!week.is_workday(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// // 2024-01-05 is a Friday
/// assert!(week.is_workday(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WorkWeek {
    days: Vec<Weekday>,
}

impl From<Vec<Weekday>> for WorkWeek {
    fn from(days: Vec<Weekday>) -> Self {
        Self::new(days)
    }
}

impl From<WorkWeek> for Vec<Weekday> {
    fn from(week: WorkWeek) -> Self {
        week.days
    }
}

impl WorkWeek {
    /// Creates a work week from the given days. Duplicates are ignored.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut unique: Vec<Weekday> = Vec::new();
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        unique.sort_by_key(|d| d.num_days_from_monday());
        Self { days: unique }
    }

    /// The working days, Monday first.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Returns true if no day is a working day.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns true if `date` falls on a working day.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        self.days.contains(&date.weekday())
    }

    /// Returns the [`DayType`] for `date`.
    pub fn day_type(&self, date: NaiveDate) -> DayType {
        if self.is_workday(date) {
            DayType::Weekday
        } else {
            DayType::Weekend
        }
    }
}

impl Default for WorkWeek {
    fn default() -> Self {
        Self::new([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }
}

/// Returns the full English name of the day `date` falls on.
///
/// # Example
///
/// ```
/// use hours_review::calculation::day_name;
/// use chrono::NaiveDate;
///
/// assert_eq!(day_name(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), "Monday");
/// ```
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
