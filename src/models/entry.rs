//! Time entry models.
//!
//! This module defines the typed records produced by the loader: one
//! [`RawEntry`] per input row, the [`CleanEntry`] that survives leave
//! exclusion, and the [`EntrySet`] detail table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The entry type value that marks travel time.
pub const TRAVEL_TIME_TYPE: &str = "Travel Time";

/// One row of the time-tracking export, with its required columns typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// The 1-based line of the row in the input (the header is line 1).
    pub line: u64,
    /// The technician the time belongs to.
    pub technician: String,
    /// The date the time is attributed to for payroll.
    pub payroll_date: NaiveDate,
    /// The task the time was booked against.
    pub task_name: String,
    /// The entry type (e.g. "Travel Time").
    pub entry_type: String,
    /// The duration of the entry in minutes.
    pub duration_minutes: Decimal,
    /// Every original field of the row, in header order.
    #[serde(skip)]
    pub fields: Vec<String>,
}

/// A time entry that counts towards worked hours.
///
/// # Example
///
/// ```
/// use hours_review::models::{CleanEntry, RawEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let raw = RawEntry {
///     line: 2,
///     technician: "Tech A".to_string(),
///     payroll_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     task_name: "Install".to_string(),
///     entry_type: "Work".to_string(),
///     duration_minutes: Decimal::from(90),
///     fields: vec![],
/// };
///
/// let entry = CleanEntry::from(raw);
/// assert_eq!(entry.hours, Decimal::new(15, 1)); // 1.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanEntry {
    /// The 1-based line of the row in the input.
    pub line: u64,
    /// The technician the time belongs to.
    pub technician: String,
    /// The date the time is attributed to for payroll.
    pub payroll_date: NaiveDate,
    /// The task the time was booked against.
    pub task_name: String,
    /// The entry type (e.g. "Travel Time").
    pub entry_type: String,
    /// The duration of the entry in minutes.
    pub duration_minutes: Decimal,
    /// The duration in hours (`duration_minutes / 60`).
    pub hours: Decimal,
    /// Every original field of the row, in header order.
    #[serde(skip)]
    pub fields: Vec<String>,
}

impl CleanEntry {
    /// Returns true if this entry is travel time.
    pub fn is_travel_time(&self) -> bool {
        self.entry_type == TRAVEL_TIME_TYPE
    }
}

impl From<RawEntry> for CleanEntry {
    fn from(raw: RawEntry) -> Self {
        CleanEntry {
            line: raw.line,
            hours: raw.duration_minutes / MINUTES_PER_HOUR,
            technician: raw.technician,
            payroll_date: raw.payroll_date,
            task_name: raw.task_name,
            entry_type: raw.entry_type,
            duration_minutes: raw.duration_minutes,
            fields: raw.fields,
        }
    }
}

/// The detail table: the original header row and the clean entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntrySet {
    /// Header names in input order.
    pub headers: Vec<String>,
    /// Column index of the payroll date within `headers`.
    pub date_column: usize,
    /// Clean entries in input order.
    pub entries: Vec<CleanEntry>,
}

impl EntrySet {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct technician names in order of first appearance.
    pub fn technicians(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !names.iter().any(|n| n == &entry.technician) {
                names.push(entry.technician.clone());
            }
        }
        names
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&CleanEntry) -> bool) {
        self.entries.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(technician: &str, minutes: i64, entry_type: &str) -> CleanEntry {
        CleanEntry::from(RawEntry {
            line: 2,
            technician: technician.to_string(),
            payroll_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            task_name: "Install".to_string(),
            entry_type: entry_type.to_string(),
            duration_minutes: Decimal::from(minutes),
            fields: vec![],
        })
    }

    #[test]
    fn test_hours_are_minutes_over_sixty() {
        assert_eq!(entry("A", 300, "Work").hours, Decimal::from(5));
        assert_eq!(entry("A", 45, "Work").hours, Decimal::new(75, 2));
        assert_eq!(entry("A", 0, "Work").hours, Decimal::ZERO);
    }

    #[test]
    fn test_travel_time_detection_is_exact() {
        assert!(entry("A", 60, "Travel Time").is_travel_time());
        assert!(!entry("A", 60, "travel time").is_travel_time());
        assert!(!entry("A", 60, "Work").is_travel_time());
    }

    #[test]
    fn test_technicians_in_first_appearance_order() {
        let set = EntrySet {
            headers: vec![],
            date_column: 0,
            entries: vec![
                entry("Zoe", 60, "Work"),
                entry("Adam", 60, "Work"),
                entry("Zoe", 30, "Work"),
            ],
        };
        assert_eq!(set.technicians(), vec!["Zoe".to_string(), "Adam".to_string()]);
    }

    #[test]
    fn test_empty_set() {
        let set = EntrySet::default();
        assert!(set.is_empty());
        assert!(set.technicians().is_empty());
    }
}
