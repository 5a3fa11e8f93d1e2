//! Daily total model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// Worked hours for one technician on one payroll date.
///
/// # Example
///
/// ```
/// use hours_review::models::DailyTotal;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let total = DailyTotal {
///     technician: "Tech A".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
///     raw_hours: Decimal::new(71, 1),
///     rounded_hours: Decimal::from(7),
///     day_of_week: "Saturday".to_string(),
///     is_weekday: false,
/// };
///
/// assert_eq!(total.display_hours(true), Decimal::from(7));
/// assert_eq!(total.display_hours(false), Decimal::new(71, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The technician.
    pub technician: String,
    /// The payroll date.
    pub date: NaiveDate,
    /// Sum of entry hours for the day.
    pub raw_hours: Decimal,
    /// Raw hours after the rounding rule (equal to raw hours when disabled).
    pub rounded_hours: Decimal,
    /// Full English day name (e.g. "Monday").
    pub day_of_week: String,
    /// Whether the date falls inside the work week.
    pub is_weekday: bool,
}

impl DailyTotal {
    /// The hours shown to a reviewer: rounded when rounding is enabled,
    /// raw otherwise.
    pub fn display_hours(&self, rounding_enabled: bool) -> Decimal {
        if rounding_enabled {
            self.rounded_hours
        } else {
            self.raw_hours
        }
    }

    /// Weekday or weekend, from the is-weekday flag.
    pub fn day_type(&self) -> DayType {
        if self.is_weekday {
            DayType::Weekday
        } else {
            DayType::Weekend
        }
    }
}
