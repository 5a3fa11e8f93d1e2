//! Daily aggregation.
//!
//! Groups clean entries by technician and payroll date, sums the worked
//! time, applies the rounding rule, and attaches the calendar attributes of
//! the date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{CleanEntry, DailyTotal, MINUTES_PER_HOUR};

use super::day_detection::{WorkWeek, day_name};
use super::rounding::RoundingMode;

/// Builds one [`DailyTotal`] per distinct (technician, payroll date).
///
/// Minutes are summed per group and converted to hours once, which gives the
/// same value as summing per-entry hours without accumulating the error of
/// repeating decimals such as 20 minutes. The result is ordered by technician
/// then date. An empty input gives an empty result.
///
/// # Example
///
/// ```
/// use hours_review::calculation::{RoundingMode, WorkWeek, aggregate_daily};
/// use hours_review::models::{CleanEntry, RawEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = |minutes: i64, entry_type: &str| {
///     CleanEntry::from(RawEntry {
///         line: 2,
///         technician: "Tech A".to_string(),
///         payroll_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         task_name: "Install".to_string(),
///         entry_type: entry_type.to_string(),
///         duration_minutes: Decimal::from(minutes),
///         fields: vec![],
///     })
/// };
///
/// let totals = aggregate_daily(
///     &[entry(300, "Work"), entry(60, "Travel Time")],
///     RoundingMode::None,
///     &WorkWeek::default(),
/// );
///
/// assert_eq!(totals.len(), 1);
/// assert_eq!(totals[0].raw_hours, Decimal::from(6));
/// assert_eq!(totals[0].day_of_week, "Monday");
/// assert!(totals[0].is_weekday);
/// ```
pub fn aggregate_daily(
    entries: &[CleanEntry],
    rounding: RoundingMode,
    work_week: &WorkWeek,
) -> Vec<DailyTotal> {
    let mut minutes_by_day: BTreeMap<(&str, NaiveDate), Decimal> = BTreeMap::new();
    for entry in entries {
        *minutes_by_day
            .entry((entry.technician.as_str(), entry.payroll_date))
            .or_insert(Decimal::ZERO) += entry.duration_minutes;
    }

    minutes_by_day
        .into_iter()
        .map(|((technician, date), minutes)| {
            let raw_hours = minutes / MINUTES_PER_HOUR;
            DailyTotal {
                technician: technician.to_string(),
                date,
                raw_hours,
                rounded_hours: rounding.apply(raw_hours),
                day_of_week: day_name(date).to_string(),
                is_weekday: work_week.is_workday(date),
            }
        })
        .collect()
}
