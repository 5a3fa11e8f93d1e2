//! Threshold classification.
//!
//! Both comparisons are strict: a day exactly on the minimum threshold is not
//! below it, and a day exactly on the overtime threshold is not overtime.
//! The below-minimum check runs first, so when the minimum is set above the
//! overtime threshold a day that satisfies both is "Below Threshold".

use rust_decimal::Decimal;

use crate::models::{ClassifiedDaily, DailyTotal, HoursStatus, Thresholds};

/// Returns true if `hours` is strictly below the minimum threshold.
pub fn is_below_threshold(hours: Decimal, thresholds: &Thresholds) -> bool {
    hours < thresholds.minimum_hours
}

/// Returns true if `hours` is strictly above the overtime threshold.
pub fn is_overtime(hours: Decimal, thresholds: &Thresholds) -> bool {
    hours > thresholds.overtime_hours
}

/// Classifies a day's rounded hours.
///
/// # Example
///
/// ```
/// use hours_review::calculation::classify_hours;
/// use hours_review::models::{HoursStatus, Thresholds};
/// use rust_decimal::Decimal;
///
/// let thresholds = Thresholds::default(); // 8.0 / 8.0
///
/// assert_eq!(classify_hours(Decimal::new(75, 1), &thresholds), HoursStatus::BelowThreshold);
/// assert_eq!(classify_hours(Decimal::from(8), &thresholds), HoursStatus::MeetsThreshold);
/// assert_eq!(classify_hours(Decimal::new(825, 2), &thresholds), HoursStatus::Overtime);
/// ```
pub fn classify_hours(hours: Decimal, thresholds: &Thresholds) -> HoursStatus {
    if is_below_threshold(hours, thresholds) {
        HoursStatus::BelowThreshold
    } else if is_overtime(hours, thresholds) {
        HoursStatus::Overtime
    } else {
        HoursStatus::MeetsThreshold
    }
}

/// Attaches a status and day type to every daily total, by rounded hours.
pub fn classify_daily(totals: &[DailyTotal], thresholds: &Thresholds) -> Vec<ClassifiedDaily> {
    totals
        .iter()
        .map(|daily| ClassifiedDaily {
            status: classify_hours(daily.rounded_hours, thresholds),
            day_type: daily.day_type(),
            daily: daily.clone(),
        })
        .collect()
}
