//! Report models for the hours review engine.
//!
//! This module contains the [`HoursReport`] type and the views it is built
//! from: status classification, summary metrics, and the below-threshold and
//! overtime sections. Sections with no rows are `None` so a presentation
//! layer can hide them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayType, RoundingMode};

use super::DailyTotal;

/// Default minimum and overtime threshold in hours.
pub const DEFAULT_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The two thresholds a day is compared against.
///
/// # Example
///
/// ```
/// use hours_review::models::Thresholds;
/// use rust_decimal::Decimal;
///
/// let thresholds = Thresholds::default();
/// assert_eq!(thresholds.minimum_hours, Decimal::from(8));
/// assert_eq!(thresholds.overtime_hours, Decimal::from(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Days with fewer rounded hours than this are below threshold.
    pub minimum_hours: Decimal,
    /// Days with more rounded hours than this are overtime.
    pub overtime_hours: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            minimum_hours: DEFAULT_THRESHOLD_HOURS,
            overtime_hours: DEFAULT_THRESHOLD_HOURS,
        }
    }
}

/// The status of a day relative to the thresholds.
///
/// # Example
///
/// ```
/// use hours_review::models::HoursStatus;
///
/// assert_eq!(HoursStatus::MeetsThreshold.to_string(), "Meets Threshold");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoursStatus {
    /// Rounded hours strictly below the minimum threshold.
    #[serde(rename = "Below Threshold")]
    BelowThreshold,
    /// Rounded hours strictly above the overtime threshold.
    #[serde(rename = "Overtime")]
    Overtime,
    /// Neither of the above.
    #[serde(rename = "Meets Threshold")]
    MeetsThreshold,
}

impl std::fmt::Display for HoursStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoursStatus::BelowThreshold => write!(f, "Below Threshold"),
            HoursStatus::Overtime => write!(f, "Overtime"),
            HoursStatus::MeetsThreshold => write!(f, "Meets Threshold"),
        }
    }
}

/// A daily total with its status and day type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDaily {
    /// The underlying daily total.
    #[serde(flatten)]
    pub daily: DailyTotal,
    /// The threshold status.
    pub status: HoursStatus,
    /// Weekday or weekend.
    pub day_type: DayType,
}

/// Headline metrics across all daily totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of (technician, date) rows.
    pub total_days: usize,
    /// Days with rounded hours below the minimum threshold.
    pub below_threshold_days: usize,
    /// Days with rounded hours above the overtime threshold.
    pub overtime_days: usize,
    /// Mean rounded hours per day, zero when there are no days.
    pub average_hours: Decimal,
}

/// Per-technician aggregate over a subset of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianAggregate {
    /// The technician.
    pub technician: String,
    /// Number of days in the subset.
    pub days: usize,
    /// Mean hours over those days.
    pub average_hours: Decimal,
    /// Total hours over those days.
    pub total_hours: Decimal,
}

/// Days below the minimum threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BelowThresholdSection {
    /// The days, lowest hours first.
    pub days: Vec<DailyTotal>,
    /// Per-technician aggregate, ordered by technician name.
    pub technicians: Vec<TechnicianAggregate>,
}

/// Days above the overtime threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSection {
    /// The days, highest hours first.
    pub days: Vec<DailyTotal>,
    /// Overtime days inside the work week, highest hours first.
    pub weekday: Option<Vec<DailyTotal>>,
    /// Overtime days outside the work week, highest hours first.
    pub weekend: Option<Vec<DailyTotal>>,
    /// Per-technician aggregate over overtime days only.
    pub technicians: Vec<TechnicianAggregate>,
}

/// The complete review of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursReport {
    /// The thresholds the report was built with.
    pub thresholds: Thresholds,
    /// The rounding mode applied to daily totals.
    pub rounding: RoundingMode,
    /// Headline metrics.
    pub summary: SummaryMetrics,
    /// Every daily total with its status.
    pub daily: Vec<ClassifiedDaily>,
    /// Below-threshold section, absent when no day is below the minimum.
    pub below_threshold: Option<BelowThresholdSection>,
    /// Overtime section, absent when no day is above the overtime threshold.
    pub overtime: Option<OvertimeSection>,
}
