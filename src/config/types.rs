//! Configuration types for an hours review.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from YAML. Every key is optional and falls back to the
//! defaults of the review screen: 8 hour thresholds, no rounding, travel
//! time included, a Monday to Friday work week.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{RoundingMode, WorkWeek};
use crate::error::{ReviewError, ReviewResult};
use crate::ingest::DateOrder;
use crate::models::{DEFAULT_THRESHOLD_HOURS, Thresholds};

/// The settings a review run is computed with.
///
/// # Example
///
/// ```
/// use hours_review::config::ReviewConfig;
/// use hours_review::calculation::RoundingMode;
/// use rust_decimal::Decimal;
///
/// let config = ReviewConfig::default();
/// assert_eq!(config.minimum_hours, Decimal::from(8));
/// assert_eq!(config.rounding, RoundingMode::None);
/// assert!(config.include_travel_time);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewConfig {
    /// Days with fewer rounded hours than this are below threshold.
    pub minimum_hours: Decimal,
    /// Days with more rounded hours than this are overtime.
    pub overtime_hours: Decimal,
    /// Rounding applied to daily totals.
    pub rounding: RoundingMode,
    /// Whether "Travel Time" entries count towards worked hours.
    pub include_travel_time: bool,
    /// Days treated as weekdays.
    pub work_week: WorkWeek,
    /// How ambiguous numeric dates such as `03/04/2024` are read.
    pub date_order: DateOrder,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            minimum_hours: DEFAULT_THRESHOLD_HOURS,
            overtime_hours: DEFAULT_THRESHOLD_HOURS,
            rounding: RoundingMode::None,
            include_travel_time: true,
            work_week: WorkWeek::default(),
            date_order: DateOrder::MonthFirst,
        }
    }
}

impl ReviewConfig {
    /// The minimum and overtime thresholds.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            minimum_hours: self.minimum_hours,
            overtime_hours: self.overtime_hours,
        }
    }

    /// Checks that thresholds are non-negative and the work week is not empty.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_review::config::ReviewConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = ReviewConfig {
    ///     overtime_hours: Decimal::from(-1),
    ///     ..ReviewConfig::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> ReviewResult<()> {
        for (field, value) in [
            ("minimum_hours", self.minimum_hours),
            ("overtime_hours", self.overtime_hours),
        ] {
            if value < Decimal::ZERO {
                return Err(ReviewError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", value),
                });
            }
        }

        if self.work_week.is_empty() {
            return Err(ReviewError::InvalidConfig {
                field: "work_week".to_string(),
                message: "must name at least one day".to_string(),
            });
        }

        Ok(())
    }
}
