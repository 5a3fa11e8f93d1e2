//! Calculation logic for the hours review engine.
//!
//! This module contains the pure stages that follow loading: the hour
//! rounding rule, day detection, daily aggregation by technician and date,
//! threshold classification, and the reporting views built on top of the
//! daily totals.

mod classification;
mod daily_totals;
mod day_detection;
mod report;
mod rounding;

pub use classification::{classify_daily, classify_hours, is_below_threshold, is_overtime};
pub use daily_totals::aggregate_daily;
pub use day_detection::{DayType, WorkWeek, day_name};
pub use report::{
    below_threshold_section, build_report, overtime_section, summarize, technician_aggregates,
};
pub use rounding::{RoundingMode, round_hours};
