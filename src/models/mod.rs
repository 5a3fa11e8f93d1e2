//! Core data models for the hours review engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_total;
mod entry;
mod report;

pub use daily_total::DailyTotal;
pub use entry::{CleanEntry, EntrySet, MINUTES_PER_HOUR, RawEntry, TRAVEL_TIME_TYPE};
pub use report::{
    BelowThresholdSection, ClassifiedDaily, DEFAULT_THRESHOLD_HOURS, HoursReport, HoursStatus,
    OvertimeSection, SummaryMetrics, TechnicianAggregate, Thresholds,
};
