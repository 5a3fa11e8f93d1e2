//! End-to-end review run.
//!
//! [`run_review`] wires the stages together: load and clean the export,
//! optionally drop travel time, aggregate daily totals, then build the
//! report. Every run is independent; nothing is cached between calls.

use std::time::Instant;

use tracing::info;

use crate::calculation::{aggregate_daily, build_report};
use crate::config::ReviewConfig;
use crate::error::ReviewResult;
use crate::ingest::{exclude_travel_time, load_entries};
use crate::models::{DailyTotal, EntrySet, HoursReport};

/// Everything a review run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    /// The cleaned entries the totals were computed from (after the travel
    /// filter when travel time is excluded).
    pub entries: EntrySet,
    /// Daily totals ordered by technician then date.
    pub daily_totals: Vec<DailyTotal>,
    /// The report views over the daily totals.
    pub report: HoursReport,
}

/// Runs a full review over CSV bytes.
///
/// # Errors
///
/// Any loading failure aborts the run; no partial outcome is produced.
///
/// # Example
///
/// ```
/// use hours_review::config::ReviewConfig;
/// use hours_review::pipeline::run_review;
/// use rust_decimal::Decimal;
///
/// let csv = "\
/// Technician Name,Payroll Date,Task Name,Type,Duration (mins)
/// Tech A,2024-01-01,Install,Work,300
/// Tech A,2024-01-01,Drive,Travel Time,60
/// ";
///
/// let outcome = run_review(csv.as_bytes(), &ReviewConfig::default())?;
/// assert_eq!(outcome.daily_totals[0].raw_hours, Decimal::from(6));
///
/// let config = ReviewConfig {
///     include_travel_time: false,
///     ..ReviewConfig::default()
/// };
/// let outcome = run_review(csv.as_bytes(), &config)?;
/// assert_eq!(outcome.daily_totals[0].raw_hours, Decimal::from(5));
/// # Ok::<(), hours_review::error::ReviewError>(())
/// ```
pub fn run_review(input: &[u8], config: &ReviewConfig) -> ReviewResult<ReviewOutcome> {
    let start_time = Instant::now();

    let entries = load_clean_entries(input, config)?;
    let daily_totals = aggregate_daily(&entries.entries, config.rounding, &config.work_week);
    let report = build_report(&daily_totals, config.thresholds(), config.rounding);

    info!(
        entries = entries.len(),
        daily_totals = daily_totals.len(),
        below_threshold_days = report.summary.below_threshold_days,
        overtime_days = report.summary.overtime_days,
        duration_us = start_time.elapsed().as_micros(),
        "Review completed"
    );

    Ok(ReviewOutcome {
        entries,
        daily_totals,
        report,
    })
}

/// Loads the export and applies the travel filter the configuration asks for.
///
/// This is the row set both the review and the detail export work from.
pub fn load_clean_entries(input: &[u8], config: &ReviewConfig) -> ReviewResult<EntrySet> {
    let entries = load_entries(input, config.date_order)?;
    if config.include_travel_time {
        Ok(entries)
    } else {
        Ok(exclude_travel_time(entries))
    }
}
