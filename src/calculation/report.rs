//! Reporting views over daily totals.
//!
//! These functions derive everything a reviewer looks at from a slice of
//! [`DailyTotal`]s: headline metrics, the below-threshold and overtime
//! sections with their per-technician aggregates, and the assembled
//! [`HoursReport`]. None of them owns or modifies the daily totals.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    BelowThresholdSection, DailyTotal, HoursReport, OvertimeSection, SummaryMetrics,
    TechnicianAggregate, Thresholds,
};

use super::classification::{classify_daily, is_below_threshold, is_overtime};
use super::rounding::RoundingMode;

/// Mean of `values`, or zero when there are none.
fn mean(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    let (count, sum) = values
        .into_iter()
        .fold((0usize, Decimal::ZERO), |(count, sum), v| (count + 1, sum + v));
    if count == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(count)
    }
}

/// Computes the headline metrics.
///
/// # Example
///
/// ```
/// use hours_review::calculation::summarize;
/// use hours_review::models::Thresholds;
/// use rust_decimal::Decimal;
///
/// let summary = summarize(&[], &Thresholds::default());
/// assert_eq!(summary.total_days, 0);
/// assert_eq!(summary.average_hours, Decimal::ZERO);
/// ```
pub fn summarize(totals: &[DailyTotal], thresholds: &Thresholds) -> SummaryMetrics {
    SummaryMetrics {
        total_days: totals.len(),
        below_threshold_days: totals
            .iter()
            .filter(|t| is_below_threshold(t.rounded_hours, thresholds))
            .count(),
        overtime_days: totals
            .iter()
            .filter(|t| is_overtime(t.rounded_hours, thresholds))
            .count(),
        average_hours: mean(totals.iter().map(|t| t.rounded_hours)),
    }
}

/// Per-technician count, mean and sum of display hours, ordered by name.
pub fn technician_aggregates(
    totals: &[DailyTotal],
    rounding_enabled: bool,
) -> Vec<TechnicianAggregate> {
    let mut by_technician: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();
    for total in totals {
        let (days, sum) = by_technician
            .entry(total.technician.as_str())
            .or_insert((0, Decimal::ZERO));
        *days += 1;
        *sum += total.display_hours(rounding_enabled);
    }

    by_technician
        .into_iter()
        .map(|(technician, (days, total_hours))| TechnicianAggregate {
            technician: technician.to_string(),
            days,
            average_hours: total_hours / Decimal::from(days),
            total_hours,
        })
        .collect()
}

fn by_hours_then_key(a: &DailyTotal, b: &DailyTotal, rounding_enabled: bool) -> Ordering {
    a.display_hours(rounding_enabled)
        .cmp(&b.display_hours(rounding_enabled))
        .then_with(|| a.technician.cmp(&b.technician))
        .then_with(|| a.date.cmp(&b.date))
}

fn sorted_descending(mut days: Vec<DailyTotal>, rounding_enabled: bool) -> Vec<DailyTotal> {
    days.sort_by(|a, b| {
        b.display_hours(rounding_enabled)
            .cmp(&a.display_hours(rounding_enabled))
            .then_with(|| a.technician.cmp(&b.technician))
            .then_with(|| a.date.cmp(&b.date))
    });
    days
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Days below the minimum threshold, lowest first.
///
/// Returns `None` when no day is below the minimum.
///
/// # Example
///
/// ```
/// use hours_review::calculation::below_threshold_section;
/// use hours_review::models::{DailyTotal, Thresholds};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |technician: &str, hours: i64| DailyTotal {
///     technician: technician.to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     raw_hours: Decimal::from(hours),
///     rounded_hours: Decimal::from(hours),
///     day_of_week: "Monday".to_string(),
///     is_weekday: true,
/// };
///
/// let totals = vec![day("Tech A", 7), day("Tech B", 5), day("Tech C", 9)];
/// let section = below_threshold_section(&totals, &Thresholds::default(), false).unwrap();
///
/// assert_eq!(section.days.len(), 2);
/// assert_eq!(section.days[0].technician, "Tech B");
///
/// assert!(below_threshold_section(&totals[2..], &Thresholds::default(), false).is_none());
/// ```
pub fn below_threshold_section(
    totals: &[DailyTotal],
    thresholds: &Thresholds,
    rounding_enabled: bool,
) -> Option<BelowThresholdSection> {
    let mut days: Vec<DailyTotal> = totals
        .iter()
        .filter(|t| is_below_threshold(t.rounded_hours, thresholds))
        .cloned()
        .collect();
    if days.is_empty() {
        return None;
    }

    days.sort_by(|a, b| by_hours_then_key(a, b, rounding_enabled));
    let technicians = technician_aggregates(&days, rounding_enabled);

    Some(BelowThresholdSection { days, technicians })
}

/// Days above the overtime threshold, highest first, split by day type.
///
/// Returns `None` when no day is above the overtime threshold. Within the
/// section, the weekday and weekend subsets are each `None` when empty. The
/// per-technician aggregate covers overtime days only.
pub fn overtime_section(
    totals: &[DailyTotal],
    thresholds: &Thresholds,
    rounding_enabled: bool,
) -> Option<OvertimeSection> {
    let days: Vec<DailyTotal> = totals
        .iter()
        .filter(|t| is_overtime(t.rounded_hours, thresholds))
        .cloned()
        .collect();
    if days.is_empty() {
        return None;
    }

    let days = sorted_descending(days, rounding_enabled);
    let (weekday, weekend): (Vec<DailyTotal>, Vec<DailyTotal>) =
        days.iter().cloned().partition(|t| t.is_weekday);
    let technicians = technician_aggregates(&days, rounding_enabled);

    Some(OvertimeSection {
        days,
        weekday: non_empty(weekday),
        weekend: non_empty(weekend),
        technicians,
    })
}

/// Builds the complete report for a set of daily totals.
///
/// # Example
///
/// ```
/// use hours_review::calculation::{RoundingMode, build_report};
/// use hours_review::models::Thresholds;
///
/// let report = build_report(&[], Thresholds::default(), RoundingMode::None);
/// assert_eq!(report.summary.total_days, 0);
/// assert!(report.below_threshold.is_none());
/// assert!(report.overtime.is_none());
/// ```
pub fn build_report(
    totals: &[DailyTotal],
    thresholds: Thresholds,
    rounding: RoundingMode,
) -> HoursReport {
    let rounding_enabled = rounding.is_enabled();
    let summary = summarize(totals, &thresholds);

    debug!(
        total_days = summary.total_days,
        below_threshold_days = summary.below_threshold_days,
        overtime_days = summary.overtime_days,
        rounding = %rounding,
        "Built hours report"
    );

    HoursReport {
        thresholds,
        rounding,
        daily: classify_daily(totals, &thresholds),
        below_threshold: below_threshold_section(totals, &thresholds, rounding_enabled),
        overtime: overtime_section(totals, &thresholds, rounding_enabled),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HoursStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn day(technician: &str, d: u32, raw: &str, rounded: &str) -> DailyTotal {
        // 2024-01-01 is a Monday; 6 and 7 are the weekend
        let date = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        DailyTotal {
            technician: technician.to_string(),
            date,
            raw_hours: dec(raw),
            rounded_hours: dec(rounded),
            day_of_week: crate::calculation::day_name(date).to_string(),
            is_weekday: d < 6,
        }
    }

    fn sample() -> Vec<DailyTotal> {
        vec![
            day("Tech A", 1, "6", "6"),
            day("Tech A", 2, "8", "8"),
            day("Tech A", 6, "10", "10"),
            day("Tech B", 1, "9", "9"),
            day("Tech B", 2, "4", "4"),
            day("Tech B", 7, "12", "12"),
        ]
    }

    // ==========================================================================
    // Summary metrics
    // ==========================================================================
    #[test]
    fn test_summary_counts_and_mean() {
        let summary = summarize(&sample(), &Thresholds::default());
        assert_eq!(summary.total_days, 6);
        assert_eq!(summary.below_threshold_days, 2);
        assert_eq!(summary.overtime_days, 3);
        // (6 + 8 + 10 + 9 + 4 + 12) / 6 = 49 / 6
        assert_eq!(summary.average_hours, dec("49") / dec("6"));
    }

    #[test]
    fn test_summary_of_no_days_is_zero() {
        let summary = summarize(&[], &Thresholds::default());
        assert_eq!(
            summary,
            SummaryMetrics {
                total_days: 0,
                below_threshold_days: 0,
                overtime_days: 0,
                average_hours: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_summary_uses_rounded_hours() {
        let totals = vec![day("Tech A", 1, "7.9", "8")];
        let summary = summarize(&totals, &Thresholds::default());
        assert_eq!(summary.below_threshold_days, 0);
        assert_eq!(summary.average_hours, dec("8"));
    }

    #[test]
    fn test_inverted_thresholds_can_double_count() {
        let thresholds = Thresholds {
            minimum_hours: dec("9"),
            overtime_hours: dec("7"),
        };
        let summary = summarize(&[day("Tech A", 1, "8", "8")], &thresholds);
        assert_eq!(summary.below_threshold_days, 1);
        assert_eq!(summary.overtime_days, 1);
    }

    // ==========================================================================
    // Below-threshold section
    // ==========================================================================
    #[test]
    fn test_below_section_sorted_ascending() {
        let section = below_threshold_section(&sample(), &Thresholds::default(), false).unwrap();
        let hours: Vec<Decimal> = section.days.iter().map(|d| d.raw_hours).collect();
        assert_eq!(hours, vec![dec("4"), dec("6")]);
    }

    #[test]
    fn test_below_section_technician_aggregate() {
        let totals = vec![
            day("Tech B", 1, "5", "5"),
            day("Tech A", 1, "6", "6"),
            day("Tech A", 2, "7", "7"),
        ];
        let section = below_threshold_section(&totals, &Thresholds::default(), false).unwrap();

        assert_eq!(
            section.technicians,
            vec![
                TechnicianAggregate {
                    technician: "Tech A".to_string(),
                    days: 2,
                    average_hours: dec("6.5"),
                    total_hours: dec("13"),
                },
                TechnicianAggregate {
                    technician: "Tech B".to_string(),
                    days: 1,
                    average_hours: dec("5"),
                    total_hours: dec("5"),
                },
            ]
        );
    }

    #[test]
    fn test_below_section_sorts_by_rounded_hours_when_rounding() {
        // Raw order is A < B, rounded order is B < A.
        let totals = vec![day("Tech A", 1, "6.9", "7"), day("Tech B", 1, "6.95", "6.5")];
        let section = below_threshold_section(&totals, &Thresholds::default(), true).unwrap();
        assert_eq!(section.days[0].technician, "Tech B");

        let section = below_threshold_section(&totals, &Thresholds::default(), false).unwrap();
        assert_eq!(section.days[0].technician, "Tech A");
    }

    #[test]
    fn test_below_section_ties_sorted_by_technician_then_date() {
        let totals = vec![
            day("Tech B", 1, "5", "5"),
            day("Tech A", 2, "5", "5"),
            day("Tech A", 1, "5", "5"),
        ];
        let section = below_threshold_section(&totals, &Thresholds::default(), false).unwrap();
        let keys: Vec<(&str, NaiveDate)> = section
            .days
            .iter()
            .map(|d| (d.technician.as_str(), d.date))
            .collect();
        assert_eq!(keys[0], ("Tech A", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert_eq!(keys[1], ("Tech A", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
        assert_eq!(keys[2].0, "Tech B");
    }

    #[test]
    fn test_below_section_absent_when_empty() {
        let totals = vec![day("Tech A", 1, "8", "8")];
        assert!(below_threshold_section(&totals, &Thresholds::default(), false).is_none());
    }

    // ==========================================================================
    // Overtime section
    // ==========================================================================
    #[test]
    fn test_overtime_section_sorted_descending_and_split() {
        let section = overtime_section(&sample(), &Thresholds::default(), false).unwrap();

        let hours: Vec<Decimal> = section.days.iter().map(|d| d.raw_hours).collect();
        assert_eq!(hours, vec![dec("12"), dec("10"), dec("9")]);

        let weekday = section.weekday.unwrap();
        assert_eq!(weekday.len(), 1);
        assert_eq!(weekday[0].technician, "Tech B");
        assert_eq!(weekday[0].raw_hours, dec("9"));

        let weekend = section.weekend.unwrap();
        let weekend_hours: Vec<Decimal> = weekend.iter().map(|d| d.raw_hours).collect();
        assert_eq!(weekend_hours, vec![dec("12"), dec("10")]);
    }

    #[test]
    fn test_overtime_aggregate_covers_overtime_days_only() {
        let section = overtime_section(&sample(), &Thresholds::default(), false).unwrap();
        assert_eq!(
            section.technicians,
            vec![
                TechnicianAggregate {
                    technician: "Tech A".to_string(),
                    days: 1,
                    average_hours: dec("10"),
                    total_hours: dec("10"),
                },
                TechnicianAggregate {
                    technician: "Tech B".to_string(),
                    days: 2,
                    average_hours: dec("10.5"),
                    total_hours: dec("21"),
                },
            ]
        );
    }

    #[test]
    fn test_overtime_weekend_subset_absent_when_all_weekday() {
        let totals = vec![day("Tech A", 1, "9", "9"), day("Tech A", 2, "10", "10")];
        let section = overtime_section(&totals, &Thresholds::default(), false).unwrap();
        assert_eq!(section.weekday.map(|w| w.len()), Some(2));
        assert!(section.weekend.is_none());
    }

    #[test]
    fn test_overtime_section_absent_when_empty() {
        let totals = vec![day("Tech A", 1, "8", "8"), day("Tech A", 2, "3", "3")];
        assert!(overtime_section(&totals, &Thresholds::default(), true).is_none());
    }

    // ==========================================================================
    // Full report
    // ==========================================================================
    #[test]
    fn test_build_report_classifies_every_day() {
        let report = build_report(&sample(), Thresholds::default(), RoundingMode::None);

        let statuses: Vec<HoursStatus> = report.daily.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            vec![
                HoursStatus::BelowThreshold,
                HoursStatus::MeetsThreshold,
                HoursStatus::Overtime,
                HoursStatus::Overtime,
                HoursStatus::BelowThreshold,
                HoursStatus::Overtime,
            ]
        );
        assert_eq!(report.summary.total_days, 6);
        assert_eq!(report.below_threshold.unwrap().days.len(), 2);
        assert_eq!(report.overtime.unwrap().days.len(), 3);
        assert_eq!(report.rounding, RoundingMode::None);
    }

    #[test]
    fn test_report_serializes_absent_sections_as_null() {
        let report = build_report(
            &[day("Tech A", 1, "8", "8")],
            Thresholds::default(),
            RoundingMode::QuarterHour,
        );
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["below_threshold"].is_null());
        assert!(value["overtime"].is_null());
        assert_eq!(value["rounding"], "15min");
        assert_eq!(value["summary"]["total_days"], 1);
        assert_eq!(value["daily"][0]["status"], "Meets Threshold");
    }
}
