//! Property-based tests for the aggregation and classification rules.
//!
//! Invariants covered:
//! 1. Daily totals do not depend on entry order
//! 2. Aggregation conserves worked time
//! 3. Rounding is idempotent, bounded, and the identity when disabled
//! 4. Classification is exclusive and consistent with the summary counts
//! 5. Leave rows never reach the totals

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use hours_review::calculation::{
    RoundingMode, WorkWeek, aggregate_daily, classify_daily, summarize,
};
use hours_review::config::ReviewConfig;
use hours_review::models::{CleanEntry, HoursStatus, MINUTES_PER_HOUR, RawEntry, Thresholds};
use hours_review::pipeline::run_review;

const TECHNICIANS: [&str; 3] = ["Tech A", "Tech B", "Tech C"];

fn entry(technician: usize, day: u32, minutes: u32) -> CleanEntry {
    CleanEntry::from(RawEntry {
        line: 2,
        technician: TECHNICIANS[technician].to_string(),
        payroll_date: NaiveDate::from_ymd_opt(2024, 1, 1 + day).unwrap(),
        task_name: "Install".to_string(),
        entry_type: "Work".to_string(),
        duration_minutes: Decimal::from(minutes),
        fields: vec![],
    })
}

fn entries_strategy() -> impl Strategy<Value = Vec<CleanEntry>> {
    prop::collection::vec((0usize..3, 0u32..14, 0u32..720), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(technician, day, minutes)| entry(technician, day, minutes))
            .collect()
    })
}

fn rounding_strategy() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

/// Hours with two decimal places between 0 and 24.
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=2400).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_totals_independent_of_entry_order(
        entries in entries_strategy(),
        rotate in 0usize..40,
        rounding in rounding_strategy(),
    ) {
        let week = WorkWeek::default();
        let expected = aggregate_daily(&entries, rounding, &week);

        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(&aggregate_daily(&reversed, rounding, &week), &expected);

        let mut rotated = entries.clone();
        if !rotated.is_empty() {
            let k = rotate % rotated.len();
            rotated.rotate_left(k);
        }
        prop_assert_eq!(&aggregate_daily(&rotated, rounding, &week), &expected);
    }

    #[test]
    fn prop_aggregation_conserves_time(entries in entries_strategy()) {
        let totals = aggregate_daily(&entries, RoundingMode::None, &WorkWeek::default());

        let total_minutes: Decimal = entries.iter().map(|e| e.duration_minutes).sum();
        let total_hours: Decimal = totals.iter().map(|t| t.raw_hours).sum();

        // Each group is divided once, so compare at a tolerance well below a second.
        let difference = (total_hours - total_minutes / MINUTES_PER_HOUR).abs();
        prop_assert!(difference < Decimal::new(1, 12), "difference {}", difference);
    }

    #[test]
    fn prop_one_total_per_technician_and_date(entries in entries_strategy()) {
        let totals = aggregate_daily(&entries, RoundingMode::None, &WorkWeek::default());

        let mut keys: Vec<(String, NaiveDate)> = entries
            .iter()
            .map(|e| (e.technician.clone(), e.payroll_date))
            .collect();
        keys.sort();
        keys.dedup();

        let total_keys: Vec<(String, NaiveDate)> = totals
            .iter()
            .map(|t| (t.technician.clone(), t.date))
            .collect();
        prop_assert_eq!(total_keys, keys);
    }

    #[test]
    fn prop_rounding_is_idempotent(hours in hours_strategy(), rounding in rounding_strategy()) {
        let once = rounding.apply(hours);
        prop_assert_eq!(rounding.apply(once), once);
    }

    #[test]
    fn prop_rounding_disabled_is_identity(hours in hours_strategy()) {
        prop_assert_eq!(RoundingMode::None.apply(hours), hours);
    }

    #[test]
    fn prop_rounding_moves_at_most_half_a_unit(hours in hours_strategy()) {
        for (mode, half_unit) in [
            (RoundingMode::QuarterHour, Decimal::new(125, 3)),
            (RoundingMode::HalfHour, Decimal::new(25, 2)),
            (RoundingMode::Hour, Decimal::new(5, 1)),
        ] {
            let rounded = mode.apply(hours);
            prop_assert!((rounded - hours).abs() <= half_unit, "{} -> {} ({})", hours, rounded, mode);
        }
    }

    #[test]
    fn prop_classification_is_exclusive(
        entries in entries_strategy(),
        rounding in rounding_strategy(),
        minimum in hours_strategy(),
        overtime in hours_strategy(),
    ) {
        let thresholds = Thresholds {
            minimum_hours: minimum,
            overtime_hours: overtime,
        };
        let totals = aggregate_daily(&entries, rounding, &WorkWeek::default());
        let classified = classify_daily(&totals, &thresholds);

        for day in &classified {
            let hours = day.daily.rounded_hours;
            let expected = if hours < minimum {
                HoursStatus::BelowThreshold
            } else if hours > overtime {
                HoursStatus::Overtime
            } else {
                HoursStatus::MeetsThreshold
            };
            prop_assert_eq!(day.status, expected);
        }

        let summary = summarize(&totals, &thresholds);
        prop_assert_eq!(summary.total_days, totals.len());
        if minimum <= overtime {
            prop_assert!(summary.below_threshold_days + summary.overtime_days <= summary.total_days);
        }
    }

    #[test]
    fn prop_leave_rows_never_count(
        work in prop::collection::vec((0usize..3, 0u32..7, 1u32..600), 1..10),
        leave in prop::collection::vec((0usize..3, 0u32..7, 1u32..600), 0..10),
    ) {
        let mut csv = String::from("Technician Name,Payroll Date,Task Name,Type,Duration (mins)\n");
        let mut expected_minutes = 0u32;
        for (technician, day, minutes) in &work {
            csv.push_str(&format!(
                "{},2024-01-{:02},Install,Work,{}\n",
                TECHNICIANS[*technician],
                day + 1,
                minutes
            ));
            expected_minutes += minutes;
        }
        for (technician, day, minutes) in &leave {
            csv.push_str(&format!(
                "{},2024-01-{:02},Annual Leave,Leave,{}\n",
                TECHNICIANS[*technician],
                day + 1,
                minutes
            ));
        }

        let outcome = run_review(csv.as_bytes(), &ReviewConfig::default()).unwrap();
        prop_assert_eq!(outcome.entries.len(), work.len());

        let minutes: Decimal = outcome.entries.entries.iter().map(|e| e.duration_minutes).sum();
        prop_assert_eq!(minutes, Decimal::from(expected_minutes));
    }
}

#[test]
fn test_summary_of_no_days_is_zero() {
    let summary = summarize(&[], &Thresholds::default());
    assert_eq!(summary.total_days, 0);
    assert_eq!(summary.average_hours, Decimal::ZERO);
}
