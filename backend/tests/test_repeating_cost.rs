//! Tests for RepeatingOneTimeCost
//!
//! The occurrence enumeration is the most intricate query in the model, so
//! boundaries are covered from every side: before the first occurrence,
//! exactly on occurrences, between occurrences and far in the future.

use chrono::{Duration, TimeZone, Utc};
use cost_model_core_rs::{CostError, CostModel, Interval, Period, RepeatingOneTimeCost, Timestamp};

fn ts(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn interval(start: Timestamp, end: Timestamp) -> Interval {
    Interval::new(start, end).unwrap()
}

/// 50 € every 7 days from 2022-01-01
fn weekly_50() -> RepeatingOneTimeCost {
    RepeatingOneTimeCost::new("Cleaning", 50.0, ts(2022, 1, 1), Duration::days(7)).unwrap()
}

// ============================================================================
// Enumeration
// ============================================================================

#[test]
fn test_three_weeks_from_first_occurrence() {
    // Jan 1, 8, 15 included; Jan 22 excluded
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2022, 1, 1), ts(2022, 1, 22))),
        150.0
    );
}

#[test]
fn test_end_on_occurrence_excludes_it() {
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2022, 1, 1), ts(2022, 1, 8))),
        50.0
    );
}

#[test]
fn test_start_on_occurrence_includes_it() {
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2022, 1, 8), ts(2022, 1, 9))),
        50.0
    );
}

#[test]
fn test_interval_between_occurrences() {
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2022, 1, 2), ts(2022, 1, 8))),
        0.0
    );
}

#[test]
fn test_interval_before_first_occurrence() {
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2021, 6, 1), ts(2021, 12, 31))),
        0.0
    );
}

#[test]
fn test_interval_ending_at_first_occurrence() {
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2021, 12, 1), ts(2022, 1, 1))),
        0.0
    );
}

#[test]
fn test_interval_starting_before_first_occurrence() {
    // Jan 1 and Jan 8
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2021, 12, 1), ts(2022, 1, 10))),
        100.0
    );
}

#[test]
fn test_interval_starting_mid_sequence() {
    // Jan 15, 22, 29
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2022, 1, 12), ts(2022, 2, 1))),
        150.0
    );
}

#[test]
fn test_distant_week_contains_exactly_one_occurrence() {
    let cost = weekly_50();
    let start = ts(2032, 3, 17) + Duration::hours(5);
    let week = interval(start, start + Duration::weeks(1));
    assert_eq!(cost.cost_in_interval(&week), 50.0);
}

#[test]
fn test_full_year_count() {
    // 2022 has 53 Saturdays starting from Jan 1
    let cost = weekly_50();
    assert_eq!(
        cost.cost_in_interval(&interval(ts(2022, 1, 1), ts(2023, 1, 1))),
        53.0 * 50.0
    );
}

#[test]
fn test_additive_over_split_on_occurrence() {
    let cost = weekly_50();
    let (a, b, c) = (ts(2022, 1, 1), ts(2022, 1, 15), ts(2022, 2, 1));
    let whole = cost.cost_in_interval(&interval(a, c));
    let left = cost.cost_in_interval(&interval(a, b));
    let right = cost.cost_in_interval(&interval(b, c));
    assert_eq!(left + right, whole);
}

#[test]
fn test_monthly_repetition_uses_average_month() {
    let cost = RepeatingOneTimeCost::new(
        "Subscription",
        10.0,
        ts(2022, 1, 1),
        Period::Month.duration(),
    )
    .unwrap();
    // 12 average months fit exactly into one average year
    let start = ts(2022, 1, 1);
    let year = interval(start, start + Period::Year.duration());
    assert_eq!(cost.cost_in_interval(&year), 120.0);
}

#[test]
fn test_sub_second_repetition() {
    let cost =
        RepeatingOneTimeCost::new("Tick", 1.0, ts(2022, 1, 1), Duration::milliseconds(250))
            .unwrap();
    let start = ts(2022, 1, 1);
    assert_eq!(
        cost.cost_in_interval(&interval(start, start + Duration::seconds(2))),
        8.0
    );
}

#[test]
fn test_occurrences_iterator() {
    let occurrences: Vec<_> = weekly_50().occurrences().take(3).collect();
    assert_eq!(occurrences, vec![ts(2022, 1, 1), ts(2022, 1, 8), ts(2022, 1, 15)]);
}

#[test]
fn test_occurrences_from_is_restartable() {
    let cost = weekly_50();
    let first: Vec<_> = cost.occurrences_from(ts(2022, 1, 10)).take(2).collect();
    let second: Vec<_> = cost.occurrences_from(ts(2022, 1, 10)).take(2).collect();
    assert_eq!(first, vec![ts(2022, 1, 15), ts(2022, 1, 22)]);
    assert_eq!(first, second);
}

#[test]
fn test_occurrences_from_centuries_after_start() {
    // 300 years of millisecond steps; the first occurrence must be found
    // without walking the sequence
    let ticker =
        RepeatingOneTimeCost::new("Ticker", 1.0, ts(1700, 1, 1), Duration::milliseconds(1))
            .unwrap();
    assert_eq!(
        ticker.occurrences_from(ts(2000, 1, 1)).next(),
        Some(ts(2000, 1, 1))
    );
    assert_eq!(
        ticker.cost_in_interval(&interval(ts(2000, 1, 1), ts(2000, 1, 1) + Duration::seconds(1))),
        1000.0
    );
}

#[test]
fn test_occurrences_from_centuries_after_start_off_grid() {
    let ticker =
        RepeatingOneTimeCost::new("Ticker", 1.0, ts(1700, 1, 1), Duration::milliseconds(3))
            .unwrap();
    // Whole days are multiples of 3 ms, so 2000-01-01 is on the grid
    let from = ts(2000, 1, 1) + Duration::milliseconds(1);
    assert_eq!(
        ticker.occurrences_from(from).next(),
        Some(ts(2000, 1, 1) + Duration::milliseconds(3))
    );
}

#[test]
fn test_occurrences_from_beyond_representable_range() {
    let rare = RepeatingOneTimeCost::new(
        "Rare",
        1.0,
        ts(2022, 1, 1),
        Duration::days(365 * 100_000),
    )
    .unwrap();
    let last = chrono::DateTime::<Utc>::MAX_UTC;
    assert_eq!(rare.occurrences_from(last).next(), None);
    assert_eq!(
        rare.cost_in_interval(&interval(last - Duration::days(1), last)),
        0.0
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_named_period_is_kept() {
    let cost = RepeatingOneTimeCost::every("Gym", 30.0, ts(2022, 1, 1), Period::Week).unwrap();
    assert_eq!(cost.period(), Period::Week);
    assert_eq!(cost.interval(), Duration::weeks(1));
    assert_eq!(weekly_50().period(), Period::Custom(Duration::days(7)));
}

#[test]
fn test_non_positive_named_period_rejected() {
    let result = RepeatingOneTimeCost::every(
        "Bad",
        1.0,
        ts(2022, 1, 1),
        Period::Custom(Duration::seconds(-1)),
    );
    assert_eq!(
        result,
        Err(CostError::InvalidRepetitionInterval(Duration::seconds(-1)))
    );
}

#[test]
fn test_zero_interval_rejected() {
    let result = RepeatingOneTimeCost::new("Bad", 1.0, ts(2022, 1, 1), Duration::zero());
    assert_eq!(
        result,
        Err(CostError::InvalidRepetitionInterval(Duration::zero()))
    );
}

#[test]
fn test_negative_interval_rejected() {
    let result = RepeatingOneTimeCost::new("Bad", 1.0, ts(2022, 1, 1), Duration::days(-7));
    assert!(matches!(
        result,
        Err(CostError::InvalidRepetitionInterval(_))
    ));
}

// ============================================================================
// Contract
// ============================================================================

#[test]
fn test_is_continuous() {
    assert!(!weekly_50().is_continuous());
}

#[test]
fn test_shift_moves_timepoint_only() {
    let original = weekly_50();
    let shifted = original.shift(Duration::days(3));
    assert_eq!(shifted.timepoint(), ts(2022, 1, 4));
    assert_eq!(shifted.interval(), Duration::days(7));
    assert_eq!(shifted.amount(), 50.0);
    assert_eq!(original.timepoint(), ts(2022, 1, 1));
}

#[test]
fn test_shift_into_past_allows_earlier_occurrences() {
    let shifted = weekly_50().shift(Duration::days(-14));
    assert_eq!(
        shifted.cost_in_interval(&interval(ts(2021, 12, 1), ts(2022, 1, 1))),
        100.0
    );
}

#[test]
fn test_shift_round_trip() {
    let original = weekly_50();
    let d = Duration::hours(1234);
    assert_eq!(original.shift(d).shift(-d), original);
}

#[test]
fn test_checked_shift_out_of_range() {
    assert_eq!(weekly_50().checked_shift(Duration::days(1_000_000_000)), None);
    assert_eq!(
        weekly_50().checked_shift(Duration::days(3)),
        Some(weekly_50().shift(Duration::days(3)))
    );
}

#[test]
fn test_multiply() {
    let cost = weekly_50();
    let doubled = cost.clone() * 2.0;
    assert_eq!(doubled.amount(), 100.0);
    assert_eq!(doubled.interval(), cost.interval());
    assert_eq!(doubled.timepoint(), cost.timepoint());
    assert_eq!(
        doubled.cost_in_interval(&interval(ts(2022, 1, 1), ts(2022, 1, 22))),
        300.0
    );
}

#[test]
fn test_scale_round_trip() {
    let cost = weekly_50();
    assert_eq!((cost.clone() * 2.0) * 0.5, cost);
}

#[test]
fn test_inplace_multiply_and_copy_isolation() {
    let original = weekly_50();
    let mut copy = original.clone();
    copy *= 3.0;
    assert_eq!(copy.amount(), 150.0);
    assert_eq!(original.amount(), 50.0);
}

#[test]
fn test_sub_costs() {
    assert!(weekly_50().sub_costs().is_empty());
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display() {
    let text = weekly_50().to_string();
    assert!(text.contains("50.00 €"));
    assert!(text.contains("every 7 days"));
    assert!(text.contains("2022-01-01"));
}

#[test]
fn test_debug() {
    let text = format!("{:?}", weekly_50());
    assert!(text.contains("RepeatingOneTimeCost"));
    assert!(text.contains("Cleaning"));
}
