//! Tests for CombinedCost

use chrono::{Duration, TimeZone, Utc};
use cost_model_core_rs::{
    CombinedCost, ConstantContinuousCost, Cost, CostModel, Interval, OneTimeCost, Period,
    RepeatingOneTimeCost, Timestamp,
};

fn ts(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn interval(start: Timestamp, end: Timestamp) -> Interval {
    Interval::new(start, end).unwrap()
}

fn one_time() -> OneTimeCost {
    OneTimeCost::new("Deposit", 100.0, ts(2022, 1, 1))
}

fn continuous() -> ConstantContinuousCost {
    ConstantContinuousCost::new("Rent", 50.0, Period::Month).unwrap()
}

fn repeating() -> RepeatingOneTimeCost {
    RepeatingOneTimeCost::new("Cleaning", 20.0, ts(2022, 1, 3), Duration::weeks(1)).unwrap()
}

/// Helper to create a combined cost of all three leaf variants
fn household() -> CombinedCost {
    CombinedCost::new(
        "Household",
        vec![one_time().into(), continuous().into(), repeating().into()],
    )
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_sum_of_children() {
    let combined = CombinedCost::new("Pair", vec![one_time().into(), continuous().into()]);
    let january = interval(ts(2022, 1, 1), ts(2022, 2, 1));

    let expected = one_time().cost_in_interval(&january) + continuous().cost_in_interval(&january);
    assert_close(combined.cost_in_interval(&january), expected);
}

#[test]
fn test_sum_of_all_variants() {
    let january = interval(ts(2022, 1, 1), ts(2022, 2, 1));
    // Cleaning on Jan 3, 10, 17, 24, 31
    let expected = 100.0 + continuous().cost_in_interval(&january) + 5.0 * 20.0;
    assert_close(household().cost_in_interval(&january), expected);
}

#[test]
fn test_empty_combined_costs_nothing() {
    let empty = CombinedCost::new("Nothing", vec![]);
    assert!(empty.is_empty());
    assert_eq!(
        empty.cost_in_interval(&interval(ts(2022, 1, 1), ts(2023, 1, 1))),
        0.0
    );
}

#[test]
fn test_nested_combined() {
    let inner = household();
    let outer = CombinedCost::new("Outer", vec![inner.clone().into(), one_time().into()]);
    let january = interval(ts(2022, 1, 1), ts(2022, 2, 1));
    assert_close(
        outer.cost_in_interval(&january),
        inner.cost_in_interval(&january) + 100.0,
    );
}

#[test]
fn test_with_cost_builder_preserves_order() {
    let combined = CombinedCost::new("Built", vec![])
        .with_cost(one_time())
        .with_cost(repeating());
    let names: Vec<_> = combined.costs().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Deposit", "Cleaning"]);
    assert_eq!(combined.len(), 2);
}

// ============================================================================
// Contract
// ============================================================================

#[test]
fn test_is_continuous_even_with_event_children() {
    let events = CombinedCost::new("Events", vec![one_time().into(), repeating().into()]);
    assert!(events.is_continuous());
    assert!(Cost::from(events).is_continuous());
}

#[test]
fn test_sub_costs_exposes_children() {
    let combined = household();
    assert_eq!(combined.sub_costs().len(), 3);
    assert_eq!(combined.sub_costs()[0], Cost::from(one_time()));

    let wrapped = Cost::from(combined);
    assert_eq!(wrapped.sub_costs().len(), 3);
}

#[test]
fn test_shift_shifts_every_child() {
    let shifted = household().shift(Duration::days(10));
    let children = shifted.sub_costs();

    assert_eq!(children[0], Cost::from(one_time().shift(Duration::days(10))));
    assert_eq!(children[1], Cost::from(continuous()));
    assert_eq!(children[2], Cost::from(repeating().shift(Duration::days(10))));
    assert_eq!(shifted.name(), "Household");
}

#[test]
fn test_shift_round_trip() {
    let original = household();
    let d = Duration::days(-400);
    assert_eq!(original.shift(d).shift(-d), original);
}

#[test]
fn test_checked_shift_fails_if_any_child_overflows() {
    let far = Duration::try_seconds(10_000_000_000_000).unwrap();
    assert_eq!(household().checked_shift(far), None);

    // A tree of continuous costs has no timestamps to overflow
    let rates = CombinedCost::new("Rates", vec![continuous().into()]);
    assert_eq!(rates.checked_shift(far), Some(rates.clone()));
}

#[test]
fn test_multiply_scales_every_child() {
    let january = interval(ts(2022, 1, 1), ts(2022, 2, 1));
    let original = household();
    let tripled = original.clone() * 3.0;
    assert_close(
        tripled.cost_in_interval(&january),
        3.0 * original.cost_in_interval(&january),
    );
    assert_eq!(tripled.sub_costs()[0], Cost::from(one_time() * 3.0));
}

#[test]
fn test_inplace_multiply() {
    let mut combined = household();
    combined *= 2.0;
    assert_eq!(combined.sub_costs()[0], Cost::from(one_time() * 2.0));
    assert_eq!(combined.sub_costs()[2], Cost::from(repeating() * 2.0));
}

#[test]
fn test_copy_isolation() {
    let original = household();
    let mut copy = original.clone();
    copy.scale_in_place(10.0);
    assert_eq!(original, household());
    assert_ne!(copy, original);
}

#[test]
fn test_scale_round_trip() {
    let january = interval(ts(2022, 1, 1), ts(2022, 2, 1));
    let original = household();
    let round_trip = (original.clone() * 2.0) * 0.5;
    assert_close(
        round_trip.cost_in_interval(&january),
        original.cost_in_interval(&january),
    );
}

// ============================================================================
// Cost enum
// ============================================================================

#[test]
fn test_walk_includes_self_and_leaves() {
    let tree = Cost::from(CombinedCost::new(
        "Root",
        vec![household().into(), one_time().into()],
    ));
    let names: Vec<_> = tree.walk().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["Root", "Household", "Deposit", "Rent", "Cleaning", "Deposit"]
    );
}

#[test]
fn test_enum_operators() {
    let january = interval(ts(2022, 1, 1), ts(2022, 2, 1));
    let mut cost = Cost::from(household());
    let before = cost.cost_in_interval(&january);
    cost *= 2.0;
    assert_close(cost.cost_in_interval(&january), 2.0 * before);

    let halved = &cost * 0.5;
    assert_close(halved.cost_in_interval(&january), before);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_lists_children() {
    let text = household().to_string();
    assert!(text.starts_with("Household: "));
    assert!(text.contains("100.00 €"));
    assert!(text.contains("50.00 € per month"));
    assert!(text.contains("20.00 € every 7 days"));
}

#[test]
fn test_debug_is_reconstructable() {
    let text = format!("{:?}", household());
    assert!(text.contains("CombinedCost"));
    assert!(text.contains("OneTime(OneTimeCost"));
}
