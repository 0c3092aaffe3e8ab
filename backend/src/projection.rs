//! Cash-flow projection
//!
//! Evaluates a cost over consecutive buckets of a window, e.g. one bucket
//! per week of a year. Because every cost is additive over adjacent
//! intervals, the bucket amounts sum to the cost of the whole window.

use chrono::Duration;
use serde::Serialize;

use crate::core::{Interval, IntervalError};
use crate::costs::CostModel;

/// Amount attributed to one bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowEntry {
    pub interval: Interval,
    pub amount: f64,
}

/// Per-bucket amounts over a window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlow {
    pub window: Interval,
    pub entries: Vec<CashFlowEntry>,
}

impl CashFlow {
    /// Sum over all buckets
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    /// Running totals, one per bucket
    pub fn cumulative(&self) -> Vec<f64> {
        self.entries
            .iter()
            .scan(0.0, |running, entry| {
                *running += entry.amount;
                Some(*running)
            })
            .collect()
    }
}

/// Evaluate `cost` over `window`, split into buckets of length `step`
///
/// The last bucket is truncated at the window's end.
///
/// # Errors
/// Returns `IntervalError::InvalidStep` if `step <= 0`.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use cost_model_core_rs::{projection, Interval, OneTimeCost};
///
/// let day = |d| Utc.with_ymd_and_hms(2022, 1, d, 0, 0, 0).unwrap();
/// let fee = OneTimeCost::new("Fee", 30.0, day(9));
/// let window = Interval::new(day(1), day(15)).unwrap();
///
/// let flow = projection::project(&fee, &window, Duration::weeks(1)).unwrap();
/// let amounts: Vec<f64> = flow.entries.iter().map(|e| e.amount).collect();
/// assert_eq!(amounts, vec![0.0, 30.0]);
/// ```
pub fn project<C: CostModel>(
    cost: &C,
    window: &Interval,
    step: Duration,
) -> Result<CashFlow, IntervalError> {
    let entries: Vec<CashFlowEntry> = window
        .subdivide(step)?
        .map(|interval| CashFlowEntry {
            amount: cost.cost_in_interval(&interval),
            interval,
        })
        .collect();

    tracing::debug!(
        cost = cost.name(),
        window = %window,
        buckets = entries.len(),
        "projected cash flow"
    );

    Ok(CashFlow {
        window: *window,
        entries,
    })
}
