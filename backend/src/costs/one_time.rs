//! One-time cost
//!
//! A single transfer at one instant. The entire amount lands in whichever
//! interval includes the timepoint.

use chrono::Duration;
use std::fmt;

use super::{CostModel, DEFAULT_CURRENCY};
use crate::core::{Interval, Timestamp};

/// A cost that occurs exactly once, at `timepoint`
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use cost_model_core_rs::{CostModel, Interval, OneTimeCost};
///
/// let new_year = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
/// let fee = OneTimeCost::new("Setup fee", 100.0, new_year);
///
/// let january = Interval::new(
///     new_year,
///     Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap(),
/// ).unwrap();
/// assert_eq!(fee.cost_in_interval(&january), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneTimeCost {
    name: String,
    amount: f64,
    timepoint: Timestamp,
    currency: String,
}

impl OneTimeCost {
    /// Create a one-time cost in the default currency
    pub fn new(name: impl Into<String>, amount: f64, timepoint: Timestamp) -> Self {
        Self {
            name: name.into(),
            amount,
            timepoint,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Set the currency tag (builder pattern)
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn timepoint(&self) -> Timestamp {
        self.timepoint
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl CostModel for OneTimeCost {
    fn cost_in_interval(&self, interval: &Interval) -> f64 {
        if interval.includes(self.timepoint) {
            self.amount
        } else {
            0.0
        }
    }

    fn is_continuous(&self) -> bool {
        false
    }

    fn checked_shift(&self, duration: Duration) -> Option<Self> {
        Some(Self {
            timepoint: self.timepoint.checked_add_signed(duration)?,
            ..self.clone()
        })
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            amount: self.amount * factor,
            ..self.clone()
        }
    }

    fn scale_in_place(&mut self, factor: f64) -> &mut Self {
        self.amount *= factor;
        self
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for OneTimeCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {} @ {}", self.amount, self.currency, self.timepoint)
    }
}
