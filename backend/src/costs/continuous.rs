//! Constant continuous cost
//!
//! A fixed rate ("100 € per month") spread evenly over time. The rate is
//! normalized to cost per second once, at construction; every query is a
//! single multiplication by the interval length in seconds.

use chrono::Duration;
use std::fmt;

use super::{CostError, CostModel, DEFAULT_CURRENCY};
use crate::core::time::{seconds, MONTH_SECONDS, YEAR_SECONDS};
use crate::core::{Interval, Period};

/// A cost that accrues at a constant rate
///
/// Has no anchor in time: the cost of an interval depends only on its
/// length, so [`CostModel::shift`] returns an unchanged copy.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use cost_model_core_rs::{ConstantContinuousCost, CostModel, Interval, Period};
///
/// let salary = ConstantContinuousCost::new("Salary", -3000.0, Period::Month).unwrap();
/// let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
/// let week = Interval::new(start, start + Duration::weeks(1)).unwrap();
///
/// let expected = salary.rate_per_second() * 7.0 * 86_400.0;
/// assert_eq!(salary.cost_in_interval(&week), expected);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantContinuousCost {
    name: String,
    /// Amount per `period`, as given by the caller
    amount: f64,
    period: Period,
    currency: String,
    /// `amount / period` in cost per second
    rate_per_second: f64,
}

impl ConstantContinuousCost {
    /// Create a continuous cost of `amount` per `per`
    ///
    /// # Errors
    /// Returns `CostError::Period` if `per` is zero or negative.
    pub fn new(name: impl Into<String>, amount: f64, per: Period) -> Result<Self, CostError> {
        let period_seconds = seconds(per.positive_duration()?);
        Ok(Self {
            name: name.into(),
            amount,
            period: per,
            currency: DEFAULT_CURRENCY.to_string(),
            rate_per_second: amount / period_seconds,
        })
    }

    /// Set the currency tag (builder pattern)
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Amount per period, as given (scaled by any later scaling)
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Normalized rate in cost per second
    pub fn rate_per_second(&self) -> f64 {
        self.rate_per_second
    }

    /// Cost per average Gregorian month (2 629 746 s)
    pub fn monthly(&self) -> f64 {
        self.rate_per_second * MONTH_SECONDS as f64
    }

    /// Cost per average Gregorian year (31 556 952 s, twelve months)
    pub fn yearly(&self) -> f64 {
        self.rate_per_second * YEAR_SECONDS as f64
    }
}

impl CostModel for ConstantContinuousCost {
    fn cost_in_interval(&self, interval: &Interval) -> f64 {
        self.rate_per_second * seconds(interval.size())
    }

    fn is_continuous(&self) -> bool {
        true
    }

    fn checked_shift(&self, _duration: Duration) -> Option<Self> {
        Some(self.clone())
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            amount: self.amount * factor,
            rate_per_second: self.rate_per_second * factor,
            ..self.clone()
        }
    }

    fn scale_in_place(&mut self, factor: f64) -> &mut Self {
        self.amount *= factor;
        self.rate_per_second *= factor;
        self
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ConstantContinuousCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} per {} ({:.2} {}/month)",
            self.amount,
            self.currency,
            self.period,
            self.monthly(),
            self.currency
        )
    }
}
