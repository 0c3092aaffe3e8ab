//! Linear ramp cost factor

use std::fmt;

use super::TimeVariableCostFactor;
use crate::core::time::seconds;
use crate::core::{Period, PeriodError, Timestamp};

/// A factor that grows linearly with the time elapsed since `t0`
///
/// `factor(t) = 1.0 + increase_factor * (t - t0) / per`
///
/// At `t0` the factor is exactly `1.0`; before `t0` it falls below `1.0`
/// at the same rate.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use cost_model_core_rs::{LinearTimeVariableCostFactor, Period, TimeVariableCostFactor};
///
/// let t0 = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
/// // +2% per day
/// let ramp = LinearTimeVariableCostFactor::new(t0, 0.02, Period::Day).unwrap();
///
/// let ten_days_later = Utc.with_ymd_and_hms(2022, 1, 11, 0, 0, 0).unwrap();
/// assert!((ramp.cost_factor(ten_days_later) - 1.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTimeVariableCostFactor {
    t0: Timestamp,
    increase_factor: f64,
    per: Period,
    /// `increase_factor / per` in factor units per second
    factor_per_second: f64,
}

impl LinearTimeVariableCostFactor {
    /// Create a ramp that adds `increase_factor` every `per` after `t0`
    ///
    /// # Errors
    /// Returns `PeriodError::NonPositive` if `per` is zero or negative.
    pub fn new(t0: Timestamp, increase_factor: f64, per: Period) -> Result<Self, PeriodError> {
        let per_seconds = seconds(per.positive_duration()?);
        Ok(Self {
            t0,
            increase_factor,
            per,
            factor_per_second: increase_factor / per_seconds,
        })
    }

    pub fn t0(&self) -> Timestamp {
        self.t0
    }

    pub fn increase_factor(&self) -> f64 {
        self.increase_factor
    }

    pub fn per(&self) -> Period {
        self.per
    }
}

impl TimeVariableCostFactor for LinearTimeVariableCostFactor {
    fn cost_factor(&self, timestamp: Timestamp) -> f64 {
        1.0 + self.factor_per_second * seconds(timestamp - self.t0)
    }
}

impl fmt::Display for LinearTimeVariableCostFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+} per {} since {}",
            self.increase_factor, self.per, self.t0
        )
    }
}
