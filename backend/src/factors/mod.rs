//! Time-variable cost factors
//!
//! A cost factor maps a timestamp to a dimensionless multiplier:
//! - `1.0`: the cost stays the same
//! - `< 1.0`: the cost is decreased
//! - `> 1.0`: the cost is increased
//!
//! Factors are standalone. No cost variant consumes them yet; they are the
//! extension point for costs whose magnitude drifts over time (inflation,
//! negotiated discounts).
//!
//! # Implementing a factor
//!
//! Any `Fn(Timestamp) -> f64` is a factor:
//! ```
//! use chrono::{TimeZone, Utc};
//! use cost_model_core_rs::{Timestamp, TimeVariableCostFactor};
//!
//! let cutoff = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//! let discount_until_2023 = move |t: Timestamp| if t < cutoff { 0.8 } else { 1.0 };
//!
//! assert_eq!(discount_until_2023.cost_factor(cutoff), 1.0);
//! ```

pub mod linear;

use crate::core::Timestamp;

pub use linear::LinearTimeVariableCostFactor;

/// A function from a timestamp to a multiplicative cost factor
pub trait TimeVariableCostFactor {
    /// Multiplier for a cost occurring at `timestamp`
    fn cost_factor(&self, timestamp: Timestamp) -> f64;

    /// Multiply two factors pointwise
    fn and_then<F>(self, other: F) -> ProductFactor<Self, F>
    where
        Self: Sized,
        F: TimeVariableCostFactor,
    {
        ProductFactor {
            first: self,
            second: other,
        }
    }
}

impl<F> TimeVariableCostFactor for F
where
    F: Fn(Timestamp) -> f64,
{
    fn cost_factor(&self, timestamp: Timestamp) -> f64 {
        self(timestamp)
    }
}

/// Constant multiplier, independent of time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCostFactor(pub f64);

impl TimeVariableCostFactor for ConstantCostFactor {
    fn cost_factor(&self, _timestamp: Timestamp) -> f64 {
        self.0
    }
}

/// Pointwise product of two factors, built by [`TimeVariableCostFactor::and_then`]
#[derive(Debug, Clone)]
pub struct ProductFactor<A, B> {
    first: A,
    second: B,
}

impl<A, B> TimeVariableCostFactor for ProductFactor<A, B>
where
    A: TimeVariableCostFactor,
    B: TimeVariableCostFactor,
{
    fn cost_factor(&self, timestamp: Timestamp) -> f64 {
        self.first.cost_factor(timestamp) * self.second.cost_factor(timestamp)
    }
}
