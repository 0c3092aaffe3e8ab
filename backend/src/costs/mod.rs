//! Cost variants and the contract they share
//!
//! Every cost answers one question: how much money moved during a
//! half-open [`Interval`]? The set of variants is closed:
//!
//! 1. **ConstantContinuous**: a fixed rate, linearly apportioned over time
//! 2. **OneTime**: a single transfer at one instant
//! 3. **RepeatingOneTime**: a transfer repeated at a fixed step, forever
//! 4. **Combined**: an ordered list of child costs, summed
//!
//! All variants implement [`CostModel`]; [`Cost`] wraps them in one enum
//! and dispatches.
//!
//! # Value semantics
//!
//! `shift`, `scaled`, `*` and `clone` never touch the receiver. The only
//! mutating operation is [`CostModel::scale_in_place`] (also available as
//! `*=`), which needs `&mut self`, so concurrent mutation of one instance
//! is ruled out by the borrow checker rather than by locking.
//!
//! # Example
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use cost_model_core_rs::{
//!     CombinedCost, ConstantContinuousCost, Cost, CostModel, Interval, OneTimeCost, Period,
//! };
//!
//! let jan_1 = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
//! let rent = ConstantContinuousCost::new("Rent", 900.0, Period::Month).unwrap();
//! let deposit = OneTimeCost::new("Deposit", 1800.0, jan_1);
//! let flat = Cost::from(CombinedCost::new("Flat", vec![rent.into(), deposit.into()]));
//!
//! let first_day = Interval::new(jan_1, jan_1 + Duration::days(1)).unwrap();
//! assert!(flat.cost_in_interval(&first_day) > 1800.0);
//! ```

pub mod combined;
pub mod continuous;
pub mod one_time;
pub mod repeating;

use chrono::Duration;
use std::fmt;
use std::ops::{Mul, MulAssign};
use thiserror::Error;

use crate::core::{Interval, PeriodError};

pub use combined::CombinedCost;
pub use continuous::ConstantContinuousCost;
pub use one_time::OneTimeCost;
pub use repeating::{Occurrences, RepeatingOneTimeCost};

/// Currency tag used when none is given
pub const DEFAULT_CURRENCY: &str = "€";

/// Errors that can occur when constructing a cost
#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error("Repetition interval must be positive, got {0}")]
    InvalidRepetitionInterval(Duration),

    #[error("Invalid rate period: {0}")]
    Period(#[from] PeriodError),
}

/// Contract shared by every cost variant
///
/// `Clone` is the copy operation: a clone never shares mutable state with
/// its source.
pub trait CostModel: Clone {
    /// Total signed amount attributable to `[interval.start, interval.end)`
    ///
    /// Additive over adjacent intervals: for `a <= b <= c`,
    /// `cost([a, c)) == cost([a, b)) + cost([b, c))`.
    fn cost_in_interval(&self, interval: &Interval) -> f64;

    /// Whether the cost can be linearly apportioned onto any sub-interval
    ///
    /// This is a fixed per-variant flag, never derived from children.
    fn is_continuous(&self) -> bool;

    /// A copy of this cost moved in time by `duration`
    ///
    /// Positive durations move into the future. Costs without an absolute
    /// anchor in time return an unchanged copy.
    ///
    /// # Panics
    /// Panics if a shifted timestamp leaves chrono's representable range.
    /// Use [`CostModel::checked_shift`] for untrusted durations.
    fn shift(&self, duration: Duration) -> Self {
        match self.checked_shift(duration) {
            Some(shifted) => shifted,
            None => panic!(
                "shifting cost '{}' by {} leaves the representable time range",
                self.name(),
                duration
            ),
        }
    }

    /// Like [`CostModel::shift`], but `None` if any shifted timestamp
    /// would leave chrono's representable range
    fn checked_shift(&self, duration: Duration) -> Option<Self>;

    /// A copy of this cost with its monetary magnitude multiplied by `factor`
    ///
    /// Timing, currency and name are preserved.
    fn scaled(&self, factor: f64) -> Self;

    /// Multiply this cost's monetary magnitude by `factor`, in place
    ///
    /// The single mutating operation of the model. Returns the receiver.
    fn scale_in_place(&mut self, factor: f64) -> &mut Self;

    /// Direct children for tree traversal; empty for leaf variants
    fn sub_costs(&self) -> &[Cost] {
        &[]
    }

    /// Human-readable identification, not used in computation
    fn name(&self) -> &str;
}

/// Any cost variant
#[derive(Debug, Clone, PartialEq)]
pub enum Cost {
    ConstantContinuous(ConstantContinuousCost),
    OneTime(OneTimeCost),
    RepeatingOneTime(RepeatingOneTimeCost),
    Combined(CombinedCost),
}

impl Cost {
    /// Currency tag of a leaf cost; `None` for combined costs
    pub fn currency(&self) -> Option<&str> {
        match self {
            Cost::ConstantContinuous(cost) => Some(cost.currency()),
            Cost::OneTime(cost) => Some(cost.currency()),
            Cost::RepeatingOneTime(cost) => Some(cost.currency()),
            Cost::Combined(_) => None,
        }
    }

    /// Depth-first, pre-order walk over this cost and all descendants
    pub fn walk(&self) -> Vec<&Cost> {
        let mut stack = vec![self];
        let mut visited = Vec::new();
        while let Some(cost) = stack.pop() {
            visited.push(cost);
            stack.extend(cost.sub_costs().iter().rev());
        }
        visited
    }
}

impl CostModel for Cost {
    fn cost_in_interval(&self, interval: &Interval) -> f64 {
        match self {
            Cost::ConstantContinuous(cost) => cost.cost_in_interval(interval),
            Cost::OneTime(cost) => cost.cost_in_interval(interval),
            Cost::RepeatingOneTime(cost) => cost.cost_in_interval(interval),
            Cost::Combined(cost) => cost.cost_in_interval(interval),
        }
    }

    fn is_continuous(&self) -> bool {
        match self {
            Cost::ConstantContinuous(cost) => cost.is_continuous(),
            Cost::OneTime(cost) => cost.is_continuous(),
            Cost::RepeatingOneTime(cost) => cost.is_continuous(),
            Cost::Combined(cost) => cost.is_continuous(),
        }
    }

    fn checked_shift(&self, duration: Duration) -> Option<Self> {
        Some(match self {
            Cost::ConstantContinuous(cost) => cost.checked_shift(duration)?.into(),
            Cost::OneTime(cost) => cost.checked_shift(duration)?.into(),
            Cost::RepeatingOneTime(cost) => cost.checked_shift(duration)?.into(),
            Cost::Combined(cost) => cost.checked_shift(duration)?.into(),
        })
    }

    fn scaled(&self, factor: f64) -> Self {
        match self {
            Cost::ConstantContinuous(cost) => cost.scaled(factor).into(),
            Cost::OneTime(cost) => cost.scaled(factor).into(),
            Cost::RepeatingOneTime(cost) => cost.scaled(factor).into(),
            Cost::Combined(cost) => cost.scaled(factor).into(),
        }
    }

    fn scale_in_place(&mut self, factor: f64) -> &mut Self {
        match self {
            Cost::ConstantContinuous(cost) => {
                cost.scale_in_place(factor);
            }
            Cost::OneTime(cost) => {
                cost.scale_in_place(factor);
            }
            Cost::RepeatingOneTime(cost) => {
                cost.scale_in_place(factor);
            }
            Cost::Combined(cost) => {
                cost.scale_in_place(factor);
            }
        }
        self
    }

    fn sub_costs(&self) -> &[Cost] {
        match self {
            Cost::Combined(cost) => cost.sub_costs(),
            _ => &[],
        }
    }

    fn name(&self) -> &str {
        match self {
            Cost::ConstantContinuous(cost) => cost.name(),
            Cost::OneTime(cost) => cost.name(),
            Cost::RepeatingOneTime(cost) => cost.name(),
            Cost::Combined(cost) => cost.name(),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::ConstantContinuous(cost) => fmt::Display::fmt(cost, f),
            Cost::OneTime(cost) => fmt::Display::fmt(cost, f),
            Cost::RepeatingOneTime(cost) => fmt::Display::fmt(cost, f),
            Cost::Combined(cost) => fmt::Display::fmt(cost, f),
        }
    }
}

impl From<ConstantContinuousCost> for Cost {
    fn from(cost: ConstantContinuousCost) -> Self {
        Cost::ConstantContinuous(cost)
    }
}

impl From<OneTimeCost> for Cost {
    fn from(cost: OneTimeCost) -> Self {
        Cost::OneTime(cost)
    }
}

impl From<RepeatingOneTimeCost> for Cost {
    fn from(cost: RepeatingOneTimeCost) -> Self {
        Cost::RepeatingOneTime(cost)
    }
}

impl From<CombinedCost> for Cost {
    fn from(cost: CombinedCost) -> Self {
        Cost::Combined(cost)
    }
}

/// `cost * factor` and `cost *= factor` for every variant
macro_rules! impl_scaling_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Mul<f64> for $ty {
                type Output = $ty;

                fn mul(self, factor: f64) -> Self::Output {
                    self.scaled(factor)
                }
            }

            impl Mul<f64> for &$ty {
                type Output = $ty;

                fn mul(self, factor: f64) -> Self::Output {
                    self.scaled(factor)
                }
            }

            impl MulAssign<f64> for $ty {
                fn mul_assign(&mut self, factor: f64) {
                    self.scale_in_place(factor);
                }
            }
        )*
    };
}

impl_scaling_ops!(
    Cost,
    ConstantContinuousCost,
    OneTimeCost,
    RepeatingOneTimeCost,
    CombinedCost,
);
