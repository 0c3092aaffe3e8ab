//! Cost Model Core - Rust Engine
//!
//! Deterministic evaluation of recurring and one-off financial costs over
//! half-open time intervals.
//!
//! # Architecture
//!
//! - **core**: Timestamps, periods and half-open intervals
//! - **costs**: The cost contract and its variants (continuous, one-time,
//!   repeating, combined)
//! - **factors**: Time-variable cost factors
//! - **config**: JSON configuration of cost trees
//! - **projection**: Bucketed cash-flow projection
//!
//! # Critical Invariants
//!
//! 1. Every cost is additive over adjacent intervals
//! 2. Intervals are half-open: `[start, end)`
//! 3. Only `scale_in_place` / `*=` mutate; everything else returns new values
//! 4. Evaluation is pure: no I/O, no randomness, no shared state

// Module declarations
pub mod config;
pub mod core;
pub mod costs;
pub mod factors;
pub mod projection;

// Re-exports for convenience
pub use config::{ConfigError, CostConfig};
pub use crate::core::{Interval, IntervalError, Period, PeriodError, Timestamp};
pub use costs::{
    CombinedCost, ConstantContinuousCost, Cost, CostError, CostModel, OneTimeCost,
    RepeatingOneTimeCost,
};
pub use factors::{LinearTimeVariableCostFactor, TimeVariableCostFactor};
pub use projection::{CashFlow, CashFlowEntry};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn cost_model_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::cost::PyCost>()?;
    Ok(())
}
