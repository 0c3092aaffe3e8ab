//! Time and interval primitives

pub mod interval;
pub mod time;

pub use interval::{Interval, IntervalError, Subdivisions};
pub use time::{Period, PeriodError, Timestamp};
