//! Type conversion utilities for FFI boundary
//!
//! Python passes timestamps as unix seconds and durations as seconds.

use chrono::{DateTime, Duration};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::ConfigError;
use crate::core::{Interval, IntervalError, Timestamp};

/// Convert unix seconds to a UTC timestamp
///
/// # Errors
/// Raises ValueError if the value is outside chrono's range.
pub fn timestamp_from_unix(seconds: i64) -> PyResult<Timestamp> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| PyValueError::new_err(format!("Timestamp {} out of range", seconds)))
}

/// Convert seconds to a duration
///
/// # Errors
/// Raises ValueError if the value is outside chrono's range.
pub fn duration_from_py(seconds: i64) -> PyResult<Duration> {
    Duration::try_seconds(seconds)
        .ok_or_else(|| PyValueError::new_err(format!("Duration of {}s out of range", seconds)))
}

/// Build an interval from a pair of unix timestamps
pub fn interval_from_unix(start: i64, end: i64) -> PyResult<Interval> {
    Interval::new(timestamp_from_unix(start)?, timestamp_from_unix(end)?).map_err(interval_error)
}

pub fn shift_out_of_range(name: &str, seconds: i64) -> PyErr {
    PyValueError::new_err(format!(
        "Shifting '{}' by {}s leaves the representable time range",
        name, seconds
    ))
}

pub fn interval_error(err: IntervalError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn config_error(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
