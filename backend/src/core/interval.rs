//! Half-open time intervals
//!
//! An [`Interval`] is the window over which costs are queried. It contains
//! its start and excludes its end, so adjacent intervals `[a, b)` and
//! `[b, c)` partition `[a, c)` without double counting the instant `b`.

use chrono::Duration;
use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Mul;
use thiserror::Error;

use super::time::{duration_from_seconds, seconds, Timestamp};

/// Errors that can occur when constructing or transforming an interval
#[derive(Debug, Error, PartialEq)]
pub enum IntervalError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: Timestamp, end: Timestamp },

    #[error("Scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),

    #[error("Subdivision step must be positive, got {0}")]
    InvalidStep(Duration),

    #[error("Scaled interval size is out of range")]
    DurationOutOfRange,
}

/// A half-open time interval `[start, end)`
///
/// # Invariants
/// `start <= end`, enforced by [`Interval::new`]. Instances are immutable;
/// every transformation returns a new interval.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use cost_model_core_rs::Interval;
///
/// let jan = Interval::new(
///     Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap(),
/// ).unwrap();
///
/// assert!(jan.includes(jan.start()));
/// assert!(!jan.includes(jan.end()));
/// assert_eq!(jan.size().num_days(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// Create a new interval
    ///
    /// # Errors
    /// Returns `IntervalError::InvalidInterval` if `start > end`.
    /// Empty intervals (`start == end`) are allowed.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Exclusive end
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Length of the interval (`end - start`)
    pub fn size(&self) -> Duration {
        self.end - self.start
    }

    /// Returns `true` if `start <= timestamp < end`
    pub fn includes(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// Translate both endpoints by `duration` (negative moves into the past)
    ///
    /// # Panics
    /// Panics if either endpoint leaves chrono's representable range.
    pub fn shift(&self, duration: Duration) -> Self {
        Self {
            start: self.start + duration,
            end: self.end + duration,
        }
    }

    /// Returns `true` if this interval overlaps `other`
    ///
    /// The test is: `other` contains this interval's start, or `other`
    /// contains this interval's end and the two ends differ. Intervals that
    /// only touch at a boundary do not overlap.
    ///
    /// Note that the test is evaluated from this interval's endpoints, so it
    /// is not symmetric: an `other` lying strictly inside `self` is not
    /// reported as overlapping.
    ///
    /// # Example
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use cost_model_core_rs::Interval;
    ///
    /// let day = |d| Utc.with_ymd_and_hms(2022, 1, d, 0, 0, 0).unwrap();
    /// let a = Interval::new(day(1), day(10)).unwrap();
    /// let b = Interval::new(day(10), day(20)).unwrap();
    /// let c = Interval::new(day(5), day(15)).unwrap();
    ///
    /// assert!(!a.has_overlap(&b));
    /// assert!(a.has_overlap(&c));
    /// ```
    pub fn has_overlap(&self, other: &Interval) -> bool {
        other.includes(self.start) || (other.includes(self.end) && self.end != other.end)
    }

    /// Grow or shrink the interval by `factor`, keeping `start` fixed
    ///
    /// Factors > 1.0 grow the interval, factors < 1.0 shrink it.
    ///
    /// # Errors
    /// - `IntervalError::InvalidScaleFactor` if `factor <= 0` or not finite
    /// - `IntervalError::DurationOutOfRange` if the new end is not representable
    pub fn scaled(&self, factor: f64) -> Result<Self, IntervalError> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(IntervalError::InvalidScaleFactor(factor));
        }
        let size = duration_from_seconds(seconds(self.size()) * factor)
            .ok_or(IntervalError::DurationOutOfRange)?;
        let end = self
            .start
            .checked_add_signed(size)
            .ok_or(IntervalError::DurationOutOfRange)?;
        Ok(Self {
            start: self.start,
            end,
        })
    }

    /// Split the interval into consecutive sub-intervals of length `step`
    ///
    /// The pieces cover the interval exactly; the last one is truncated at
    /// `end`. An empty interval yields nothing.
    ///
    /// # Errors
    /// Returns `IntervalError::InvalidStep` if `step <= 0`.
    pub fn subdivide(&self, step: Duration) -> Result<Subdivisions, IntervalError> {
        if step <= Duration::zero() {
            return Err(IntervalError::InvalidStep(step));
        }
        Ok(Subdivisions {
            cursor: self.start,
            end: self.end,
            step,
        })
    }
}

/// `interval * factor` is [`Interval::scaled`] for trusted factors
///
/// # Panics
/// Panics if `factor <= 0`, if it is not finite, or if the new end is not
/// representable.
impl Mul<f64> for Interval {
    type Output = Interval;

    fn mul(self, factor: f64) -> Interval {
        match self.scaled(factor) {
            Ok(scaled) => scaled,
            Err(err) => panic!("cannot scale {}: {}", self, err),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Lazy iterator over the pieces of a subdivided [`Interval`]
#[derive(Debug, Clone)]
pub struct Subdivisions {
    cursor: Timestamp,
    end: Timestamp,
    step: Duration,
}

impl Iterator for Subdivisions {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let next = match self.cursor.checked_add_signed(self.step) {
            Some(next) if next < self.end => next,
            _ => self.end,
        };
        let piece = Interval {
            start: self.cursor,
            end: next,
        };
        self.cursor = next;
        Some(piece)
    }
}

impl FusedIterator for Subdivisions {}
