//! Repeating one-time cost
//!
//! A transfer of `amount` at `timepoint`, `timepoint + interval`,
//! `timepoint + 2 * interval`, ... with no end. Nothing happens before
//! `timepoint`.
//!
//! # Enumeration
//!
//! Occurrences are produced lazily by [`Occurrences`]. A query never
//! materializes the sequence: it starts at the first occurrence that can
//! fall into the queried interval and stops as soon as an occurrence
//! reaches the interval's end, so work is proportional to
//! `interval.size / repetition interval`.

use chrono::Duration;
use std::fmt;
use std::iter::FusedIterator;

use super::{CostError, CostModel, DEFAULT_CURRENCY};
use crate::core::time::format_duration;
use crate::core::{Interval, Period, Timestamp};

/// A cost that recurs every `interval`, starting at `timepoint`
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use cost_model_core_rs::{CostModel, Interval, RepeatingOneTimeCost};
///
/// let day = |d| Utc.with_ymd_and_hms(2022, 1, d, 0, 0, 0).unwrap();
/// let cleaning = RepeatingOneTimeCost::new("Cleaning", 50.0, day(1), Duration::days(7)).unwrap();
///
/// // Jan 1, 8 and 15; Jan 22 is excluded
/// let three_weeks = Interval::new(day(1), day(22)).unwrap();
/// assert_eq!(cleaning.cost_in_interval(&three_weeks), 150.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingOneTimeCost {
    name: String,
    amount: f64,
    /// First occurrence
    timepoint: Timestamp,
    /// Step between occurrences, strictly positive. Kept as given so a
    /// named period survives a round trip through configuration.
    every: Period,
    currency: String,
}

impl RepeatingOneTimeCost {
    /// Create a repeating cost with an arbitrary step, in the default currency
    ///
    /// # Errors
    /// Returns `CostError::InvalidRepetitionInterval` if `interval <= 0`.
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        timepoint: Timestamp,
        interval: Duration,
    ) -> Result<Self, CostError> {
        Self::every(name, amount, timepoint, Period::from(interval))
    }

    /// Create a repeating cost that recurs once per `period`
    ///
    /// # Errors
    /// Returns `CostError::InvalidRepetitionInterval` if the period is not
    /// strictly positive.
    pub fn every(
        name: impl Into<String>,
        amount: f64,
        timepoint: Timestamp,
        period: Period,
    ) -> Result<Self, CostError> {
        let interval = period.duration();
        if interval <= Duration::zero() {
            return Err(CostError::InvalidRepetitionInterval(interval));
        }
        Ok(Self {
            name: name.into(),
            amount,
            timepoint,
            every: period,
            currency: DEFAULT_CURRENCY.to_string(),
        })
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

    pub fn interval(&self) -> Duration {
        self.every.duration()
    }

    /// The repetition step as it was given, named or custom
    pub fn period(&self) -> Period {
        self.every
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// All occurrences, starting at `timepoint`
    pub fn occurrences(&self) -> Occurrences {
        Occurrences {
            upcoming: Some(self.timepoint),
            step: self.interval(),
        }
    }

    /// Occurrences at or after `from`
    ///
    /// Jumps directly to the first occurrence `>= from`, so the cost of the
    /// call does not depend on how far `from` lies after `timepoint`. Empty
    /// if that occurrence is beyond chrono's representable range.
    pub fn occurrences_from(&self, from: Timestamp) -> Occurrences {
        Occurrences {
            upcoming: self.first_at_or_after(from),
            step: self.interval(),
        }
    }

    fn first_at_or_after(&self, from: Timestamp) -> Option<Timestamp> {
        if from <= self.timepoint {
            return Some(self.timepoint);
        }
        let gap = total_nanos(from - self.timepoint);
        let step = total_nanos(self.interval());
        let steps = gap / step + i128::from(gap % step != 0);
        let offset = steps.checked_mul(step)?;

        let secs = i64::try_from(offset / NANOS_PER_SECOND).ok()?;
        let nanos = i64::try_from(offset % NANOS_PER_SECOND).ok()?;
        let offset = Duration::try_seconds(secs)?.checked_add(&Duration::nanoseconds(nanos))?;
        self.timepoint.checked_add_signed(offset)
    }
}

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Exact length of a duration in nanoseconds, without the ~292 year limit
/// of `Duration::num_nanoseconds`
fn total_nanos(duration: Duration) -> i128 {
    i128::from(duration.num_seconds()) * NANOS_PER_SECOND + i128::from(duration.subsec_nanos())
}

impl CostModel for RepeatingOneTimeCost {
    fn cost_in_interval(&self, interval: &Interval) -> f64 {
        if interval.end() <= self.timepoint {
            return 0.0;
        }
        self.occurrences_from(interval.start())
            .take_while(|t| *t < interval.end())
            .filter(|t| interval.includes(*t))
            .map(|_| self.amount)
            .sum()
    }

    fn is_continuous(&self) -> bool {
        false
    }

    /// Moves the first occurrence; the repetition interval is unchanged
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

impl fmt::Display for RepeatingOneTimeCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} every {} starting from {}",
            self.amount,
            self.currency,
            format_duration(self.interval()),
            self.timepoint
        )
    }
}

/// Lazy, unbounded iterator over occurrence timestamps
///
/// Strictly increasing. Ends only if the next timestamp would leave
/// chrono's representable range.
#[derive(Debug, Clone)]
pub struct Occurrences {
    upcoming: Option<Timestamp>,
    step: Duration,
}

impl Iterator for Occurrences {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.upcoming?;
        self.upcoming = current.checked_add_signed(self.step);
        Some(current)
    }
}

impl FusedIterator for Occurrences {}
