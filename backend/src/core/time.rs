//! Time primitives for the cost model
//!
//! Timestamps are absolute UTC instants. Durations are signed chrono
//! durations with nanosecond resolution. All rate arithmetic goes through
//! [`seconds`] so there is exactly one place where a duration becomes a
//! floating point number.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Absolute point in time used throughout the model
pub type Timestamp = DateTime<Utc>;

/// Seconds in one minute
pub const MINUTE_SECONDS: i64 = 60;
/// Seconds in one hour
pub const HOUR_SECONDS: i64 = 60 * MINUTE_SECONDS;
/// Seconds in one day
pub const DAY_SECONDS: i64 = 24 * HOUR_SECONDS;
/// Seconds in one week
pub const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;
/// Seconds in one average Gregorian year (365.2425 days)
pub const YEAR_SECONDS: i64 = 31_556_952;
/// Seconds in one average Gregorian month (one twelfth of a year)
pub const MONTH_SECONDS: i64 = YEAR_SECONDS / 12;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Convert a duration to (fractional) seconds
///
/// # Example
/// ```
/// use chrono::Duration;
/// use cost_model_core_rs::core::time::seconds;
///
/// assert_eq!(seconds(Duration::milliseconds(1500)), 1.5);
/// assert_eq!(seconds(Duration::milliseconds(-1500)), -1.5);
/// ```
pub fn seconds(duration: Duration) -> f64 {
    // subsec_nanos carries the sign of the duration
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / NANOS_PER_SECOND
}

/// Convert (fractional) seconds back to a duration
///
/// Rounds to the nearest nanosecond. Returns `None` for non-finite input
/// or values outside chrono's representable range.
pub fn duration_from_seconds(secs: f64) -> Option<Duration> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.trunc();
    if whole.abs() >= i64::MAX as f64 {
        return None;
    }
    let nanos = ((secs - whole) * NANOS_PER_SECOND).round() as i64;
    Duration::try_seconds(whole as i64)?.checked_add(&Duration::nanoseconds(nanos))
}

/// Errors raised when interpreting a period
#[derive(Debug, Error, PartialEq)]
pub enum PeriodError {
    #[error("Unknown period name '{0}'")]
    Unknown(String),

    #[error("Period must be positive, got {0}")]
    NonPositive(Duration),

    #[error("Period of {0} seconds is not a representable duration")]
    OutOfRange(f64),
}

/// A named or custom span of time
///
/// Used as the denominator of continuous rates ("100 € per month") and as
/// the step of repeating costs ("every week").
///
/// Calendar periods use average Gregorian lengths so that twelve months
/// are exactly one year:
/// - `Month` = 2 629 746 s (30.436875 days)
/// - `Year` = 31 556 952 s (365.2425 days)
///
/// # Example
/// ```
/// use cost_model_core_rs::Period;
///
/// let month: Period = "month".parse().unwrap();
/// assert_eq!(month, Period::Month);
/// assert_eq!(Period::Year.seconds(), 12.0 * Period::Month.seconds());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodRepr", into = "PeriodRepr")]
pub enum Period {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    /// Arbitrary duration
    Custom(Duration),
}

impl Period {
    /// Length of this period as a duration
    pub fn duration(&self) -> Duration {
        match self {
            Period::Second => Duration::seconds(1),
            Period::Minute => Duration::seconds(MINUTE_SECONDS),
            Period::Hour => Duration::seconds(HOUR_SECONDS),
            Period::Day => Duration::seconds(DAY_SECONDS),
            Period::Week => Duration::seconds(WEEK_SECONDS),
            Period::Month => Duration::seconds(MONTH_SECONDS),
            Period::Year => Duration::seconds(YEAR_SECONDS),
            Period::Custom(duration) => *duration,
        }
    }

    /// Length of this period in seconds
    pub fn seconds(&self) -> f64 {
        seconds(self.duration())
    }

    /// Length of this period, rejecting zero and negative spans
    ///
    /// # Errors
    /// Returns `PeriodError::NonPositive` if the duration is `<= 0`.
    pub fn positive_duration(&self) -> Result<Duration, PeriodError> {
        let duration = self.duration();
        if duration <= Duration::zero() {
            return Err(PeriodError::NonPositive(duration));
        }
        Ok(duration)
    }

    fn name(&self) -> Option<&'static str> {
        match self {
            Period::Second => Some("second"),
            Period::Minute => Some("minute"),
            Period::Hour => Some("hour"),
            Period::Day => Some("day"),
            Period::Week => Some("week"),
            Period::Month => Some("month"),
            Period::Year => Some("year"),
            Period::Custom(_) => None,
        }
    }
}

impl From<Duration> for Period {
    fn from(duration: Duration) -> Self {
        Period::Custom(duration)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "second" => Ok(Period::Second),
            "minute" => Ok(Period::Minute),
            "hour" => Ok(Period::Hour),
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(PeriodError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", format_duration(self.duration())),
        }
    }
}

/// Render a duration compactly for summaries, e.g. `7 days` or `90s`
pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 && duration.num_seconds() % DAY_SECONDS == 0 {
        let days = duration.num_days();
        if days.abs() == 1 {
            format!("{} day", days)
        } else {
            format!("{} days", days)
        }
    } else {
        format!("{}s", seconds(duration))
    }
}

/// Wire format: `"month"` or `{"custom_seconds": 604800}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PeriodRepr {
    Named(String),
    Custom { custom_seconds: f64 },
}

impl TryFrom<PeriodRepr> for Period {
    type Error = PeriodError;

    fn try_from(repr: PeriodRepr) -> Result<Self, Self::Error> {
        match repr {
            PeriodRepr::Named(name) => name.parse(),
            PeriodRepr::Custom { custom_seconds } => duration_from_seconds(custom_seconds)
                .map(Period::Custom)
                .ok_or(PeriodError::OutOfRange(custom_seconds)),
        }
    }
}

impl From<Period> for PeriodRepr {
    fn from(period: Period) -> Self {
        match period.name() {
            Some(name) => PeriodRepr::Named(name.to_string()),
            None => PeriodRepr::Custom {
                custom_seconds: period.seconds(),
            },
        }
    }
}
