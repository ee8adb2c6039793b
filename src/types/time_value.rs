//! Three-state time value used throughout the engine

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A time in seconds that may be missing or known to be invalid.
///
/// - `Missing`: nothing was recorded (e.g. a missed punch).
/// - `Dubious`: a value was recorded but data repair determined it is invalid.
/// - `Known`: a usable number of seconds, possibly fractional.
///
/// Arithmetic propagates the "worst" state: `Missing` wins over `Dubious`,
/// which wins over `Known`. A `Known` never holds NaN; use [`TimeValue::from_seconds`]
/// to convert raw floats.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum TimeValue {
    #[default]
    Missing,
    Dubious,
    Known(f64),
}

impl TimeValue {
    /// Zero seconds, the cumulative time at the start.
    pub const ZERO: TimeValue = TimeValue::Known(0.0);

    /// Convert a raw number of seconds, mapping NaN to `Dubious`.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_nan() { TimeValue::Dubious } else { TimeValue::Known(seconds) }
    }

    /// Usable number of seconds, if any.
    pub fn known(self) -> Option<f64> {
        match self {
            TimeValue::Known(seconds) => Some(seconds),
            TimeValue::Missing | TimeValue::Dubious => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, TimeValue::Known(_))
    }

    pub fn is_missing(self) -> bool {
        matches!(self, TimeValue::Missing)
    }

    pub fn is_dubious(self) -> bool {
        matches!(self, TimeValue::Dubious)
    }

    /// Apply `f` to a known value, leaving `Missing` and `Dubious` untouched.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            TimeValue::Known(seconds) => TimeValue::from_seconds(f(seconds)),
            other => other,
        }
    }

    /// Seconds expressed in minutes, for charting.
    pub fn to_minutes(self) -> Self {
        self.map(|seconds| seconds / 60.0)
    }

    /// Strict "less than" between two known values; false otherwise.
    pub fn is_less_than(self, other: TimeValue) -> bool {
        match (self, other) {
            (TimeValue::Known(a), TimeValue::Known(b)) => a < b,
            _ => false,
        }
    }

    fn combine(self, other: TimeValue, op: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, other) {
            (TimeValue::Missing, _) | (_, TimeValue::Missing) => TimeValue::Missing,
            (TimeValue::Dubious, _) | (_, TimeValue::Dubious) => TimeValue::Dubious,
            (TimeValue::Known(a), TimeValue::Known(b)) => TimeValue::from_seconds(op(a, b)),
        }
    }
}

impl From<f64> for TimeValue {
    fn from(seconds: f64) -> Self {
        TimeValue::from_seconds(seconds)
    }
}

impl From<Option<f64>> for TimeValue {
    fn from(seconds: Option<f64>) -> Self {
        seconds.map_or(TimeValue::Missing, TimeValue::from_seconds)
    }
}

impl From<Option<u32>> for TimeValue {
    fn from(rank: Option<u32>) -> Self {
        rank.map_or(TimeValue::Missing, |rank| TimeValue::Known(f64::from(rank)))
    }
}

impl Add for TimeValue {
    type Output = TimeValue;

    fn add(self, rhs: TimeValue) -> TimeValue {
        self.combine(rhs, |a, b| a + b)
    }
}

impl Sub for TimeValue {
    type Output = TimeValue;

    fn sub(self, rhs: TimeValue) -> TimeValue {
        self.combine(rhs, |a, b| a - b)
    }
}

/// Build a vector of time values from raw optional seconds.
pub fn times_from(values: &[Option<f64>]) -> Vec<TimeValue> {
    values.iter().copied().map(TimeValue::from).collect()
}
