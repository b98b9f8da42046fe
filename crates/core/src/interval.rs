// SPDX-License-Identifier: MIT

//!
//! The DecadeChart interval types
//!

use crate::{Date, Year};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`DateInterval`]
#[derive(Error, Debug, Clone)]
pub enum IntervalError {
    /// The span is null or inverted (`begin < end` must hold)
    #[error("Interval must begin strictly before it ends")]
    NullSpan,
}

/// One raw interval row as supplied by the presentation layer (e.g. an
/// editable table).  Either side may still be unset while the user is
/// part-way through entering a row, so a [`RawInterval`] makes no validity
/// promise at all - [`RawInterval::validate`] is the only way to a
/// [`DateInterval`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawInterval {
    begin: Option<Date>,
    end: Option<Date>,
}

impl RawInterval {
    /// Create a raw row.  Any combination of set/unset dates is allowed
    pub fn from(begin: Option<Date>, end: Option<Date>) -> Self {
        Self { begin, end }
    }

    /// Get the row's begin date (if set)
    pub fn begin(&self) -> Option<Date> {
        self.begin
    }

    /// Get the row's end date (if set)
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// Whether the row describes a valid half-open interval: both dates set
    /// and `begin < end`.  A same-day row is a null span and is not valid;
    /// callers represent a single covered day as `end = begin + 1 day`
    pub fn is_valid(&self) -> bool {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => begin < end,
            _ => false,
        }
    }

    /// Turn the row into a [`DateInterval`] if it is valid
    pub fn validate(&self) -> Option<DateInterval> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => DateInterval::from(begin, end).ok(),
            _ => None,
        }
    }
}

/// A validated half-open date span: `begin` is covered, `end` is not, and
/// `begin < end` always holds.  Immutable once created
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateInterval {
    begin: Date,
    end: Date,
}

impl DateInterval {
    /// Create a valid [`DateInterval`] if it is possible to do so with the
    /// dates passed in
    pub fn from(begin: Date, end: Date) -> Result<DateInterval, IntervalError> {
        if begin < end {
            Ok(DateInterval { begin, end })
        } else {
            Err(IntervalError::NullSpan)
        }
    }

    /// The first covered day
    pub fn begin(&self) -> Date {
        self.begin
    }

    /// The day after the last covered day
    pub fn end(&self) -> Date {
        self.end
    }

    /// The number of days the interval covers
    pub fn length_in_days(&self) -> i64 {
        self.begin.days_until(&self.end)
    }

    /// The last day the interval actually covers (`end` is exclusive)
    pub fn last_covered_day(&self) -> Date {
        // begin < end, so the day before end always exists
        self.end.pred().unwrap_or(self.begin)
    }

    /// The calendar year in which the interval begins
    pub fn begin_year(&self) -> Year {
        self.begin.year()
    }

    /// The calendar year of the last covered day
    pub fn last_year(&self) -> Year {
        self.last_covered_day().year()
    }
}

#[derive(Deserialize)]
struct RawDateInterval {
    begin: Date,
    end: Date,
}

impl<'de> Deserialize<'de> for DateInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDateInterval::deserialize(deserializer)?;
        DateInterval::from(raw.begin, raw.end).map_err(serde::de::Error::custom)
    }
}

/// The span between the end of one sorted interval and the begin of the
/// next.  Unlike [`DateInterval`] it carries no ordering invariant:
/// overlapping neighbours produce a gap whose `end` precedes its `begin`,
/// and [`GapInterval::length_in_days`] is signed accordingly
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapInterval {
    begin: Date,
    end: Date,
}

impl GapInterval {
    /// The gap between two neighbouring intervals
    pub fn between(previous: &DateInterval, next: &DateInterval) -> Self {
        Self {
            begin: previous.end(),
            end: next.begin(),
        }
    }

    /// The first uncovered day (the previous interval's exclusive end)
    pub fn begin(&self) -> Date {
        self.begin
    }

    /// The day the next interval starts
    pub fn end(&self) -> Date {
        self.end
    }

    /// Signed gap length in days: zero when the neighbouring intervals
    /// touch, negative when they overlap
    pub fn length_in_days(&self) -> i64 {
        self.begin.days_until(&self.end)
    }
}
