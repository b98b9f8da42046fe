// SPDX-License-Identifier: MIT

//!
//! The DecadeChart date type
//!

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// The minimum year allowed in the DecadeChart system
pub const MIN_YEAR: i64 = -9999;

/// The maximum year allowed in the DecadeChart system
pub const MAX_YEAR: i64 = 9999;

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone)]
pub enum DateError {
    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The fields are individually in range but name no real calendar day
    /// (e.g. the 30th of February)
    #[error("`{2:04}-{1:02}-{0:02}` is not a calendar day")]
    NoSuchDate(u8, u8, i32),
}

/// The DecadeChart date type
///
/// Every field is required: interval arithmetic needs day precision, so
/// there is no partially-specified date.  "Unset" at the input boundary is
/// expressed as `Option<Date>` instead of a sentinel value - a constructed
/// [`Date`] always names a real calendar day.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Date {
    day: Day,
    month: Month,
    year: Year,
}

/// The DecadeChart day type
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The DecadeChart month type
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The DecadeChart year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Day::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Date {
    /// Create a new [`Date`] if the result will be valid.  As well as the
    /// per-field bounds, the fields together must name a real calendar day
    /// (the 30th of February is rejected)
    pub fn from(day: i64, month: i64, year: i64) -> Result<Date, DateError> {
        let day = Day::try_from(day)?;
        let month = Month::try_from(month)?;
        let year = Year::try_from(year)?;

        NaiveDate::from_ymd_opt(year.value(), u32::from(month.value()), u32::from(day.value()))
            .ok_or(DateError::NoSuchDate(day.value(), month.value(), year.value()))?;

        Ok(Date { day, month, year })
    }

    /// The 1st of January of the given year
    pub fn first_of_year(year: Year) -> Date {
        Date {
            day: Day(1),
            month: Month(1),
            year,
        }
    }

    /// The 1st of January of the year after this date's year, or `None` if
    /// that year is beyond [`MAX_YEAR`]
    pub fn first_of_next_year(&self) -> Option<Date> {
        let year = Year::try_from(i64::from(self.year.value()) + 1).ok()?;
        Some(Date::first_of_year(year))
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Day {
        self.day
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Zero-based day-of-year offset (0 = 1st Jan; 365 = 31st Dec in a leap
    /// year).  Suitable as a fractional-year plotting coordinate
    pub fn ordinal0(&self) -> u32 {
        self.to_naive().ordinal0()
    }

    /// Signed number of whole days from this date until `later` (negative
    /// when `later` is actually earlier)
    pub fn days_until(&self, later: &Date) -> i64 {
        later
            .to_naive()
            .signed_duration_since(self.to_naive())
            .num_days()
    }

    /// The previous calendar day, or `None` if it falls before [`MIN_YEAR`]
    pub fn pred(&self) -> Option<Date> {
        let naive = self.to_naive().pred_opt()?;
        (i64::from(naive.year()) >= MIN_YEAR).then(|| Date::from_naive(naive))
    }

    /// The next calendar day, or `None` if it falls after [`MAX_YEAR`]
    pub fn succ(&self) -> Option<Date> {
        let naive = self.to_naive().succ_opt()?;
        (i64::from(naive.year()) <= MAX_YEAR).then(|| Date::from_naive(naive))
    }

    /// A [`Date`] can only be constructed once the same conversion has
    /// succeeded, so the fields always name a real calendar day
    fn to_naive(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            self.year.value(),
            u32::from(self.month.value()),
            u32::from(self.day.value()),
        )
        .unwrap_or_default()
    }

    fn from_naive(naive: NaiveDate) -> Date {
        Date {
            day: Day(naive.day() as u8),
            month: Month(naive.month() as u8),
            year: Year(naive.year()),
        }
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Deserialize)]
struct RawDate {
    day: i64,
    month: i64,
    year: i64,
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_date = RawDate::deserialize(deserializer)?;
        Date::from(raw_date.day, raw_date.month, raw_date.year).map_err(serde::de::Error::custom)
    }
}
