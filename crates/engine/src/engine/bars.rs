// SPDX-License-Identifier: MIT

//!
//! Calendar-year-bounded bars
//!

use crate::IntervalSet;
use decade_chart_core::{Date, Year};
use serde::Serialize;

/// One calendar-year-bounded slice of a stored interval.  An interval that
/// crosses year boundaries is cut at each 1st Jan, so a front end can draw
/// one rectangle per year using the day-of-year offsets exposed here
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    /// The first day of the slice (covered)
    begin: Date,

    /// The day after the last day of the slice (not covered)
    end: Date,

    /// The position of the originating interval in the sorted set.  Several
    /// bars share one index when their interval crosses year boundaries
    source_index: usize,
}

impl Bar {
    /// The first covered day of the slice
    pub fn begin(&self) -> Date {
        self.begin
    }

    /// The day after the last covered day of the slice
    pub fn end(&self) -> Date {
        self.end
    }

    /// The position of the originating interval in the sorted set
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// The calendar year the slice lies in
    pub fn year(&self) -> Year {
        self.begin.year()
    }

    /// The number of days the slice covers
    pub fn length_in_days(&self) -> i64 {
        self.begin.days_until(&self.end)
    }

    /// Zero-based day-of-year offset of the first covered day (0 = 1st Jan)
    pub fn first_day_of_year(&self) -> u32 {
        self.begin.ordinal0()
    }

    /// Zero-based day-of-year offset of the last covered day (364 or 365 =
    /// 31st Dec)
    pub fn last_day_of_year(&self) -> u32 {
        // begin < end, so the day before end always exists
        self.end.pred().map(|day| day.ordinal0()).unwrap_or(0)
    }
}

/// Split every stored interval at its calendar-year boundaries.  An
/// interval covering years `Y0..=Y1` produces exactly `Y1 - Y0 + 1` bars
/// that partition it: the first runs from the original begin to the 1st
/// Jan of `Y0 + 1`, the middle bars each cover a whole year, and the last
/// ends at the original (exclusive) end.  Bar order preserves interval
/// order, then chronological order within one interval
pub(crate) fn split_into_bars(set: &IntervalSet) -> Vec<Bar> {
    let mut bars = Vec::new();

    for (source_index, interval) in set.intervals().iter().enumerate() {
        let mut begin = interval.begin();

        while let Some(cut) = begin.first_of_next_year() {
            if cut >= interval.end() {
                break;
            }
            bars.push(Bar {
                begin,
                end: cut,
                source_index,
            });
            begin = cut;
        }

        bars.push(Bar {
            begin,
            end: interval.end(),
            source_index,
        });
    }

    bars
}
