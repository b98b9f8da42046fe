// SPDX-License-Identifier: MIT

//!
//! Per-year totals of covered days
//!

use crate::{Bar, IntervalSet};
use decade_chart_core::Year;
use serde::Serialize;

/// Days covered by any interval during each calendar year: one dense slot
/// per year from the set's first year through its last, zero-filled where
/// nothing is covered
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnualTotals {
    /// The year slot 0 refers to
    first_year: Option<Year>,

    /// One total per year of the set's span
    totals: Vec<i64>,
}

impl AnnualTotals {
    /// Accumulate every bar's length into its year's slot.  The bars
    /// partition the stored intervals, so the slots sum to the total number
    /// of days covered by the whole set
    pub(crate) fn from_bars(set: &IntervalSet, bars: &[Bar]) -> Self {
        let Some(first_year) = set.first_year() else {
            return Self::default();
        };

        let mut totals = vec![0; set.span() as usize];
        for bar in bars {
            // Bar years always fall inside the set's span
            let index = (bar.year().value() - first_year.value()) as usize;
            if let Some(slot) = totals.get_mut(index) {
                *slot += bar.length_in_days();
            }
        }

        Self {
            first_year: Some(first_year),
            totals,
        }
    }

    /// The number of year slots (the set's span)
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether there are any year slots at all
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// The year slot 0 refers to, or `None` when there are no slots
    pub fn first_year(&self) -> Option<Year> {
        self.first_year
    }

    /// Days covered during the year at `index` (0 = the first year; bounds
    /// checked)
    pub fn total(&self, index: usize) -> Option<i64> {
        self.totals.get(index).copied()
    }

    /// Days covered during the given calendar year, or `None` outside the
    /// covered range
    pub fn total_for_year(&self, year: Year) -> Option<i64> {
        let first = self.first_year?;
        let index =
            usize::try_from(i64::from(year.value()) - i64::from(first.value())).ok()?;
        self.total(index)
    }

    /// Borrow all totals
    pub fn totals(&self) -> &[i64] {
        &self.totals
    }
}
