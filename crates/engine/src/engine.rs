// SPDX-License-Identifier: MIT

//!
//! The `decade-chart-engine` engine
//!

mod bars;
mod interval_set;
mod totals;

pub use bars::*;
pub use interval_set::*;
pub use totals::*;

use decade_chart_core::{DateInterval, GapInterval, RawInterval, Year};
use log::debug;

/// The core DecadeChart engine.  This owns the validated interval set and
/// every collection derived from it (gaps, per-year bars, annual totals),
/// and rebuilds them all whenever the intervals are replaced.
///
/// The engine is single-threaded and synchronous.  A host that shares one
/// across threads must serialize access itself, treating each
/// [`Engine::set_intervals`] call plus its subsequent reads as one
/// critical section.
#[derive(Debug, Default)]
pub struct Engine {
    /// The validated, sorted intervals and the gaps between them
    interval_set: IntervalSet,

    /// The calendar-year-bounded bars derived from the intervals
    bars: Vec<Bar>,

    /// Days covered per calendar year, from the first year to the last
    annual_totals: AnnualTotals,
}

impl Engine {
    /// Create a new, empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the interval list.  Invalid rows are dropped, the rest are
    /// sorted by begin date, and the gaps, bars and annual totals are all
    /// rebuilt from scratch - there is no incremental path at the data
    /// scale this serves.
    ///
    /// Every derived collection is computed before any of them is
    /// published, so a reader never sees new intervals paired with stale
    /// bars or totals
    pub fn set_intervals(&mut self, rows: Vec<RawInterval>) {
        let row_count = rows.len();

        let interval_set = IntervalSet::from_raw(rows);
        let bars = split_into_bars(&interval_set);
        let annual_totals = AnnualTotals::from_bars(&interval_set, &bars);

        debug!(
            "engine rebuilt: kept {} of {} rows, {} bars over {} years",
            interval_set.interval_count(),
            row_count,
            bars.len(),
            annual_totals.len()
        );

        self.interval_set = interval_set;
        self.bars = bars;
        self.annual_totals = annual_totals;
    }

    /// Borrow the interval set
    pub fn interval_set(&self) -> &IntervalSet {
        &self.interval_set
    }

    /// The number of stored intervals
    pub fn interval_count(&self) -> usize {
        self.interval_set.interval_count()
    }

    /// Get a stored interval by position (bounds checked)
    pub fn interval(&self, index: usize) -> Option<&DateInterval> {
        self.interval_set.interval(index)
    }

    /// Borrow the stored intervals, ascending by begin date
    pub fn intervals(&self) -> &[DateInterval] {
        self.interval_set.intervals()
    }

    /// The number of gaps between neighbouring intervals
    pub fn gap_count(&self) -> usize {
        self.interval_set.gap_count()
    }

    /// Get a gap by position (bounds checked)
    pub fn gap(&self, index: usize) -> Option<&GapInterval> {
        self.interval_set.gap(index)
    }

    /// Borrow all gaps
    pub fn gaps(&self) -> &[GapInterval] {
        self.interval_set.gaps()
    }

    /// The begin year of the earliest interval (`None` when empty)
    pub fn first_year(&self) -> Option<Year> {
        self.interval_set.first_year()
    }

    /// The latest year any interval covers (`None` when empty)
    pub fn last_year(&self) -> Option<Year> {
        self.interval_set.last_year()
    }

    /// The number of distinct calendar years touched (0 when empty)
    pub fn span(&self) -> i32 {
        self.interval_set.span()
    }

    /// The number of bars
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Get a bar by position (bounds checked)
    pub fn bar(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Borrow all bars, in interval order then chronological sub-order
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Days covered during the year at `index` (0 = the first year; bounds
    /// checked)
    pub fn annual_total(&self, index: usize) -> Option<i64> {
        self.annual_totals.total(index)
    }

    /// Borrow the annual totals
    pub fn annual_totals(&self) -> &AnnualTotals {
        &self.annual_totals
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use decade_chart_core::Date;
    use decade_chart_macros::{date, year};

    fn row(begin: Date, end: Date) -> RawInterval {
        RawInterval::from(Some(begin), Some(end))
    }

    /// The worked example: one single-year interval and one year-crossing
    /// interval, supplied out of order
    fn example_rows() -> Vec<RawInterval> {
        vec![
            row(date!(10, 3, 2020), date!(5, 1, 2021)),
            row(date!(1, 1, 2019), date!(1, 6, 2019)),
        ]
    }

    #[test]
    fn starts_empty() {
        let engine = Engine::new();
        assert_eq!(engine.interval_count(), 0);
        assert_eq!(engine.gap_count(), 0);
        assert_eq!(engine.bar_count(), 0);
        assert_eq!(engine.span(), 0);
        assert!(engine.first_year().is_none());
        assert!(engine.last_year().is_none());
        assert!(engine.annual_totals().is_empty());
    }

    #[test]
    fn worked_example() {
        let mut engine = Engine::new();
        engine.set_intervals(example_rows());

        // Sorted intervals
        assert_eq!(engine.interval_count(), 2);
        assert_eq!(engine.interval(0).unwrap().begin(), date!(1, 1, 2019));
        assert_eq!(engine.interval(1).unwrap().begin(), date!(10, 3, 2020));

        // Years
        assert_eq!(engine.first_year(), Some(year!(2019)));
        assert_eq!(engine.last_year(), Some(year!(2021)));
        assert_eq!(engine.span(), 3);

        // Gaps
        assert_eq!(engine.gap_count(), 1);
        assert_eq!(engine.gap(0).unwrap().begin(), date!(1, 6, 2019));

        // Bars: the second interval is cut at the 1st Jan 2021
        assert_eq!(engine.bar_count(), 3);
        assert_eq!(engine.bar(0).unwrap().year(), year!(2019));
        assert_eq!(engine.bar(1).unwrap().end(), date!(1, 1, 2021));
        assert_eq!(engine.bar(2).unwrap().begin(), date!(1, 1, 2021));
        assert_eq!(engine.bar(1).unwrap().source_index(), 1);
        assert_eq!(engine.bar(2).unwrap().source_index(), 1);

        // Annual totals
        assert_eq!(engine.annual_total(0), Some(151));
        assert_eq!(engine.annual_total(1), Some(297));
        assert_eq!(engine.annual_total(2), Some(4));
        assert_eq!(engine.annual_total(3), None);
    }

    #[test]
    fn set_intervals_replaces_everything() {
        let mut engine = Engine::new();
        engine.set_intervals(example_rows());
        assert_eq!(engine.bar_count(), 3);

        // A fresh list fully replaces the old derived state
        engine.set_intervals(vec![row(date!(1, 2, 2023), date!(1, 3, 2023))]);
        assert_eq!(engine.interval_count(), 1);
        assert_eq!(engine.gap_count(), 0);
        assert_eq!(engine.bar_count(), 1);
        assert_eq!(engine.span(), 1);
        assert_eq!(engine.annual_totals().first_year(), Some(year!(2023)));

        // And an empty list empties it
        engine.set_intervals(Vec::new());
        assert_eq!(engine.interval_count(), 0);
        assert_eq!(engine.bar_count(), 0);
        assert_eq!(engine.span(), 0);
    }

    #[test]
    fn idempotent() {
        let mut engine_once = Engine::new();
        engine_once.set_intervals(example_rows());

        let mut engine_twice = Engine::new();
        engine_twice.set_intervals(example_rows());
        engine_twice.set_intervals(example_rows());

        assert_eq!(engine_once.interval_set(), engine_twice.interval_set());
        assert_eq!(engine_once.bars(), engine_twice.bars());
        assert_eq!(engine_once.annual_totals(), engine_twice.annual_totals());
    }

    #[test]
    fn all_invalid_rows_behave_like_no_rows() {
        let mut engine = Engine::new();
        engine.set_intervals(vec![
            RawInterval::from(Some(date!(1, 1, 2020)), None),
            row(date!(1, 6, 2020), date!(1, 1, 2020)),
            row(date!(1, 5, 2022), date!(1, 5, 2022)),
        ]);

        assert_eq!(engine.interval_count(), 0);
        assert_eq!(engine.gap_count(), 0);
        assert_eq!(engine.bar_count(), 0);
        assert_eq!(engine.span(), 0);
        assert!(engine.annual_totals().is_empty());
    }

    #[test]
    fn rows_from_a_table_payload() {
        // The shape an editable-table front end would hand over as JSON,
        // half-entered row included
        let json = r#"[
            {"begin": {"day": 10, "month": 3, "year": 2020},
             "end": {"day": 5, "month": 1, "year": 2021}},
            {"begin": {"day": 1, "month": 1, "year": 2019},
             "end": {"day": 1, "month": 6, "year": 2019}},
            {"begin": {"day": 1, "month": 1, "year": 2022}, "end": null}
        ]"#;
        let rows: Vec<RawInterval> = serde_json::from_str(json).unwrap();

        let mut engine = Engine::new();
        engine.set_intervals(rows);

        assert_eq!(engine.interval_count(), 2);
        assert_eq!(engine.span(), 3);
        assert_eq!(engine.annual_total(1), Some(297));
    }
}
