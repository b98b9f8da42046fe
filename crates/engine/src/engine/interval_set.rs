// SPDX-License-Identifier: MIT

//!
//! The validated, sorted interval collection
//!

use decade_chart_core::{DateInterval, GapInterval, RawInterval, Year};
use serde::Serialize;

/// The validated, begin-date-sorted intervals and the gaps between them.
/// The collection is replaced in full on every update - there is no
/// incremental mutation at the human data scale this serves
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
    /// The stored intervals, ascending by begin date
    intervals: Vec<DateInterval>,

    /// `gaps[i]` spans from the end of `intervals[i]` to the begin of
    /// `intervals[i + 1]`, so there is always one gap fewer than there are
    /// intervals (or none at all)
    gaps: Vec<GapInterval>,
}

impl IntervalSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw rows.  Rows that fail the validity check (an
    /// unset date, or a null/inverted span) are dropped without error: the
    /// upstream editable table is allowed to hold incomplete rows while the
    /// user types.  The surviving intervals are sorted ascending by begin
    /// date; rows with equal begin dates keep their input order
    pub fn from_raw(rows: Vec<RawInterval>) -> Self {
        let mut intervals: Vec<DateInterval> =
            rows.iter().filter_map(RawInterval::validate).collect();

        // Vec::sort_by is stable, which keeps equal begin dates in input order
        intervals.sort_by(|a, b| a.begin().cmp(&b.begin()));

        let gaps = intervals
            .windows(2)
            .map(|pair| GapInterval::between(&pair[0], &pair[1]))
            .collect();

        Self { intervals, gaps }
    }

    /// The number of stored intervals
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Get a stored interval by position (bounds checked)
    pub fn interval(&self, index: usize) -> Option<&DateInterval> {
        self.intervals.get(index)
    }

    /// Borrow all stored intervals, ascending by begin date
    pub fn intervals(&self) -> &[DateInterval] {
        &self.intervals
    }

    /// The number of gaps.  Always `max(0, interval_count - 1)`
    pub fn gap_count(&self) -> usize {
        self.gaps.len()
    }

    /// Get a gap by position (bounds checked).  Gap `i` spans from the end
    /// of interval `i` to the begin of interval `i + 1`
    pub fn gap(&self, index: usize) -> Option<&GapInterval> {
        self.gaps.get(index)
    }

    /// Borrow all gaps
    pub fn gaps(&self) -> &[GapInterval] {
        &self.gaps
    }

    /// The begin year of the earliest interval, or `None` when the set is
    /// empty
    pub fn first_year(&self) -> Option<Year> {
        self.intervals.first().map(DateInterval::begin_year)
    }

    /// The latest year any interval actually covers, or `None` when the set
    /// is empty.  This is not necessarily the last interval's year: an
    /// early, long interval can outlast everything sorted after it
    pub fn last_year(&self) -> Option<Year> {
        self.intervals.iter().map(DateInterval::last_year).max()
    }

    /// The number of distinct calendar years the set touches
    /// (`last_year - first_year + 1`), or 0 when the set is empty
    pub fn span(&self) -> i32 {
        match (self.first_year(), self.last_year()) {
            (Some(first), Some(last)) => last.value() - first.value() + 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use decade_chart_core::Date;

    fn date(day: i64, month: i64, year: i64) -> Date {
        Date::from(day, month, year).unwrap()
    }

    fn row(begin: Date, end: Date) -> RawInterval {
        RawInterval::from(Some(begin), Some(end))
    }

    #[test]
    fn empty() {
        let set = IntervalSet::new();
        assert_eq!(set.interval_count(), 0);
        assert_eq!(set.gap_count(), 0);
        assert_eq!(set.span(), 0);
        assert!(set.first_year().is_none());
        assert!(set.last_year().is_none());
        assert!(set.interval(0).is_none());
        assert!(set.gap(0).is_none());
    }

    #[test]
    fn invalid_rows_are_dropped() {
        let set = IntervalSet::from_raw(vec![
            // Half-entered rows
            RawInterval::from(Some(date(1, 1, 2020)), None),
            RawInterval::from(None, Some(date(1, 1, 2020))),
            RawInterval::from(None, None),
            // Inverted
            row(date(1, 6, 2020), date(1, 1, 2020)),
            // Null span
            row(date(1, 5, 2022), date(1, 5, 2022)),
            // The only valid row
            row(date(1, 1, 2020), date(1, 6, 2020)),
        ]);

        assert_eq!(set.interval_count(), 1);
        assert_eq!(set.gap_count(), 0);
        assert_eq!(set.interval(0).unwrap().begin(), date(1, 1, 2020));
    }

    #[test]
    fn sorted_by_begin_date() {
        let set = IntervalSet::from_raw(vec![
            row(date(10, 3, 2020), date(5, 1, 2021)),
            row(date(1, 1, 2019), date(1, 6, 2019)),
        ]);

        assert_eq!(set.interval_count(), 2);
        assert_eq!(set.interval(0).unwrap().begin(), date(1, 1, 2019));
        assert_eq!(set.interval(1).unwrap().begin(), date(10, 3, 2020));
    }

    #[test]
    fn sort_is_stable() {
        let begin = date(1, 1, 2020);
        let set = IntervalSet::from_raw(vec![
            row(begin, date(1, 6, 2020)),
            row(date(1, 1, 2019), date(1, 2, 2019)),
            row(begin, date(1, 2, 2020)),
            row(begin, date(1, 4, 2020)),
        ]);

        // The three equal begin dates keep their input order
        assert_eq!(set.interval(1).unwrap().end(), date(1, 6, 2020));
        assert_eq!(set.interval(2).unwrap().end(), date(1, 2, 2020));
        assert_eq!(set.interval(3).unwrap().end(), date(1, 4, 2020));
    }

    #[test]
    fn gaps_between_neighbours() {
        let set = IntervalSet::from_raw(vec![
            row(date(1, 1, 2019), date(1, 6, 2019)),
            row(date(10, 3, 2020), date(5, 1, 2021)),
            row(date(5, 1, 2021), date(1, 2, 2021)),
        ]);

        assert_eq!(set.gap_count(), 2);

        let gap = set.gap(0).unwrap();
        assert_eq!(gap.begin(), date(1, 6, 2019));
        assert_eq!(gap.end(), date(10, 3, 2020));
        assert_eq!(gap.length_in_days(), 283);

        // The second and third intervals touch
        assert_eq!(set.gap(1).unwrap().length_in_days(), 0);
    }

    #[test]
    fn overlapping_neighbours_give_a_negative_gap() {
        let set = IntervalSet::from_raw(vec![
            row(date(1, 1, 2020), date(1, 6, 2020)),
            row(date(1, 5, 2020), date(1, 7, 2020)),
        ]);

        assert_eq!(set.gap_count(), 1);
        assert_eq!(set.gap(0).unwrap().length_in_days(), -31);
    }

    #[test]
    fn years_and_span() {
        let set = IntervalSet::from_raw(vec![
            row(date(1, 1, 2019), date(1, 6, 2019)),
            row(date(10, 3, 2020), date(5, 1, 2021)),
        ]);

        assert_eq!(set.first_year().unwrap().value(), 2019);
        assert_eq!(set.last_year().unwrap().value(), 2021);
        assert_eq!(set.span(), 3);
    }

    #[test]
    fn last_year_is_the_latest_covered_year() {
        // The earlier interval outlasts the later one
        let set = IntervalSet::from_raw(vec![
            row(date(1, 1, 2019), date(1, 1, 2025)),
            row(date(1, 6, 2020), date(1, 6, 2021)),
        ]);

        // 2025 is never covered: the long interval's exclusive end is its 1st Jan
        assert_eq!(set.last_year().unwrap().value(), 2024);
        assert_eq!(set.span(), 6);
    }

    #[test]
    fn single_year_set() {
        let set = IntervalSet::from_raw(vec![row(date(1, 2, 2020), date(1, 3, 2020))]);
        assert_eq!(set.first_year(), set.last_year());
        assert_eq!(set.span(), 1);
    }
}
