// SPDX-License-Identifier: MIT

//!
//! *Part of the wider DecadeChart project*
//!
//! The DecadeChart computation engine.  Raw (begin, end) rows go in; the
//! validated sorted intervals, the gaps between them, the per-year bars,
//! and the annual day totals come out.
//!
//! No drawing happens here, and the engine carries no UI state - a front
//! end positions its rectangles using the day-of-year offsets the bars
//! expose, and owns selection, editing, and everything else interactive.
//!

mod engine;

pub use engine::*;
