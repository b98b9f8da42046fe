// SPDX-License-Identifier: MIT

//!
//! *Part of the wider DecadeChart project*
//!
//! This crate defines the basic datatypes used across the DecadeChart
//! project: validated calendar dates and the raw/validated date interval
//! types the chart engine consumes.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod date;
mod interval;

pub use date::*;
pub use interval::*;
