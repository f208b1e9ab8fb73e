//! Supporting utilities used by models and the command-line program.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`prompt`]: Bounded-retry console input.
//! - [`report`]: Console rendering of results.

pub mod constraint;
pub mod prompt;
pub mod report;
