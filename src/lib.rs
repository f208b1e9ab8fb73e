//! # SolveSquare
//!
//! Real roots of `a·x² + b·x + c = 0`, including the degenerate cases: a zero
//! leading coefficient, a zero discriminant, a negative discriminant, and the
//! identically-zero equation.
//!
//! ## Crate layout
//!
//! - [`models`]: The quadratic solver and its [`twine_core::Model`] adapter.
//! - [`support`]: Numeric constraints plus the console prompt and report used
//!   by the `solve-square` binary.
//!
//! ```
//! use solve_square::models::algebra::quadratic::{Roots, solve};
//!
//! match solve(1.0, -3.0, 2.0) {
//!     Roots::Two(x1, x2) => assert_eq!((x1, x2), (1.0, 2.0)),
//!     other => panic!("unexpected {other}"),
//! }
//! ```

pub mod models;
pub mod support;
