//! Quadratic equation model.
//!
//! [`QuadraticEquation`] is a [`twine_core::Model`] that maps
//! [`Coefficients`] to [`Roots`]. The root classification itself lives in the
//! internal `core` module; the free functions [`solve`] and [`solve_linear`]
//! are re-exported for callers that work with raw floats.

mod core;

pub use self::core::{Coefficients, QuadraticError, Roots, solve, solve_linear};

use std::{convert::Infallible, fmt, marker::PhantomData};

use num_traits::Float;
use twine_core::Model;

/// Model adapter for `a·x² + b·x + c = 0`.
///
/// The input is already validated by [`Coefficients`], so calling the model
/// cannot fail.
///
/// # Example
///
/// ```
/// use solve_square::models::algebra::quadratic::{Coefficients, QuadraticEquation, Roots};
/// use twine_core::Model;
///
/// let model = QuadraticEquation::<f64>::new();
/// let coefficients = Coefficients::new(1.0, -3.0, 2.0).unwrap();
///
/// assert_eq!(model.call(&coefficients).unwrap(), Roots::Two(1.0, 2.0));
/// ```
pub struct QuadraticEquation<T = f64> {
    _float: PhantomData<T>,
}

impl<T> QuadraticEquation<T> {
    /// Creates the model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _float: PhantomData,
        }
    }
}

impl<T> Default for QuadraticEquation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for QuadraticEquation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QuadraticEquation")
    }
}

impl<T: Float> Model for QuadraticEquation<T> {
    type Input = Coefficients<T>;
    type Output = Roots<T>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.solve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_delegates_to_solver() {
        let model = QuadraticEquation::<f64>::default();

        let cases = [
            ([1.0, 0.0, -1.0], Roots::Two(-1.0, 1.0)),
            ([1.0, -2.0, 1.0], Roots::One(1.0)),
            ([1.0, 0.0, 1.0], Roots::None),
            ([0.0, 2.0, -4.0], Roots::One(2.0)),
            ([0.0, 0.0, 5.0], Roots::None),
            ([0.0, 0.0, 0.0], Roots::Infinite),
        ];

        for ([a, b, c], expected) in cases {
            let input = Coefficients::new(a, b, c).unwrap();
            assert_eq!(model.call(&input).unwrap(), expected);
        }
    }

    #[test]
    fn single_precision_model() {
        let model = QuadraticEquation::<f32>::new();
        let input = Coefficients::new(2.0_f32, 0.0, -8.0).unwrap();
        assert_eq!(model.call(&input).unwrap(), Roots::Two(-2.0, 2.0));
    }
}
