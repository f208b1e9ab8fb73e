use num_traits::Float;

use crate::support::constraint::{Constrained, Finite};

use super::{QuadraticError, Roots, solve};

/// Coefficients of the equation `a·x² + b·x + c = 0`.
///
/// Values built with [`Coefficients::new`] are guaranteed to be finite.
/// [`Coefficients::new_unchecked`] skips that check; solving still never
/// panics, but non-finite values propagate through IEEE arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T = f64> {
    a: T,
    b: T,
    c: T,
}

impl<T: Float> Coefficients<T> {
    /// Constructs validated coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`QuadraticError::InvalidInput`] naming the first coefficient
    /// that is infinite or `NaN`.
    pub fn new(a: T, b: T, c: T) -> Result<Self, QuadraticError> {
        let finite = |name, value| {
            Constrained::<T, Finite>::new(value)
                .map_err(|source| QuadraticError::invalid_input(name, source))
        };
        Ok(Self::from_constrained(
            finite("a", a)?,
            finite("b", b)?,
            finite("c", c)?,
        ))
    }

    /// Constructs coefficients from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        a: Constrained<T, Finite>,
        b: Constrained<T, Finite>,
        c: Constrained<T, Finite>,
    ) -> Self {
        Self {
            a: a.into_inner(),
            b: b.into_inner(),
            c: c.into_inner(),
        }
    }

    /// Constructs coefficients without validation.
    #[must_use]
    pub fn new_unchecked(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Returns the quadratic coefficient.
    #[must_use]
    pub fn a(&self) -> T {
        self.a
    }

    /// Returns the linear coefficient.
    #[must_use]
    pub fn b(&self) -> T {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub fn c(&self) -> T {
        self.c
    }

    /// Evaluates `a·x² + b·x + c` at `x`.
    #[must_use]
    pub fn evaluate(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }

    /// Solves the equation described by these coefficients.
    #[must_use]
    pub fn solve(&self) -> Roots<T> {
        solve(self.a, self.b, self.c)
    }
}
