//! Console rendering for solver results.

use std::fmt;

use crate::models::algebra::quadratic::Roots;

/// Program banner shown before the coefficients are requested.
#[derive(Debug, Clone, Copy)]
pub struct Banner<'a> {
    version: &'a str,
}

impl<'a> Banner<'a> {
    #[must_use]
    pub fn new(version: &'a str) -> Self {
        Self { version }
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#--- SolveSquare v{}", self.version)?;
        writeln!(f)?;
        write!(f, "#--- Let's find roots for equation Ax^2 + Bx + C = 0:")
    }
}

/// Multi-line report for a set of [`Roots`].
///
/// ```
/// use solve_square::models::algebra::quadratic::Roots;
/// use solve_square::support::report::Report;
///
/// let roots = Roots::Two(-1.0, 1.0);
/// assert_eq!(
///     Report::new(&roots).to_string(),
///     "#--- This equation has two roots:\nx1 = -1\nx2 = 1",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, T> {
    roots: &'a Roots<T>,
}

impl<'a, T> Report<'a, T> {
    #[must_use]
    pub fn new(roots: &'a Roots<T>) -> Self {
        Self { roots }
    }
}

impl<T: fmt::Display> fmt::Display for Report<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.roots {
            Roots::Infinite => write!(f, "#--- This equation has infinite number of roots"),
            Roots::None => write!(f, "#--- This equation has no roots"),
            Roots::One(x) => write!(f, "#--- This equation has one root:\nx = {x}"),
            Roots::Two(x1, x2) => {
                write!(f, "#--- This equation has two roots:\nx1 = {x1}\nx2 = {x2}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner() {
        assert_eq!(
            Banner::new("1.2.3").to_string(),
            "#--- SolveSquare v1.2.3\n\n#--- Let's find roots for equation Ax^2 + Bx + C = 0:"
        );
    }

    #[test]
    fn every_classification() {
        let render = |roots: Roots<f64>| Report::new(&roots).to_string();

        assert_eq!(
            render(Roots::Infinite),
            "#--- This equation has infinite number of roots"
        );
        assert_eq!(render(Roots::None), "#--- This equation has no roots");
        assert_eq!(
            render(Roots::One(2.0)),
            "#--- This equation has one root:\nx = 2"
        );
        assert_eq!(
            render(Roots::Two(-0.5, 3.25)),
            "#--- This equation has two roots:\nx1 = -0.5\nx2 = 3.25"
        );
    }
}
