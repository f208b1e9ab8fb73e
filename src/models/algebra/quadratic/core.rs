//! Root classification for quadratic and degenerate linear equations.
//!
//! All "is zero" decisions compare magnitudes against the machine epsilon of
//! the numeric type ([`Float::epsilon`]), so rounding noise on either side of
//! zero never flips a classification.

mod coefficients;
mod error;
mod roots;

pub use coefficients::Coefficients;
pub use error::QuadraticError;
pub use roots::Roots;

use log::trace;
use num_traits::Float;

/// Solves `a·x² + b·x + c = 0` over the reals.
///
/// A leading coefficient within epsilon of zero reduces the equation to
/// [`solve_linear`]. Otherwise the discriminant `d = b² − 4ac` decides:
/// a `d` within epsilon of zero gives a double root `-b / 2a`, a negative `d`
/// gives no roots, and a positive `d` gives two roots in ascending order.
///
/// This function is total: it never panics. For non-finite input the result
/// follows IEEE arithmetic; a `NaN` that reaches the discriminant produces
/// `Roots::Two(NaN, NaN)`.
///
/// # Examples
///
/// ```
/// use solve_square::models::algebra::quadratic::{Roots, solve};
///
/// assert_eq!(solve(1.0, 0.0, -1.0), Roots::Two(-1.0, 1.0));
/// assert_eq!(solve(1.0, -2.0, 1.0), Roots::One(1.0));
/// assert_eq!(solve(0.0, 0.0, 0.0), Roots::Infinite);
/// ```
pub fn solve<T: Float>(a: T, b: T, c: T) -> Roots<T> {
    if is_approx_zero(a) {
        return solve_linear(b, c);
    }

    let two_a = a + a;
    let d = b * b - (two_a + two_a) * c;

    let roots = if is_approx_zero(d) {
        Roots::One(-b / two_a)
    } else if d < T::zero() {
        Roots::None
    } else {
        let sqrt_d = d.sqrt();
        Roots::two((-b - sqrt_d) / two_a, (-b + sqrt_d) / two_a)
    };

    trace!(
        "quadratic: discriminant {:e} gives {}",
        d.to_f64().unwrap_or(f64::NAN),
        roots.kind()
    );
    roots
}

/// Solves the linear equation `b·x + c = 0` over the reals.
///
/// With `b` within epsilon of zero the equation is a constant: `0 = 0` has
/// infinitely many roots, any other constant has none.
///
/// # Examples
///
/// ```
/// use solve_square::models::algebra::quadratic::{Roots, solve_linear};
///
/// assert_eq!(solve_linear(2.0, -4.0), Roots::One(2.0));
/// assert_eq!(solve_linear(0.0, 5.0), Roots::None);
/// ```
pub fn solve_linear<T: Float>(b: T, c: T) -> Roots<T> {
    let roots = if !is_approx_zero(b) {
        Roots::One(-c / b)
    } else if is_approx_zero(c) {
        Roots::Infinite
    } else {
        Roots::None
    };

    trace!("linear: {}", roots.kind());
    roots
}

/// Returns `true` if `value` lies strictly inside the epsilon band around zero.
fn is_approx_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Triples with two distinct real roots, including negative leading terms.
    const TWO_ROOT_CASES: [[f64; 3]; 6] = [
        [1.0, 0.0, -1.0],
        [1.0, -3.0, 2.0],
        [2.0, 5.0, -3.0],
        [-1.0, 0.0, 4.0],
        [0.5, 0.1, -7.25],
        [3.0, -10.0, 3.0],
    ];

    fn assert_is_root(coefficients: [f64; 3], x: f64) {
        let [a, b, c] = coefficients;
        let residual = Coefficients::new_unchecked(a, b, c).evaluate(x);
        let scale = [(a * x * x).abs(), (b * x).abs(), c.abs(), 1.0]
            .into_iter()
            .fold(0.0, f64::max);
        assert!(
            residual.abs() <= 1e-12 * scale,
            "{x} is not a root of {coefficients:?} (residual {residual:e})"
        );
    }

    fn two_roots(roots: Roots<f64>) -> (f64, f64) {
        match roots {
            Roots::Two(x1, x2) => (x1, x2),
            other => panic!("expected two roots, got {other:?}"),
        }
    }

    #[test]
    fn two_distinct_roots() {
        assert_eq!(solve(1.0, 0.0, -1.0), Roots::Two(-1.0, 1.0));
    }

    #[test]
    fn double_root() {
        assert_eq!(solve(1.0, -2.0, 1.0), Roots::One(1.0));
    }

    #[test]
    fn negative_discriminant() {
        assert_eq!(solve(1.0, 0.0, 1.0), Roots::None);
    }

    #[test]
    fn zero_leading_coefficient_is_linear() {
        assert_eq!(solve(0.0, 2.0, -4.0), Roots::One(2.0));
        assert_eq!(solve(1e-17, 2.0, -4.0), Roots::One(2.0));
    }

    #[test]
    fn nonzero_constant_has_no_roots() {
        assert_eq!(solve(0.0, 0.0, 5.0), Roots::None);
    }

    #[test]
    fn identically_zero_has_infinite_roots() {
        assert_eq!(solve(0.0, 0.0, 0.0), Roots::Infinite);
        assert_eq!(solve(1e-17, -1e-17, 1e-18), Roots::Infinite);
    }

    #[test]
    fn roots_satisfy_equation_in_ascending_order() {
        for coefficients @ [a, b, c] in TWO_ROOT_CASES {
            let (x1, x2) = two_roots(solve(a, b, c));
            assert!(x1 <= x2, "{x1} > {x2} for {coefficients:?}");
            assert_is_root(coefficients, x1);
            assert_is_root(coefficients, x2);
        }
    }

    #[test]
    fn negative_leading_coefficient_still_ascending() {
        assert_eq!(solve(-1.0, 0.0, 1.0), Roots::Two(-1.0, 1.0));
        assert_eq!(solve(-1.0, 3.0, -2.0), Roots::Two(1.0, 2.0));
    }

    #[test]
    fn single_roots_satisfy_equation() {
        for coefficients @ [a, b, c] in [[1.0, -2.0, 1.0], [4.0, 4.0, 1.0], [0.0, 3.0, -1.0]] {
            let Roots::One(x) = solve(a, b, c) else {
                panic!("expected one root for {coefficients:?}");
            };
            assert_is_root(coefficients, x);
        }
    }

    #[test]
    fn scale_invariance() {
        for [a, b, c] in TWO_ROOT_CASES {
            let (x1, x2) = two_roots(solve(a, b, c));
            for k in [-3.0, 0.5, 10.0, -1e3] {
                let (y1, y2) = two_roots(solve(k * a, k * b, k * c));
                assert_relative_eq!(x1, y1, max_relative = 1e-12);
                assert_relative_eq!(x2, y2, max_relative = 1e-12);
            }
        }

        for k in [-3.0, 0.5, 10.0, -1e3] {
            assert_eq!(solve(k, -2.0 * k, k), Roots::One(1.0));
            assert_eq!(solve(k, 0.0, k), Roots::None);
        }
    }

    #[test]
    fn discriminant_band_is_symmetric() {
        // d = -4c, inside the epsilon band from both sides.
        for c in [1e-17, -1e-17] {
            let Roots::One(x) = solve(1.0, 0.0, c) else {
                panic!("expected a double root for c = {c:e}");
            };
            assert_abs_diff_eq!(x, 0.0);
        }

        // Just outside the band.
        assert_eq!(solve(1.0, 0.0, 1e-15), Roots::None);
        let (x1, x2) = two_roots(solve(1.0, 0.0, -1e-15));
        assert_relative_eq!(x1, -(1e-15_f64).sqrt(), max_relative = 1e-12);
        assert_relative_eq!(x2, (1e-15_f64).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn nan_propagates_to_two_nan_roots() {
        let (x1, x2) = two_roots(solve(f64::NAN, 1.0, 1.0));
        assert!(x1.is_nan() && x2.is_nan());
    }

    #[test]
    fn single_precision() {
        assert_eq!(solve(1.0_f32, 0.0, -4.0), Roots::Two(-2.0, 2.0));
        assert_eq!(solve(0.0_f32, 4.0, 2.0), Roots::One(-0.5));
    }
}
