use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Both infinities and `NaN` are rejected. `NaN` is reported as
/// [`ConstraintError::NotANumber`] to match the other constraints, while
/// infinities are reported as [`ConstraintError::NotFinite`].
///
/// # Examples
///
/// ```
/// use solve_square::support::constraint::{Constrained, ConstraintError, Finite};
///
/// let x = Constrained::<_, Finite>::new(-2.5).unwrap();
/// assert_eq!(x.into_inner(), -2.5);
///
/// assert_eq!(Finite::new(f64::INFINITY).unwrap_err(), ConstraintError::NotFinite);
/// assert_eq!(Finite::new(f64::NAN).unwrap_err(), ConstraintError::NotANumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not a number (`NaN`).
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}
