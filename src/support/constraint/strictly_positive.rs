use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level, for example the retry budget of a
/// [`Prompt`](crate::support::prompt::Prompt).
///
/// # Examples
///
/// ```
/// use solve_square::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(3.5).unwrap();
/// assert_eq!(y.into_inner(), 3.5);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0_usize).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_counts() {
        let tries = Constrained::<usize, StrictlyPositive>::new(3).unwrap();
        assert_eq!(tries.into_inner(), 3);

        assert_eq!(
            StrictlyPositive::new(0_usize).unwrap_err(),
            ConstraintError::Zero
        );
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(f64::EPSILON).is_ok());
        assert_eq!(
            StrictlyPositive::new(-5.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
