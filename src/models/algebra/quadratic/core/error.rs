use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building a quadratic equation.
///
/// Solving itself never fails; only coefficient validation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadraticError {
    /// A coefficient was infinite or `NaN`.
    #[error("invalid input: coefficient {name}")]
    InvalidInput {
        /// Name of the offending coefficient (`a`, `b`, or `c`).
        name: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

impl QuadraticError {
    /// Creates an invalid input error for the named coefficient.
    pub(super) fn invalid_input(name: &'static str, source: ConstraintError) -> Self {
        Self::InvalidInput { name, source }
    }
}
