//! Algebraic equation models.

pub mod quadratic;
