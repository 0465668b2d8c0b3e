//! Errors produced by algebraic operations.
//!
//! Every fallible operation validates its operands before touching any state, so an `Err` always
//! means that neither operand was modified.

use thiserror::Error;

/// An algebraic operation that could not be performed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Two terms with different variable signatures were added.
    #[error("only similar terms can be added")]
    IncompatibleTerms,
    /// Two fractions with dissimilar numerators or denominators were added.
    #[error("only similar fractions can be added")]
    IncompatibleFractions,
    /// A division whose divisor has a zero coefficient.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;
