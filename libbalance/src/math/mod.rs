//! Number-theoretic helpers used by the [fraction](crate::Fraction) simplifier.
//!
//! This module is decoupled from the term and fraction representations so that its algorithms
//! can be benchmarked on primitive integers directly.

mod gcd;
pub use gcd::*;
