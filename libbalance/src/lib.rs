//! libbalance is the symbolic arithmetic core of balance, a trainer for solving linear equations.
//!
//! An equation is two [sides](Side) of [fractions](Fraction) of [terms](Term). The player solves
//! it by applying an [Operation] to both sides at once until it reads `x = ...`:
//!
//! ```
//! use libbalance::{Equation, Fraction, Operation, Side, Term, Variable};
//!
//! // 2x + 1 = 7
//! let mut equation = Equation::new(
//!     Side::new(vec![
//!         Term::new(2., vec![Variable::linear("x")]).into(),
//!         Fraction::constant(1.),
//!     ]),
//!     Fraction::constant(7.),
//! );
//! equation.apply(&"-1".parse::<Operation>().unwrap()).unwrap();
//! equation.apply(&"/2".parse::<Operation>().unwrap()).unwrap();
//! assert!(equation.is_solved());
//! assert_eq!(equation.to_string(), "x = 3");
//! ```

pub mod common;
pub mod diagnostics;

mod errors;
pub use errors::{AlgebraError, AlgebraResult};

mod coefficient;
pub use coefficient::Coefficient;
mod variable;
pub use variable::Variable;
mod term;
pub use term::Term;
mod fraction;
pub use fraction::Fraction;

mod equation;
pub use equation::{Equation, Side};

mod operation;
pub use operation::{
    catalogue, unlocked_at, CommandError, CommandErrorKind, Operand, Operation, UNKNOWN,
};

mod session;
pub use session::{Outcome, Session, SessionConfig, SessionError, SessionResult, XpBar};

mod emit;
pub use emit::{Emit, EmitFormat};

mod math;

#[cfg(feature = "benchmark-internals")]
pub use math::*;
