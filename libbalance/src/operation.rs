//! Operations applied to both sides of an equation, and the commands that spell them.
//!
//! A command is an operator followed by an operand, with optional whitespace in between:
//!
//! ```text
//! +1    - x    *3    / x    ⋅ 5    ÷ 7
//! ```

use crate::common::Span;
use crate::{Fraction, Term, Variable};

use core::fmt;
use core::str::FromStr;

/// The identifier of the unknown every equation is solved for.
pub const UNKNOWN: &str = "x";

/// The right-hand side of an operation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operand {
    /// An integer constant, like `3`.
    Constant(i64),
    /// A linear variable, like `x`.
    Variable(String),
}

impl Operand {
    /// The operand as a fraction, scaled by `sign`. Scaling happens in `f64`, where negating
    /// `i64::MIN` cannot overflow.
    fn to_fraction(&self, sign: i64) -> Fraction {
        match self {
            Self::Constant(n) => Fraction::constant(sign as f64 * *n as f64),
            Self::Variable(id) => {
                Term::new(sign as f64, vec![Variable::linear(id.as_str())]).into()
            }
        }
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(0))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(n) => write!(f, "{}", n),
            Self::Variable(id) => write!(f, "{}", id),
        }
    }
}

/// An operation applied to both sides of an equation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    Add(Operand),
    Subtract(Operand),
    Multiply(Operand),
    Divide(Operand),
}

impl Operation {
    pub fn operand(&self) -> &Operand {
        match self {
            Self::Add(operand)
            | Self::Subtract(operand)
            | Self::Multiply(operand)
            | Self::Divide(operand) => operand,
        }
    }

    /// The transient fraction folded into each side of an equation. Subtraction yields the
    /// negated operand, since subtracting is adding the negation.
    pub fn to_fraction(&self) -> Fraction {
        match self {
            Self::Subtract(operand) => operand.to_fraction(-1),
            Self::Add(operand) | Self::Multiply(operand) | Self::Divide(operand) => {
                operand.to_fraction(1)
            }
        }
    }

    /// Whether the operation is a division by the constant zero.
    pub fn divides_by_zero(&self) -> bool {
        matches!(self, Self::Divide(operand) if operand.is_zero())
    }

    /// The level at which the operation becomes available to a player, or
    /// [None](Option::None) if it is never offered.
    pub fn unlock_level(&self) -> Option<u32> {
        use Operand::{Constant, Variable as Var};
        use Operation::*;
        match self {
            Add(Constant(1)) | Subtract(Constant(1)) => Some(0),
            Add(Var(v)) | Subtract(Var(v)) if v == UNKNOWN => Some(1),
            Multiply(Constant(2)) | Divide(Constant(2)) => Some(2),
            Multiply(Constant(3)) | Divide(Constant(3)) => Some(3),
            Multiply(Constant(5)) | Divide(Constant(5)) => Some(4),
            Multiply(Constant(7)) | Divide(Constant(7)) => Some(4),
            Multiply(Var(v)) | Divide(Var(v)) if v == UNKNOWN => Some(5),
            _ => None,
        }
    }

    /// Whether the operation is available at `level`.
    pub fn is_unlocked_at(&self, level: u32) -> bool {
        self.unlock_level().map_or(false, |unlock| unlock <= level)
    }
}

/// Every operation offered to a player, in display order.
pub fn catalogue() -> Vec<Operation> {
    use Operand::{Constant, Variable as Var};
    use Operation::*;
    let x = || Var(UNKNOWN.to_owned());
    vec![
        Add(Constant(1)),
        Add(x()),
        Subtract(Constant(1)),
        Subtract(x()),
        Multiply(Constant(2)),
        Multiply(Constant(3)),
        Multiply(Constant(5)),
        Multiply(Constant(7)),
        Divide(Constant(2)),
        Divide(Constant(3)),
        Divide(Constant(5)),
        Divide(Constant(7)),
        Multiply(x()),
        Divide(x()),
    ]
}

/// The operations available at `level`, in display order.
pub fn unlocked_at(level: u32) -> Vec<Operation> {
    catalogue()
        .into_iter()
        .filter(|op| op.is_unlocked_at(level))
        .collect()
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Add(_) => '+',
            Self::Subtract(_) => '-',
            Self::Multiply(_) => '*',
            Self::Divide(_) => '/',
        };
        write!(f, "{}{}", op, self.operand())
    }
}

/// The reason a command could not be read as an [Operation].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandErrorKind {
    /// The command does not start with a known operator.
    UnknownCommand,
    /// The operator is not followed by an integer or an identifier.
    MalformedOperand,
}

/// A command that could not be read as an [Operation], with the span of the offending text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CommandError {
    pub kind: CommandErrorKind,
    pub span: Span,
}

impl CommandError {
    fn new<S: Into<Span>>(kind: CommandErrorKind, span: S) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CommandErrorKind::UnknownCommand => write!(f, "unknown command"),
            CommandErrorKind::MalformedOperand => write!(f, "malformed operand"),
        }
    }
}

impl std::error::Error for CommandError {}

impl FromStr for Operation {
    type Err = CommandError;

    /// Parses a command. Spans in errors are byte offsets into `command`.
    fn from_str(command: &str) -> Result<Self, Self::Err> {
        let start = command.len() - command.trim_start().len();
        let trimmed = command.trim();
        let mut chars = trimmed.chars();
        let op = match chars.next() {
            Some(c) => c,
            None => {
                return Err(CommandError::new(
                    CommandErrorKind::UnknownCommand,
                    Span::at(start),
                ))
            }
        };
        let op_len = op.len_utf8();
        let ctor: fn(Operand) -> Operation = match op {
            '+' => Operation::Add,
            '-' | '−' => Operation::Subtract,
            '*' | '⋅' | '·' | '×' => Operation::Multiply,
            '/' | '÷' => Operation::Divide,
            _ => {
                let word_end = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                return Err(CommandError::new(
                    CommandErrorKind::UnknownCommand,
                    start..start + word_end,
                ));
            }
        };

        let rest = &trimmed[op_len..];
        let operand_start = start + op_len + (rest.len() - rest.trim_start().len());
        let operand = rest.trim();
        let operand_span = operand_start..operand_start + operand.len();
        if operand.is_empty() {
            return Err(CommandError::new(
                CommandErrorKind::MalformedOperand,
                Span::at(operand_start),
            ));
        }

        if let Ok(n) = operand.parse::<i64>() {
            return Ok(ctor(Operand::Constant(n)));
        }
        let mut operand_chars = operand.chars();
        let is_identifier = operand_chars.next().map_or(false, char::is_alphabetic)
            && operand_chars.all(|c| c.is_alphanumeric() || c == '_');
        if is_identifier {
            Ok(ctor(Operand::Variable(operand.to_owned())))
        } else {
            Err(CommandError::new(
                CommandErrorKind::MalformedOperand,
                operand_span,
            ))
        }
    }
}
