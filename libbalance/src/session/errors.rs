//! Diagnostic errors produced by commands given to a session.

use super::SessionError;
use crate::common::Span;
use crate::diagnostics::{Diagnostic, DiagnosticRecord, DiagnosticRegistry};
use crate::errors::AlgebraError;
use crate::operation::{unlocked_at, CommandError, CommandErrorKind};

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        pub struct SessionErrors;

        impl DiagnosticRegistry for SessionErrors {
            #[allow(clippy::vec_init_then_push)]
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }

        $(
            macro_rules! $error $gen_macro
        )*
    };
}

define_errors! {
    ///This error is fired when an operation tries to add two terms or fractions that are not
    ///similar. Terms are similar when they have the same variables to the same powers, so
    ///
    ///```text
    ///3x + 5x = 8x
    ///```
    ///
    ///combines, while
    ///
    ///```text
    ///3x + 5
    ///```
    ///
    ///does not. Operations on an equation always append dissimilar terms as a new term of the
    ///side instead of combining them, so seeing this error is a bug in balance.
    B0001: IncompatibleOperands {
        ($span:expr) => {
            Diagnostic::span_err(
                $span,
                "Incompatible operands",
                "B0001",
                "these terms cannot be combined".to_owned(),
            )
            .with_note("only terms with the same variables to the same powers can be added")
        }
    }

    ///This error is fired on divisions by zero. For example, the command
    ///
    ///```text
    ///÷ 0
    ///```
    ///
    ///would divide both sides of the equation by zero, which is undefined. The equation is left
    ///unchanged.
    B0002: DivisionByZero {
        ($span:expr, $operand_span:expr) => {
            Diagnostic::span_err(
                $span,
                "Cannot divide by zero",
                "B0002",
                "both sides would be divided by zero".to_owned(),
            )
            .with_help_note($operand_span, "try dividing by a non-zero number")
        }
    }

    ///This error is fired on commands that do not start with an operator. Every command is an
    ///operator followed by an operand, like
    ///
    ///```text
    ///+ 1
    ///- x
    ///* 3
    ///÷ x
    ///```
    ///
    ///Multiplication may also be written with `⋅` or `×`, and division with `/`.
    B0003: UnknownCommand {
        ($span:expr, $command:expr) => {
            Diagnostic::span_err(
                $span,
                format!(r#"Unknown command "{}""#, $command),
                "B0003",
                "expected one of `+`, `-`, `*`, or `/`".to_owned(),
            )
            .with_help(r#"commands look like "+ 1" or "/ x""#)
        }
    }

    ///This error is fired on operations that have not been unlocked yet. A session starts with
    ///adding and subtracting 1. Completing a level unlocks more operations:
    ///
    ///```text
    ///level 0: + 1, - 1
    ///level 1: + x, - x
    ///level 2: * 2, / 2
    ///level 3: * 3, / 3
    ///level 4: * 5, / 5, * 7, / 7
    ///level 5: * x, / x
    ///```
    ///
    ///Operations outside of this table are never unlocked.
    B0004: LockedOperation {
        ($span:expr, $operation:expr, $level:expr) => {{
            let available = unlocked_at($level)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let diagnostic = Diagnostic::span_err(
                $span,
                format!(r#""{}" is locked"#, $operation),
                "B0004",
                format!("not unlocked at level {}", $level),
            );
            let diagnostic = match $operation.unlock_level() {
                Some(unlock) => diagnostic.with_note(format!("unlocks at level {}", unlock)),
                None => diagnostic.with_note("this operation is never unlocked"),
            };
            diagnostic.with_help(format!("available operations are {}", available))
        }}
    }

    ///This error is fired on commands whose operand is neither a whole number nor a variable. For
    ///example, the commands
    ///
    ///```text
    ///+ 1.5
    ///* 2x
    ///÷
    ///```
    ///
    ///are all malformed. Operands are written as `7`, `-2`, or `x`.
    B0005: MalformedOperand {
        ($span:expr, $missing:expr) => {
            Diagnostic::span_err(
                $span,
                "Malformed operand",
                "B0005",
                if $missing {
                    "expected an operand".to_owned()
                } else {
                    "expected a whole number or a variable".to_owned()
                },
            )
        }
    }
}

/// The spans of a whole command and of its operand, as byte offsets into `command`.
fn command_spans(command: &str) -> (Span, Span) {
    let start = command.len() - command.trim_start().len();
    let end = command.trim_end().len().max(start);
    let text = &command[start..end];
    let after_op = text
        .char_indices()
        .nth(1)
        .map_or(text.len(), |(i, _)| i);
    let operand = &text[after_op..];
    let operand_start = start + after_op + (operand.len() - operand.trim_start().len());
    ((start..end).into(), (operand_start..end).into())
}

impl CommandError {
    /// Converts the error into a diagnostic for `command`, the text it was parsed from.
    pub fn diagnostic(&self, command: &str) -> Diagnostic {
        match self.kind {
            CommandErrorKind::UnknownCommand => {
                let word = command.get(self.span.lo..self.span.hi).unwrap_or_default();
                UnknownCommand!(self.span, word)
            }
            CommandErrorKind::MalformedOperand => {
                MalformedOperand!(self.span, self.span.lo == self.span.hi)
            }
        }
    }
}

impl SessionError {
    /// Converts the error into a diagnostic for `command`, the text of the rejected operation.
    pub fn diagnostic(&self, command: &str) -> Diagnostic {
        let (span, operand_span) = command_spans(command);
        match self {
            Self::Locked { operation, level } => LockedOperation!(span, operation, *level),
            Self::Algebra(AlgebraError::DivisionByZero) => DivisionByZero!(span, operand_span),
            Self::Algebra(AlgebraError::IncompatibleTerms)
            | Self::Algebra(AlgebraError::IncompatibleFractions) => IncompatibleOperands!(span),
        }
    }
}
