//! Diagnostics for commands given to a balance session.

use crate::common::Span;

use std::collections::HashMap;

/// The kind of a balance diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic, emitted for commands that could not be applied.
    Error,
    /// A note diagnostic is a generic annotation with no specific connotation like `error`. It can
    /// be particularly useful as an associated diagnostic, for example in expanding on a primary
    /// error.
    Note,
    /// A help diagnostic should instruct the user how their command can be changed to work.
    Help,
}

/// A secondary diagnostic associated with a primary `Diagnostic`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub msg: String,
}

/// A diagnostic for a balance command.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub title: String,
    pub code: Option<&'static str>,
    pub msg: Option<String>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
    pub unspanned_associated_diagnostics: Vec<AssociatedDiagnostic>,
}

/// A diagnostic with a stable code and a long-form explanation of when it is emitted.
pub(crate) trait DiagnosticRecord {
    const CODE: &'static str;
    const EXPLANATION: &'static str;
}

/// A collection of [DiagnosticRecord]s.
pub(crate) trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

impl Diagnostic {
    /// Creates an error diagnostic at a span.
    pub(crate) fn span_err<S, M, N>(span: S, title: M, code: &'static str, err: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            span: span.into(),
            title: title.into(),
            code: Some(code),
            msg: err.into(),
            associated_diagnostics: Vec::with_capacity(2),
            unspanned_associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Note,
                span: self.span,
                msg: note.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic.
    pub(crate) fn with_help<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Help,
                span: self.span,
                msg: note.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic, possibly at a different span.
    pub(crate) fn with_help_note<S, M>(mut self, span: S, note: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            span: span.into(),
            msg: note.into(),
        });
        self
    }

    /// Every diagnostic code balance can emit, mapped to its explanation.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
        use crate::session::SessionErrors;

        SessionErrors::codes_with_explanations()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_explained() {
        let codes = crate::session::SessionErrors::codes_with_explanations();
        let all = Diagnostic::all_codes_with_explanations();
        assert_eq!(codes.len(), all.len());
        for (code, explanation) in all {
            assert!(code.starts_with('B'), "{}", code);
            assert!(!explanation.trim().is_empty(), "{} has no explanation", code);
        }
    }

    #[test]
    fn notes_take_the_primary_span() {
        let diagnostic =
            Diagnostic::span_err((1, 3), "title", "B0000", None::<String>).with_note("note");
        assert_eq!(
            diagnostic.unspanned_associated_diagnostics[0].span,
            Span::from((1, 3))
        );
        assert_eq!(
            diagnostic.unspanned_associated_diagnostics[0].kind,
            DiagnosticKind::Note
        );
    }
}
