//! User-facing balance diagnostics.
//!
//! The diagnostics module demarshalls [libbalance diagnostics][libbalance::diagnostics] into a
//! form pleasant for standard error.

use libbalance::diagnostics::{AssociatedDiagnostic, Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

/// Prepares a command for diagnostic emission.
pub fn sanitize_command_for_diagnostics(command: &str) -> String {
    let command = command.to_owned();
    command + " " // we might point past the end for a missing operand, so add extra space.
}

/// Renders diagnostics on `command`, the text of a single command. `line` is the number the
/// command is shown with, its position in a script or an interactive session.
pub fn emit_balance_diagnostics(
    line: usize,
    command: &str,
    diagnostics: &[Diagnostic],
    color: bool,
) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let last_i = diagnostics.len() - 1;
    let mut emitted_diagnostics = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        let main_annotation_type = convert_diagnostic_kind(&diagnostic.kind);
        let mut annotations = Vec::with_capacity(diagnostic.associated_diagnostics.len() + 1);
        // The first annotation always points to the command that generated this diagnostic.
        let label = diagnostic.msg.clone().unwrap_or_default();
        annotations.push(SourceAnnotation {
            label: &label,
            annotation_type: main_annotation_type,
            range: pointable(command, diagnostic.span.into()),
        });
        for associated_diagnostic in diagnostic.associated_diagnostics.iter() {
            annotations.push(SourceAnnotation {
                label: &associated_diagnostic.msg,
                annotation_type: convert_diagnostic_kind(&associated_diagnostic.kind),
                range: pointable(command, associated_diagnostic.span.into()),
            });
        }
        let mut footer = Vec::with_capacity(2);
        for associated_diagnostic in diagnostic.unspanned_associated_diagnostics.iter() {
            footer.push(convert_associated_diagnostic(associated_diagnostic));
        }

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: diagnostic.code,
                annotation_type: main_annotation_type,
            }),
            footer,
            slices: vec![Slice {
                source: command,
                line_start: line,
                origin: None,
                fold: true,
                annotations,
            }],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        let suffix = if i != last_i { "\n" } else { "" };
        emitted_diagnostics.push_str(&format!("{}\n{}", DisplayList::from(snippet), suffix));
    }
    emitted_diagnostics
}

/// Converts a byte range of `command` to the character range annotations are drawn with. An empty
/// range is widened to one character, so that it still has something to point at.
fn pointable(command: &str, (lo, hi): (usize, usize)) -> (usize, usize) {
    let to_char = |byte: usize| {
        command
            .char_indices()
            .take_while(|(i, _)| *i < byte)
            .count()
    };
    let (lo, hi) = (to_char(lo), to_char(hi));
    if lo == hi {
        (lo, hi + 1)
    } else {
        (lo, hi)
    }
}

/// Converts a balance AssociatedDiagnostic to an Annotation.
fn convert_associated_diagnostic(diagnostic: &AssociatedDiagnostic) -> Annotation {
    Annotation {
        label: Some(&diagnostic.msg),
        id: None,
        annotation_type: convert_diagnostic_kind(&diagnostic.kind),
    }
}

/// Converts a balance DiagnosticKind to an AnnotationType.
fn convert_diagnostic_kind(diagnostic_kind: &DiagnosticKind) -> AnnotationType {
    match diagnostic_kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}
