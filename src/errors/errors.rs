use std::fmt::Display;

use thiserror::Error;
use tracing::trace;

use crate::Span;

/// A positioned error record produced by the scanner or the parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {span}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Diagnostic { kind, span }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self.kind {
            DiagnosticKind::UnrecognisedToken => ErrorTip::Suggestion(String::from(
                "this character is not part of the language",
            )),
            DiagnosticKind::CloseParenthesisExpected => {
                ErrorTip::Suggestion(String::from("is a '(' left open?"))
            }
            DiagnosticKind::CloseCurlyExpected => {
                ErrorTip::Suggestion(String::from("is a '{' left open?"))
            }
            DiagnosticKind::EofExpected => ErrorTip::Suggestion(String::from(
                "this closing delimiter has no matching opener",
            )),
            DiagnosticKind::ParametersListExpected => ErrorTip::Suggestion(String::from(
                "functions are declared as `function name(a, b) { ... }`",
            )),
            DiagnosticKind::CommaExpected => {
                ErrorTip::Suggestion(String::from("parameters are separated by commas"))
            }
            DiagnosticKind::ExpressionExpected
            | DiagnosticKind::IdentifierExpected
            | DiagnosticKind::FunctionBodyExpected
            | DiagnosticKind::ParameterDeclarationExpected
            | DiagnosticKind::TypeExpected => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Every diagnostic is an error; the display text is the message callers see.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Lexical: a character no token starts with.
    #[error("Expression expected")]
    UnrecognisedToken,
    #[error("Expression expected")]
    ExpressionExpected,
    #[error("')' expected")]
    CloseParenthesisExpected,
    #[error("'}}' expected")]
    CloseCurlyExpected,
    #[error("EOF expected")]
    EofExpected,
    #[error("( expected")]
    ParametersListExpected,
    #[error("Identifier expected")]
    IdentifierExpected,
    #[error("{{ expected")]
    FunctionBodyExpected,
    #[error(", expected")]
    CommaExpected,
    #[error("Parameter declaration expected")]
    ParameterDeclarationExpected,
    #[error("Type expected")]
    TypeExpected,
}

/// Ordered, append-only collection of diagnostics for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { entries: vec![] }
    }

    pub fn push(&mut self, kind: DiagnosticKind, span: Span) {
        trace!(?kind, %span, "diagnostic recorded");
        self.entries.push(Diagnostic::new(kind, span));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
