//! Diagnostic types and builders.

use crate::ErrorCode;
use soluna_common::Span;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// Which analysis phase produced a diagnostic.
///
/// Lexical diagnostics sort before syntactic ones when their spans tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Lexical,
    Syntactic,
}

/// A labeled span within a diagnostic.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A diagnostic message with optional labels, notes, and help.
///
/// Diagnostics are plain data. The engine never returns them as `Err`
/// and never panics on bad input; it accumulates these and keeps going.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: Phase,
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: Phase, code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            phase,
            code,
            message: message.into(),
            span,
            labels: vec![],
            notes: vec![],
            help: None,
        }
    }

    pub fn warning(phase: Phase, code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            phase,
            code,
            message: message.into(),
            span,
            labels: vec![],
            notes: vec![],
            help: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
