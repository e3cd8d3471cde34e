//! Diagnostics reporting for the lexer and parser.
//!
//! The front end never writes to process-wide state. Components that can
//! produce non-fatal diagnostics (today: the lexer, for skippable
//! unrecognized characters) take a [`DiagnosticSink`] at construction, so
//! embedders choose where output goes and tests can capture it
//! deterministically.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::parser::scanner::Span;

// ─────────────────────────────────────────────────────────────────────────────
// Diagnostic
// ─────────────────────────────────────────────────────────────────────────────

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Recoverable oddity; lexing/parsing continues.
    Warning,
    /// Fatal condition; reported just before the operation aborts.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message tied to a source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity of the condition.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Where in the source the condition was observed.
    pub span: Span,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.span, self.severity, self.message)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sinks
// ─────────────────────────────────────────────────────────────────────────────

/// Receiver for diagnostics emitted during lexing/parsing.
pub trait DiagnosticSink {
    /// Deliver one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that writes formatted diagnostics to stderr. The default.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Sink that accumulates diagnostics in memory for later inspection.
///
/// Cloning is shallow: all clones share the same buffer, so a test can hand
/// one clone to the lexer and read the results from another.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    collected: Rc<RefCell<Vec<Diagnostic>>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all diagnostics reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.collected.borrow().clone()
    }

    /// Returns `true` when nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.collected.borrow_mut().push(diagnostic);
    }
}
