//! Per-item diagnostics reported while resolving or rendering a diagram.
//!
//! Rendering never aborts because a single element is malformed. Problems
//! such as missing geometry or an unsupported diagram type are reported as a
//! [`Diagnostic`] to a [`DiagnosticSink`] and the batch continues.
//!
//! # Sinks
//!
//! - [`LogSink`] forwards every diagnostic to the `log` facade
//! - [`DiagnosticCollector`] keeps them in memory for hosts and tests

use std::fmt;

use log::{error, warn};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The item (or the whole diagram) could not be processed.
    Error,

    /// The item was skipped or degraded; processing continued.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single reported problem, optionally tied to a model item id.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    subject: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Attach the id of the element or relationship the diagnostic is about.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Id of the offending item, if any.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            subject: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(subject) = &self.subject {
            write!(f, "[{subject}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Receiver for diagnostics.
///
/// Severities are preserved end to end; a sink must not downgrade or drop
/// errors it receives.
pub trait DiagnosticSink {
    /// Report one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A sink that writes diagnostics through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let subject = diagnostic.subject().unwrap_or("-");
        match diagnostic.severity() {
            Severity::Error => error!(subject; "{}", diagnostic.message()),
            Severity::Warning => warn!(subject; "{}", diagnostic.message()),
        }
    }
}

/// A sink that accumulates diagnostics in memory.
///
/// # Example
///
/// ```
/// # use apollon_core::diagnostic::{Diagnostic, DiagnosticCollector, DiagnosticSink};
/// let mut collector = DiagnosticCollector::new();
///
/// collector.report(Diagnostic::warning("element has no bounds").with_subject("e1"));
/// assert!(!collector.has_errors());
///
/// collector.report(Diagnostic::error("unsupported diagram type"));
/// assert!(collector.has_errors());
/// assert_eq!(collector.diagnostics().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one error was reported.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// All diagnostics in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over the warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity().is_warning())
    }

    /// Iterate over the errors only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity().is_error())
    }

    /// Consume the collector and return every diagnostic.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_predicates() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Error.is_warning());
        assert!(Severity::Warning.is_warning());
        assert!(!Severity::Warning.is_error());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("missing bounds").with_subject("class-1");
        assert_eq!(diag.to_string(), "warning[class-1]: missing bounds");

        let diag = Diagnostic::error("unsupported diagram type `PetriNet`");
        assert_eq!(diag.to_string(), "error: unsupported diagram type `PetriNet`");
    }

    #[test]
    fn test_collector_starts_empty() {
        let collector = DiagnosticCollector::new();
        assert!(!collector.has_errors());
        assert!(collector.diagnostics().is_empty());
    }

    #[test]
    fn test_collector_preserves_severities_and_order() {
        let mut collector = DiagnosticCollector::new();
        collector.report(Diagnostic::warning("w1"));
        collector.report(Diagnostic::error("e1"));
        collector.report(Diagnostic::warning("w2"));

        assert!(collector.has_errors());
        assert_eq!(collector.warnings().count(), 2);
        assert_eq!(collector.errors().count(), 1);

        let messages: Vec<_> = collector
            .into_diagnostics()
            .into_iter()
            .map(|d| d.message().to_string())
            .collect();
        assert_eq!(messages, ["w1", "e1", "w2"]);
    }

    #[test]
    fn test_log_sink_accepts_both_severities() {
        let mut sink = LogSink;
        sink.report(Diagnostic::warning("logged warning").with_subject("a"));
        sink.report(Diagnostic::error("logged error"));
    }
}
