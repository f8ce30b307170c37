//! Error adapter for converting ApollonError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! JSON decode errors carry a line and column; they are reported with the
//! model source and a label at the offending position.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use apollon::ApollonError;

/// Diagram types with a renderer, listed in the unsupported-type help.
const SUPPORTED_TYPES: &str = "ClassDiagram, ObjectDiagram, ActivityDiagram, UseCaseDiagram, \
                               CommunicationDiagram, ComponentDiagram";

/// Adapter for a model error with a known source position.
pub struct ModelAdapter<'a> {
    err: &'a ApollonError,
    src: &'a str,
    span: SourceSpan,
}

impl<'a> ModelAdapter<'a> {
    /// Create an adapter, if `err` is a model error with a location.
    pub fn new(err: &'a ApollonError) -> Option<Self> {
        let ApollonError::Model { src, .. } = err else {
            return None;
        };
        let (line, column) = err.location()?;
        Some(Self {
            err,
            src,
            span: span_at(src, line, column),
        })
    }
}

impl fmt::Debug for ModelAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("err", &self.err)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ModelAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for ModelAdapter<'_> {}

impl MietteDiagnostic for ModelAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("apollon::model"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            self.span,
        ))))
    }
}

/// Adapter for errors without a source position.
pub struct ErrorAdapter<'a>(pub &'a ApollonError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ApollonError::Io(_) => "apollon::io",
            ApollonError::Model { .. } => "apollon::model",
            ApollonError::UnsupportedDiagram(_) => "apollon::unsupported",
            ApollonError::Config(_) => "apollon::config",
            ApollonError::Export(_) => "apollon::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ApollonError::UnsupportedDiagram(_) => {
                Some(Box::new(format!("supported diagram types: {SUPPORTED_TYPES}")))
            }
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A model error pointing into the JSON source.
    Model(ModelAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Model(m) => fmt::Display::fmt(m, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Model(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Model(m) => m.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Model(m) => m.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Model(m) => m.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Model(m) => m.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a one-based line and column into a one-byte [`SourceSpan`].
///
/// Positions past the end of `src` collapse to an empty span at the end.
fn span_at(src: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    SourceSpan::new(offset.into(), len)
}

/// Convert an [`ApollonError`] into a reportable error.
pub fn to_reportable(err: &ApollonError) -> Reportable<'_> {
    match ModelAdapter::new(err) {
        Some(adapter) => Reportable::Model(adapter),
        None => Reportable::Error(ErrorAdapter(err)),
    }
}
