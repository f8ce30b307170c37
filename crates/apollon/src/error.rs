//! Error types for Apollon operations.
//!
//! This module provides the main error type [`ApollonError`]. Problems with
//! individual elements never end up here; they are reported as diagnostics
//! and rendering carries on without the affected item.

use std::io;

use thiserror::Error;

use apollon_core::model::ModelError;

use crate::export;

/// The main error type for Apollon operations.
///
/// # Diagnostic Variants
///
/// The `Model` variant keeps the JSON source next to the decode error so
/// hosts can point at the offending line and column.
#[derive(Debug, Error)]
pub enum ApollonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Model { err: ModelError, src: String },

    #[error("unsupported diagram type `{0}`")]
    UnsupportedDiagram(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl ApollonError {
    /// Create a new `Model` error with the associated JSON source.
    pub fn new_model_error(err: ModelError, src: impl Into<String>) -> Self {
        Self::Model {
            err,
            src: src.into(),
        }
    }

    /// One-based line and column of a JSON decode error, if known.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Model {
                err: ModelError::Json(err),
                ..
            } if err.line() > 0 => Some((err.line(), err.column())),
            _ => None,
        }
    }
}
