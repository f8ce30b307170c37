//! Output backends for rendered diagrams.

pub mod svg;

use std::io;

use thiserror::Error;

/// Failure while turning drawn output into a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The drawing cannot be expressed in the output format.
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
