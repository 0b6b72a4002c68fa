//! Error types for pdfoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
///
/// Weak or missing typographic signals are never errors: a document with no
/// usable fonts simply yields an empty outline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading layout dumps or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A layout dump could not be decoded.
    #[error("Layout JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The external layout parser failed on this document.
    #[error("Layout parsing error: {0}")]
    Layout(String),

    /// A vocabulary lexicon produced an invalid pattern.
    #[error("Invalid lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Invalid input supplied by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
