//! Error types for Easel operations.
//!
//! Layout calls themselves are total. [`EaselError`] covers the surfaces
//! around them: reading documents and loading configuration.

use std::io;

use thiserror::Error;

/// The main error type for Easel operations.
///
/// # Diagnostic Variants
///
/// The `Document` variant keeps the offending source together with the
/// one-based line and column reported by the decoder, so front ends can
/// point at the exact location.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {message}")]
    Document {
        message: String,
        line: usize,
        column: usize,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EaselError {
    /// Create a new `Document` error with the associated source text.
    pub fn new_document_error(
        message: impl Into<String>,
        line: usize,
        column: usize,
        src: impl Into<String>,
    ) -> Self {
        Self::Document {
            message: message.into(),
            line,
            column,
            src: src.into(),
        }
    }
}
