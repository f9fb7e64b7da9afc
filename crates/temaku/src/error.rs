//! Error types for temaku.
//!
//! The markup grammar itself never fails: malformed input degrades into plain
//! data. The only runtime failure is the sink refusing bytes.

use thiserror::Error;

/// Errors that can occur while rendering markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The sink failed to accept bytes.
    #[error("sink error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Errors that can occur when parsing a backend name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackendParseError {
    /// Unknown backend name.
    #[error("unknown backend: {0} (expected `ansi` or `html`)")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
