//! Unified error types for the Longan library.
//!
//! This module provides a single error type covering XML rendering, content
//! decoding, and style resolution, presenting a consistent API to users.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Malformed content or misuse of the streaming writer
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Style value that a styling collaborator must resolve to a plain name
    /// before it reaches the encoder
    #[error("Unresolved style: {0}")]
    UnresolvedStyle(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
