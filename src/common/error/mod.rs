//! Unified error types for the Longan library.
//!
//! This module provides a single error type covering XML rendering, content
//! decoding, and style resolution, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
