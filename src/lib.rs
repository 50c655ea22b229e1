//! Longan - A Rust library for writing OpenDocument Text content
//!
//! This library serializes plain-text runs into the content XML of
//! OpenDocument Text (.odt) documents. ODT represents runs of literal spaces
//! and tabs as dedicated markup elements (`text:s`, `text:tab`) rather than
//! literal whitespace characters, because XML readers collapse or mishandle
//! raw whitespace; Longan implements that encoding as a lossless round-trip
//! scheme, together with the surrounding paragraph/span/style scaffolding and
//! tracked-change markers.
//!
//! # Features
//!
//! - **Run encoder**: Convert a [`odt::TextRun`] into streaming XML output
//! - **Whitespace encoding**: Lossless `text:s`/`text:tab` representation of
//!   spaces and tabs
//! - **Track changes**: `text:change`, `text:change-start` and
//!   `text:change-end` markers for tracked insertions and deletions
//! - **Streaming sinks**: Write through the [`odt::XmlSink`] trait, render to
//!   a string with [`odt::XmlWriter`], or record an inspectable instruction
//!   sequence with [`odt::InstructionRecorder`]
//! - **Decoder**: Reconstruct the original plain text from an encoded
//!   content fragment
//!
//! # Example - Encoding a run
//!
//! ```
//! use longan::odt::{TextRun, TextRunEncoder, XmlWriter};
//!
//! # fn main() -> longan::Result<()> {
//! let run = TextRun::new("a\tb");
//! let mut writer = XmlWriter::new();
//! TextRunEncoder::encode(&run, &mut writer)?;
//!
//! assert_eq!(
//!     writer.finish()?,
//!     r#"<text:p text:style-name="Normal">a<text:tab />b</text:p>"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Round-tripping whitespace
//!
//! ```
//! use longan::odt::{decode_content, TextRun, TextRunEncoder, XmlWriter};
//!
//! # fn main() -> longan::Result<()> {
//! let run = TextRun::new("  indented   text ");
//! let mut writer = XmlWriter::new();
//! TextRunEncoder::encode(&run, &mut writer)?;
//!
//! let xml = writer.finish()?;
//! assert_eq!(decode_content(&xml)?, "  indented   text ");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Tracked changes
//!
//! ```
//! use longan::odt::{ChangeAnnotation, ChangeKind, TextRun, TextRunEncoder, XmlWriter};
//!
//! # fn main() -> longan::Result<()> {
//! let mut run = TextRun::new("inserted words");
//! run.set_change(ChangeAnnotation::new("ct-1", ChangeKind::Insertion));
//!
//! let mut writer = XmlWriter::new();
//! TextRunEncoder::encode(&run, &mut writer)?;
//! let xml = writer.finish()?;
//!
//! assert!(xml.contains(r#"<text:change-start text:change-id="ct-1" />"#));
//! assert!(xml.contains(r#"<text:change-end text:change-id="ct-1" />"#));
//! # Ok(())
//! # }
//! ```

/// Common types and utilities shared across the crate
pub mod common;

/// OpenDocument Text (.odt) content writing and decoding
pub mod odt;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
