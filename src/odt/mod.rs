//! OpenDocument Text (.odt) content writing.
//!
//! This module converts plain-text runs into ODT content markup. A run is a
//! maximal contiguous span of text sharing the same formatting and tracking
//! state; encoding one run produces a `text:p` paragraph (or a bare fragment
//! when embedding inside another element), an optional `text:span` for
//! character styling, tracked-change markers, and the whitespace encoding
//! that ODT requires for literal spaces and tabs.
//!
//! The output boundary is the [`XmlSink`] trait: [`XmlWriter`] renders a
//! fragment string, while [`InstructionRecorder`] captures the emission
//! sequence for inspection. The reverse mapping lives in [`decode_content`].
//!
//! # References
//! - ODF Specification: §5.1 (Paragraph), §6.1.3 (Whitespace Characters),
//!   §5.5 (Change Tracking)

/// ODT vocabulary constants
pub mod constants;

mod decoder;
mod encoder;
mod run;
mod sink;
mod writer;

pub use decoder::decode_content;
pub use encoder::TextRunEncoder;
pub use run::{ChangeAnnotation, ChangeKind, ParagraphStyle, TextRun};
pub use sink::{EmissionInstruction, InstructionRecorder, XmlSink};
pub use writer::XmlWriter;
