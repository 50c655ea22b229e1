//! Text run encoding.
//!
//! Converts a [`TextRun`] into ODT content markup through a streaming sink.
//! Raw runs of spaces and tabs cannot survive an XML round trip (readers
//! collapse them), so ODT represents them as dedicated `text:s` and
//! `text:tab` elements; the encoding implemented here is lossless in both
//! directions.

use crate::common::{Error, Result};
use crate::odt::constants::{
    DEFAULT_PARAGRAPH_STYLE, TEXT_C, TEXT_CHANGE, TEXT_CHANGE_END, TEXT_CHANGE_ID,
    TEXT_CHANGE_START, TEXT_P, TEXT_S, TEXT_SPAN, TEXT_STYLE_NAME, TEXT_TAB,
};
use crate::odt::run::{ChangeKind, ParagraphStyle, TextRun};
use crate::odt::sink::XmlSink;
use memchr::memchr2;

/// Stateless encoder from a text run to streaming XML output.
///
/// Encoding is deterministic and side-effect-free apart from the sink calls;
/// sink failures propagate to the caller unchanged. Runs may be encoded
/// concurrently on independent sinks.
///
/// # Examples
///
/// ```
/// use longan::odt::{TextRun, TextRunEncoder, XmlWriter};
///
/// # fn main() -> longan::Result<()> {
/// let mut run = TextRun::new("important");
/// run.set_style_name("Bold");
///
/// let mut writer = XmlWriter::new();
/// TextRunEncoder::encode(&run, &mut writer)?;
/// assert_eq!(
///     writer.finish()?,
///     r#"<text:p text:style-name="Normal"><text:span text:style-name="Bold">important</text:span></text:p>"#
/// );
/// # Ok(())
/// # }
/// ```
pub struct TextRunEncoder;

impl TextRunEncoder {
    /// Encode one run into the sink.
    ///
    /// A run annotated as a tracked deletion emits a single `text:change`
    /// marker and none of its content or styling. A tracked insertion wraps
    /// the content in `text:change-start`/`text:change-end` marks. All other
    /// runs emit their content through the whitespace encoding.
    ///
    /// # Errors
    ///
    /// [`Error::UnresolvedStyle`] when the paragraph style is not a plain
    /// named style; any sink error otherwise.
    pub fn encode<S: XmlSink>(run: &TextRun, sink: &mut S) -> Result<()> {
        let with_paragraph = !run.omits_paragraph_wrapper();
        if with_paragraph {
            sink.open_element(TEXT_P)?;
        }

        match run.change() {
            Some(change) if change.kind() == ChangeKind::Deletion => {
                // Deleted text renders as a change marker only, never as content
                sink.open_element(TEXT_CHANGE)?;
                sink.write_attribute(TEXT_CHANGE_ID, change.id())?;
                sink.close_element()?;
            },
            _ => {
                let paragraph_style = resolve_paragraph_style(run)?;
                sink.write_attribute_if(with_paragraph, TEXT_STYLE_NAME, paragraph_style)?;

                let span_style = run.style_name();
                if let Some(style) = span_style {
                    sink.open_element(TEXT_SPAN)?;
                    sink.write_attribute(TEXT_STYLE_NAME, style)?;
                }

                write_insertion_mark(sink, run, true)?;
                encode_whitespace(run.content(), sink)?;
                write_insertion_mark(sink, run, false)?;

                if span_style.is_some() {
                    sink.close_element()?;
                }
            },
        }

        if with_paragraph {
            sink.close_element()?;
        }
        Ok(())
    }
}

/// Effective paragraph style name: `Normal` when absent, the name verbatim
/// when resolved. An unresolved rich style is a configuration error; a
/// styling collaborator must flatten it before encoding.
fn resolve_paragraph_style(run: &TextRun) -> Result<&str> {
    match run.paragraph_style() {
        None => Ok(DEFAULT_PARAGRAPH_STYLE),
        Some(ParagraphStyle::Named(name)) => Ok(name),
        Some(ParagraphStyle::Unresolved(what)) => Err(Error::UnresolvedStyle(what.clone())),
    }
}

/// Emit a `text:change-start`/`text:change-end` mark for tracked insertions.
/// Deletions never reach this point and unannotated runs emit nothing.
fn write_insertion_mark<S: XmlSink>(sink: &mut S, run: &TextRun, start: bool) -> Result<()> {
    let Some(change) = run.change() else {
        return Ok(());
    };
    if change.kind() != ChangeKind::Insertion {
        return Ok(());
    }
    let name = if start { TEXT_CHANGE_START } else { TEXT_CHANGE_END };
    sink.open_element(name)?;
    sink.write_attribute(TEXT_CHANGE_ID, change.id())?;
    sink.close_element()
}

/// Encode literal text, replacing whitespace runs with ODT markers.
///
/// A leading run of spaces, every tab, every run of two or more spaces, and
/// a single space at end of string become `text:s`/`text:tab` elements.
/// A single interior space stays literal inside its text segment.
fn encode_whitespace<S: XmlSink>(text: &str, sink: &mut S) -> Result<()> {
    let bytes = text.as_bytes();

    // Leading spaces collapse into one marker before the main scan
    let lead = space_run_len(bytes, 0);
    if lead > 0 {
        write_space_marker(sink, lead)?;
    }

    let mut segment_start = lead;
    let mut pos = lead;
    while let Some(offset) = memchr2(b'\t', b' ', &bytes[pos..]) {
        let at = pos + offset;
        if bytes[at] == b'\t' {
            write_segment(sink, &text[segment_start..at])?;
            sink.write_empty_element(TEXT_TAB)?;
            pos = at + 1;
            segment_start = pos;
            continue;
        }

        let run = space_run_len(bytes, at);
        if run >= 2 {
            write_segment(sink, &text[segment_start..at])?;
            write_space_marker(sink, run)?;
            pos = at + run;
            segment_start = pos;
        } else if at + 1 == bytes.len() {
            // A single trailing space terminates the scan
            write_segment(sink, &text[segment_start..at])?;
            return write_space_marker(sink, 1);
        } else {
            pos = at + 1;
        }
    }

    write_segment(sink, &text[segment_start..])
}

/// Length of the run of space bytes starting at `from`
fn space_run_len(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|&&b| b == b' ').count()
}

/// Emit a text segment; an empty segment emits nothing
fn write_segment<S: XmlSink>(sink: &mut S, segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Ok(());
    }
    sink.write_text(segment)
}

/// Emit a `text:s` marker; the count attribute is omitted for a single space
fn write_space_marker<S: XmlSink>(sink: &mut S, count: usize) -> Result<()> {
    let mut buf = itoa::Buffer::new();
    sink.open_element(TEXT_S)?;
    sink.write_attribute_if(count > 1, TEXT_C, buf.format(count))?;
    sink.close_element()
}
