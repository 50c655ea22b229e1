//! ODT content fragment decoding.
//!
//! Reverse mapping of the whitespace encoding: reconstructs the literal text
//! that a fragment of ODT content markup represents. One space per bare
//! `text:s`, N spaces per `text:s text:c="N"`, one tab per `text:tab`, one
//! newline per `text:line-break`; all other elements contribute only their
//! text content.

use crate::common::xml::unescape_xml;
use crate::common::{Error, Result};
use crate::odt::constants::{TEXT_C, TEXT_LINE_BREAK, TEXT_S, TEXT_TAB};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Reconstruct the plain text encoded in an ODT content fragment.
///
/// # Examples
///
/// ```
/// use longan::odt::decode_content;
///
/// # fn main() -> longan::Result<()> {
/// let xml = r#"<text:p>a<text:tab />b<text:s text:c="3" />c</text:p>"#;
/// assert_eq!(decode_content(xml)?, "a\tb   c");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`Error::XmlError`] on malformed XML, [`Error::InvalidFormat`] on a
/// whitespace count that is not a number or an unknown entity reference.
pub fn decode_content(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                decode_marker(e, &mut text)?;
            },
            Ok(Event::Text(ref t)) => {
                let raw = String::from_utf8(t.to_vec()).map_err(|_| {
                    Error::InvalidFormat("Invalid UTF-8 in text content".to_string())
                })?;
                text.push_str(&unescape_xml(&raw));
            },
            Ok(Event::GeneralRef(ref e)) => push_general_ref(e, &mut text)?,
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::from(e)),
            _ => {},
        }
        buf.clear();
    }

    Ok(text)
}

/// Append the whitespace a marker element stands for; other elements are
/// structural and contribute nothing themselves
fn decode_marker(e: &BytesStart<'_>, out: &mut String) -> Result<()> {
    let name = e.name();
    if name.as_ref() == TEXT_TAB.as_bytes() {
        out.push('\t');
    } else if name.as_ref() == TEXT_LINE_BREAK.as_bytes() {
        out.push('\n');
    } else if name.as_ref() == TEXT_S.as_bytes() {
        for _ in 0..space_count(e)? {
            out.push(' ');
        }
    }
    Ok(())
}

/// The space count of a `text:s` marker; 1 when the attribute is absent
fn space_count(e: &BytesStart<'_>) -> Result<usize> {
    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|_| Error::InvalidFormat("Invalid attribute".to_string()))?;
        if attr.key.as_ref() == TEXT_C.as_bytes() {
            let value = std::str::from_utf8(&attr.value)
                .map_err(|_| Error::InvalidFormat("Invalid UTF-8 in attribute value".to_string()))?;
            return value.parse().map_err(|_| {
                Error::InvalidFormat(format!("Invalid whitespace count: {}", value))
            });
        }
    }
    Ok(1)
}

/// Resolve a general entity reference to its character
fn push_general_ref(name: &[u8], out: &mut String) -> Result<()> {
    match name {
        b"amp" => out.push('&'),
        b"lt" => out.push('<'),
        b"gt" => out.push('>'),
        b"quot" => out.push('"'),
        b"apos" => out.push('\''),
        [b'#', code @ ..] => out.push(parse_char_ref(code)?),
        _ => {
            return Err(Error::InvalidFormat(format!(
                "Unknown entity: &{};",
                String::from_utf8_lossy(name)
            )));
        },
    }
    Ok(())
}

/// Parse a numeric character reference body (`#NNN` or `#xHHH`, sans `#`)
fn parse_char_ref(code: &[u8]) -> Result<char> {
    let code = std::str::from_utf8(code)
        .map_err(|_| Error::InvalidFormat("Invalid character reference".to_string()))?;
    let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => code.parse(),
    }
    .map_err(|_| Error::InvalidFormat(format!("Invalid character reference: &#{};", code)))?;
    char::from_u32(value)
        .ok_or_else(|| Error::InvalidFormat(format!("Invalid character reference: &#{};", code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paragraph() {
        assert_eq!(
            decode_content(r#"<text:p text:style-name="Normal">hello</text:p>"#).unwrap(),
            "hello"
        );
    }

    #[test]
    fn whitespace_markers_expand() {
        let xml = r#"<text:p><text:s text:c="2" />a<text:tab />b<text:s /></text:p>"#;
        assert_eq!(decode_content(xml).unwrap(), "  a\tb ");
    }

    #[test]
    fn nested_span_and_change_marks_are_structural() {
        let xml = concat!(
            r#"<text:p text:style-name="Normal"><text:span text:style-name="Bold">"#,
            r#"<text:change-start text:change-id="c1" />hi<text:change-end text:change-id="c1" />"#,
            "</text:span></text:p>"
        );
        assert_eq!(decode_content(xml).unwrap(), "hi");
    }

    #[test]
    fn line_break_becomes_newline() {
        assert_eq!(
            decode_content("<text:p>a<text:line-break />b</text:p>").unwrap(),
            "a\nb"
        );
    }

    #[test]
    fn entities_resolve() {
        assert_eq!(
            decode_content("<text:p>a &amp; b &#33; &#x21;</text:p>").unwrap(),
            "a & b ! !"
        );
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(decode_content("<text:p><text:span></text:p>").is_err());
    }

    #[test]
    fn garbage_whitespace_count_is_an_error() {
        let err = decode_content(r#"<text:s text:c="lots" />"#);
        assert!(matches!(err, Err(Error::InvalidFormat(_))));
    }
}
