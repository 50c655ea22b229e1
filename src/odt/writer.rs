//! String-backed streaming XML writer.

use crate::common::xml::escape_xml_into;
use crate::common::{Error, Result};
use crate::odt::sink::XmlSink;
use smallvec::SmallVec;

/// Streaming XML writer rendering to an in-memory string.
///
/// Elements that receive no text and no children render self-closing.
/// Text content and attribute values are escaped on write; element and
/// attribute names are written verbatim.
///
/// # Examples
///
/// ```
/// use longan::odt::{XmlSink, XmlWriter};
///
/// # fn main() -> longan::Result<()> {
/// let mut writer = XmlWriter::new();
/// writer.open_element("text:span")?;
/// writer.write_attribute("text:style-name", "Bold")?;
/// writer.write_text("a & b")?;
/// writer.close_element()?;
///
/// assert_eq!(
///     writer.finish()?,
///     r#"<text:span text:style-name="Bold">a &amp; b</text:span>"#
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct XmlWriter {
    output: String,
    /// Names of currently open elements, innermost last
    open_elements: SmallVec<[String; 8]>,
    /// The innermost start tag has not been sealed with `>` yet
    tag_open: bool,
}

impl XmlWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish writing and return the rendered XML.
    ///
    /// Fails if any element is still open.
    pub fn finish(self) -> Result<String> {
        if let Some(name) = self.open_elements.last() {
            return Err(Error::InvalidFormat(format!(
                "Unclosed element: {}",
                name
            )));
        }
        Ok(self.output)
    }

    /// The output rendered so far, possibly mid-element
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Seal the pending start tag, if one is open
    fn seal_start_tag(&mut self) {
        if self.tag_open {
            self.output.push('>');
            self.tag_open = false;
        }
    }
}

impl XmlSink for XmlWriter {
    fn open_element(&mut self, name: &str) -> Result<()> {
        self.seal_start_tag();
        self.output.push('<');
        self.output.push_str(name);
        self.open_elements.push(name.to_string());
        self.tag_open = true;
        Ok(())
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.tag_open {
            return Err(Error::InvalidFormat(format!(
                "Attribute {} written outside of a start tag",
                name
            )));
        }
        self.output.push(' ');
        self.output.push_str(name);
        self.output.push_str("=\"");
        escape_xml_into(value, &mut self.output);
        self.output.push('"');
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.seal_start_tag();
        escape_xml_into(text, &mut self.output);
        Ok(())
    }

    fn close_element(&mut self) -> Result<()> {
        let name = self
            .open_elements
            .pop()
            .ok_or_else(|| Error::InvalidFormat("No element open to close".to_string()))?;
        if self.tag_open {
            // Nothing was written since the open: render self-closing
            self.output.push_str(" />");
            self.tag_open = false;
        } else {
            self.output.push_str("</");
            self.output.push_str(&name);
            self.output.push('>');
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements() {
        let mut writer = XmlWriter::new();
        writer.open_element("text:p").unwrap();
        writer.write_attribute("text:style-name", "Normal").unwrap();
        writer.open_element("text:span").unwrap();
        writer.write_text("hello").unwrap();
        writer.close_element().unwrap();
        writer.close_element().unwrap();

        assert_eq!(
            writer.finish().unwrap(),
            r#"<text:p text:style-name="Normal"><text:span>hello</text:span></text:p>"#
        );
    }

    #[test]
    fn empty_element_renders_self_closing() {
        let mut writer = XmlWriter::new();
        writer.write_empty_element("text:tab").unwrap();
        assert_eq!(writer.finish().unwrap(), "<text:tab />");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut writer = XmlWriter::new();
        writer.open_element("text:s").unwrap();
        writer.write_attribute("text:c", "\"2\" & <3>").unwrap();
        writer.close_element().unwrap();

        assert_eq!(
            writer.finish().unwrap(),
            r#"<text:s text:c="&quot;2&quot; &amp; &lt;3&gt;" />"#
        );
    }

    #[test]
    fn text_outside_any_element() {
        let mut writer = XmlWriter::new();
        writer.write_text("bare fragment").unwrap();
        assert_eq!(writer.finish().unwrap(), "bare fragment");
    }

    #[test]
    fn attribute_after_content_is_rejected() {
        let mut writer = XmlWriter::new();
        writer.open_element("text:p").unwrap();
        writer.write_text("x").unwrap();
        let err = writer.write_attribute("text:style-name", "Normal");
        assert!(matches!(err, Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn close_without_open_is_rejected() {
        let mut writer = XmlWriter::new();
        assert!(matches!(
            writer.close_element(),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn finish_rejects_unclosed_elements() {
        let mut writer = XmlWriter::new();
        writer.open_element("text:p").unwrap();
        assert!(matches!(writer.finish(), Err(Error::InvalidFormat(_))));
    }
}
