//! Streaming XML output boundary.
//!
//! The encoder writes through the [`XmlSink`] trait rather than building a
//! document tree. Implementations own escaping of text content and attribute
//! values; callers always pass raw strings. Any error returned by a sink
//! propagates to the encoder's caller unchanged.

use crate::common::Result;

/// Abstract streaming XML sink.
///
/// The call sequence must keep elements properly nested: attributes are only
/// valid on the most recently opened element while its start tag is still
/// open, and every `open_element` needs a matching `close_element`.
pub trait XmlSink {
    /// Open an element with the given name
    fn open_element(&mut self, name: &str) -> Result<()>;

    /// Write an attribute on the currently open start tag
    fn write_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Write an attribute only when `condition` holds
    fn write_attribute_if(&mut self, condition: bool, name: &str, value: &str) -> Result<()> {
        if condition {
            self.write_attribute(name, value)?;
        }
        Ok(())
    }

    /// Write text content inside the current element
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Close the most recently opened element
    fn close_element(&mut self) -> Result<()>;

    /// Write an element with no attributes and no content
    fn write_empty_element(&mut self, name: &str) -> Result<()> {
        self.open_element(name)?;
        self.close_element()
    }
}

/// One step of an emission sequence.
///
/// Conditional attribute writes resolve when the sequence is recorded, so the
/// recorded form contains only unconditional instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionInstruction {
    /// Open an element with the given name
    OpenElement(String),
    /// Write an attribute on the innermost open element
    WriteAttribute {
        /// Attribute name
        name: String,
        /// Raw (unescaped) attribute value
        value: String,
    },
    /// Write raw (unescaped) text content
    WriteText(String),
    /// Close the innermost open element
    CloseElement,
}

/// Sink that records the emission sequence instead of rendering it.
///
/// Useful for asserting on encoder output shape and for deferred rendering:
/// a recorded sequence can be replayed onto any other sink.
///
/// # Examples
///
/// ```
/// use longan::odt::{EmissionInstruction, InstructionRecorder, TextRun, TextRunEncoder};
///
/// # fn main() -> longan::Result<()> {
/// let run = TextRun::new("hi");
/// let mut recorder = InstructionRecorder::new();
/// TextRunEncoder::encode(&run, &mut recorder)?;
///
/// assert_eq!(
///     recorder.instructions()[0],
///     EmissionInstruction::OpenElement("text:p".to_string())
/// );
/// assert!(recorder.is_balanced());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InstructionRecorder {
    instructions: Vec<EmissionInstruction>,
}

impl InstructionRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded instructions, in emission order
    pub fn instructions(&self) -> &[EmissionInstruction] {
        &self.instructions
    }

    /// Consume the recorder, returning the recorded instructions
    pub fn into_instructions(self) -> Vec<EmissionInstruction> {
        self.instructions
    }

    /// Whether every `OpenElement` has a matching, properly nested
    /// `CloseElement`
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for instruction in &self.instructions {
            match instruction {
                EmissionInstruction::OpenElement(_) => depth += 1,
                EmissionInstruction::CloseElement => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                },
                _ => {},
            }
        }
        depth == 0
    }

    /// Replay the recorded sequence onto another sink
    pub fn replay<S: XmlSink>(&self, sink: &mut S) -> Result<()> {
        for instruction in &self.instructions {
            match instruction {
                EmissionInstruction::OpenElement(name) => sink.open_element(name)?,
                EmissionInstruction::WriteAttribute { name, value } => {
                    sink.write_attribute(name, value)?
                },
                EmissionInstruction::WriteText(text) => sink.write_text(text)?,
                EmissionInstruction::CloseElement => sink.close_element()?,
            }
        }
        Ok(())
    }
}

impl XmlSink for InstructionRecorder {
    fn open_element(&mut self, name: &str) -> Result<()> {
        self.instructions
            .push(EmissionInstruction::OpenElement(name.to_string()));
        Ok(())
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.instructions.push(EmissionInstruction::WriteAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.instructions
            .push(EmissionInstruction::WriteText(text.to_string()));
        Ok(())
    }

    fn close_element(&mut self) -> Result<()> {
        self.instructions.push(EmissionInstruction::CloseElement);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_attribute_resolves_at_record_time() {
        let mut recorder = InstructionRecorder::new();
        recorder.open_element("text:s").unwrap();
        recorder.write_attribute_if(false, "text:c", "1").unwrap();
        recorder.write_attribute_if(true, "text:c", "3").unwrap();
        recorder.close_element().unwrap();

        assert_eq!(
            recorder.instructions(),
            &[
                EmissionInstruction::OpenElement("text:s".to_string()),
                EmissionInstruction::WriteAttribute {
                    name: "text:c".to_string(),
                    value: "3".to_string(),
                },
                EmissionInstruction::CloseElement,
            ]
        );
    }

    #[test]
    fn balance_detection() {
        let mut recorder = InstructionRecorder::new();
        recorder.open_element("text:p").unwrap();
        assert!(!recorder.is_balanced());
        recorder.close_element().unwrap();
        assert!(recorder.is_balanced());

        let mut underflow = InstructionRecorder::new();
        underflow.close_element().unwrap();
        assert!(!underflow.is_balanced());
    }

    #[test]
    fn replay_reproduces_sequence() {
        let mut recorder = InstructionRecorder::new();
        recorder.open_element("text:span").unwrap();
        recorder.write_attribute("text:style-name", "Bold").unwrap();
        recorder.write_text("x").unwrap();
        recorder.close_element().unwrap();

        let mut copy = InstructionRecorder::new();
        recorder.replay(&mut copy).unwrap();
        assert_eq!(recorder.instructions(), copy.instructions());
    }
}
