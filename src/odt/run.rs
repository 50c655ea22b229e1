//! Text run value types.
//!
//! A [`TextRun`] is constructed by a document-model collaborator, passed once
//! to the encoder, and discarded after emission. The encoder never mutates a
//! run and holds no state across calls.

/// Paragraph-level style reference.
///
/// The document model this crate serves allows paragraph styles to be either
/// a plain style name or a rich style payload. A styling collaborator must
/// flatten the rich form into a registered named style before encoding;
/// [`ParagraphStyle::Unresolved`] represents a payload that has not been
/// flattened yet, and encoding a run carrying one fails with
/// [`Error::UnresolvedStyle`](crate::Error::UnresolvedStyle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Resolved style name, written verbatim to `text:style-name`
    Named(String),
    /// Rich style payload awaiting resolution, identified for diagnostics
    Unresolved(String),
}

impl ParagraphStyle {
    /// Create a resolved named style
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Type of tracked change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Text insertion
    Insertion,
    /// Text deletion
    Deletion,
}

/// Metadata marking a run as part of a tracked edit.
///
/// Immutable once constructed; the id is written verbatim as the
/// `text:change-id` of the emitted change marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAnnotation {
    id: String,
    kind: ChangeKind,
}

impl ChangeAnnotation {
    /// Create a change annotation
    ///
    /// # Examples
    ///
    /// ```
    /// use longan::odt::{ChangeAnnotation, ChangeKind};
    ///
    /// let change = ChangeAnnotation::new("ct-42", ChangeKind::Deletion);
    /// assert_eq!(change.id(), "ct-42");
    /// assert_eq!(change.kind(), ChangeKind::Deletion);
    /// ```
    pub fn new(id: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// The change-tracking region id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this marks an insertion or a deletion
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }
}

/// A plain text run plus its styling and tracking flags.
///
/// # Examples
///
/// ```
/// use longan::odt::{ParagraphStyle, TextRun};
///
/// let mut run = TextRun::new("emphasized");
/// run.set_style_name("Bold");
/// run.set_paragraph_style(ParagraphStyle::named("Quote"));
/// assert_eq!(run.style_name(), Some("Bold"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextRun {
    content: String,
    style_name: Option<String>,
    paragraph_style: Option<ParagraphStyle>,
    omit_paragraph_wrapper: bool,
    change: Option<ChangeAnnotation>,
}

impl TextRun {
    /// Create a run with the given literal text content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// The literal text content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the character-level style name, emitted on a nested `text:span`
    pub fn set_style_name(&mut self, name: &str) {
        self.style_name = Some(name.to_string());
    }

    /// Get the character-level style name
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    /// Set the paragraph-level style
    pub fn set_paragraph_style(&mut self, style: ParagraphStyle) {
        self.paragraph_style = Some(style);
    }

    /// Get the paragraph-level style
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        self.paragraph_style.as_ref()
    }

    /// Suppress the surrounding `text:p` element.
    ///
    /// Used when the run is embedded inside an element that already provides
    /// the paragraph context (a table cell, a footnote body). No
    /// paragraph-level style attribute is emitted in this mode, since there
    /// is no element to attach it to.
    pub fn set_omit_paragraph_wrapper(&mut self, omit: bool) {
        self.omit_paragraph_wrapper = omit;
    }

    /// Whether the surrounding `text:p` element is suppressed
    pub fn omits_paragraph_wrapper(&self) -> bool {
        self.omit_paragraph_wrapper
    }

    /// Attach a tracked-change annotation
    pub fn set_change(&mut self, change: ChangeAnnotation) {
        self.change = Some(change);
    }

    /// Get the tracked-change annotation
    pub fn change(&self) -> Option<&ChangeAnnotation> {
        self.change.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let run = TextRun::new("hello");
        assert_eq!(run.content(), "hello");
        assert_eq!(run.style_name(), None);
        assert_eq!(run.paragraph_style(), None);
        assert!(!run.omits_paragraph_wrapper());
        assert!(run.change().is_none());
    }

    #[test]
    fn mutators() {
        let mut run = TextRun::new("x");
        run.set_style_name("Emphasis");
        run.set_paragraph_style(ParagraphStyle::named("Heading_20_1"));
        run.set_omit_paragraph_wrapper(true);
        run.set_change(ChangeAnnotation::new("c1", ChangeKind::Insertion));

        assert_eq!(run.style_name(), Some("Emphasis"));
        assert_eq!(
            run.paragraph_style(),
            Some(&ParagraphStyle::Named("Heading_20_1".to_string()))
        );
        assert!(run.omits_paragraph_wrapper());
        assert_eq!(run.change().unwrap().kind(), ChangeKind::Insertion);
    }
}
