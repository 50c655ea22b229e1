//! ODT vocabulary constants.
//!
//! Element and attribute names written verbatim for wire compatibility with
//! OpenDocument Text consumers.
//!
//! # References
//!
//! - ODF Specification: §5.1 (text:p), §6.1.3 (text:s, text:tab),
//!   §5.5.7 (text:change marks)

// ============================================================================
// CONTENT ELEMENTS
// ============================================================================

/// Paragraph element
pub const TEXT_P: &str = "text:p";

/// Styled span element nested inside a paragraph
pub const TEXT_SPAN: &str = "text:span";

/// Whitespace-count marker, representing a run of literal spaces
pub const TEXT_S: &str = "text:s";

/// Tab marker element
pub const TEXT_TAB: &str = "text:tab";

/// Line-break element
pub const TEXT_LINE_BREAK: &str = "text:line-break";

// ============================================================================
// CHANGE-TRACKING ELEMENTS
// ============================================================================

/// Self-closing marker standing in for tracked deleted content
pub const TEXT_CHANGE: &str = "text:change";

/// Start marker of a tracked insertion
pub const TEXT_CHANGE_START: &str = "text:change-start";

/// End marker of a tracked insertion
pub const TEXT_CHANGE_END: &str = "text:change-end";

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Attribute referencing a change-tracking region by id
pub const TEXT_CHANGE_ID: &str = "text:change-id";

/// Attribute naming the style applied to a paragraph or span
pub const TEXT_STYLE_NAME: &str = "text:style-name";

/// Count attribute on the whitespace-count marker; omitted for a single space
pub const TEXT_C: &str = "text:c";

// ============================================================================
// STYLES
// ============================================================================

/// Style written to paragraphs that carry no explicit paragraph style
pub const DEFAULT_PARAGRAPH_STYLE: &str = "Normal";
