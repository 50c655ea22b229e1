use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

/// Replacement entities, in pattern order of [`XML_ESCAPER`].
const ESCAPED: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ESCAPED)
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// All five standard entities are escaped, so the result is safe for both
/// text content and double-quoted attribute values.
///
/// # Examples
///
/// ```
/// use longan::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("style=\"x\""), "style=&quot;x&quot;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &ESCAPED)
}

/// Escape XML special characters, appending to an existing buffer.
///
/// Used by the streaming writer to avoid an intermediate allocation per
/// text or attribute write.
pub fn escape_xml_into(s: &str, output: &mut String) {
    XML_ESCAPER.replace_all_with(s, output, |m, _, dst| {
        dst.push_str(ESCAPED[m.pattern().as_usize()]);
        true
    });
}

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use longan::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_into_appends() {
        let mut buf = String::from("attr=\"");
        escape_xml_into("a < \"b\"", &mut buf);
        assert_eq!(buf, "attr=\"a &lt; &quot;b&quot;");
    }

    #[test]
    fn round_trip() {
        let original = "<span a=\"1\">it's &amp;</span>";
        assert_eq!(unescape_xml(&escape_xml(original)), original);
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_xml("plain text"), "plain text");
        assert_eq!(unescape_xml("plain text"), "plain text");
    }
}
