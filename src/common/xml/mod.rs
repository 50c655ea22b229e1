//! XML utilities shared by the streaming writer and the content decoder.

mod escape;

pub use escape::{escape_xml, escape_xml_into, unescape_xml};
