//! XML serialization.
//!
//! This module serializes a [`Node`](crate::tree::Node) subtree back to XML
//! text: per-kind rendering, character escaping, and a whitespace policy that
//! pretty-prints element-only content while leaving mixed content untouched.

pub mod xml;

pub use xml::{
    escape, serialize, serialize_document, serialize_into, write_escaped, DEFAULT_INDENT_WIDTH,
    XML_DECLARATION,
};
