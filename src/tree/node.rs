//! Node kind definitions.
//!
//! The `NodeKind` enum represents all node kinds in a markup fragment tree.
//! Each variant carries the kind-specific payload (e.g., element tag name,
//! children, and attributes, or the text content of a leaf). The common
//! per-node bookkeeping (the client tag) lives in [`Node`], not here.
//!
//! [`Node`]: super::Node

use indexmap::IndexMap;

use super::Node;

/// The attribute mapping attached to an element.
///
/// Keys are unique; iteration order is insertion order, which is
/// deterministic and stable across repeated iterations of the same map.
/// The serializer emits attributes in this iteration order.
pub type Attributes = IndexMap<String, String>;

/// The kind of a node and its associated data.
///
/// Only [`Element`](NodeKind::Element) carries children and attributes; the
/// four remaining kinds are leaves holding a single content string. A node's
/// kind is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An element node, e.g., `<item id="4">...</item>`.
    Element {
        /// The element's tag name, emitted verbatim (no validation).
        tag: String,
        /// Child nodes in append order. Order is semantically significant
        /// and is preserved exactly in serialized output.
        children: Vec<Node>,
        /// The attribute mapping, if one has been attached. Most elements
        /// carry no attributes, so the mapping is allocated lazily.
        attributes: Option<Attributes>,
    },

    /// A text node containing character data. Escaped on output.
    Text {
        /// The text content.
        content: String,
    },

    /// A CDATA section, e.g., `<![CDATA[...]]>`. Emitted verbatim.
    CData {
        /// The CDATA content (no escaping applied on output).
        content: String,
    },

    /// An entity reference, e.g., `&amp;` for content `"amp"`.
    Entity {
        /// The entity name (without the `&` and `;` delimiters). Already a
        /// symbolic reference, so it is emitted verbatim.
        content: String,
    },

    /// A comment node, e.g., `<!-- ... -->`.
    Comment {
        /// The comment text (without the `<!--` and `-->` delimiters).
        content: String,
    },
}

impl NodeKind {
    /// Returns a short lowercase name for this kind, for diagnostics and
    /// panic messages: `"element"`, `"text"`, `"cdata"`, `"entity"`, or
    /// `"comment"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Element { .. } => "element",
            Self::Text { .. } => "text",
            Self::CData { .. } => "cdata",
            Self::Entity { .. } => "entity",
            Self::Comment { .. } => "comment",
        }
    }
}
