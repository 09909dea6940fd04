//! # xmlgrove
//!
//! An in-memory XML fragment tree with deterministic serialization. Build
//! trees of elements, text, comments, CDATA sections, and entity references,
//! then emit them as textual markup — no parsing, no namespaces, no schema
//! validation, no DOM.
//!
//! The serializer only inserts pretty-print whitespace where it cannot change
//! the document's meaning: elements whose children include a text run or
//! entity reference (mixed content) are emitted with no whitespace between
//! siblings.
//!
//! ## Quick Start
//!
//! ```
//! use xmlgrove::{serialize, Node};
//!
//! let list = Node::builder("ul")
//!     .attr("class", "menu")
//!     .child(Node::builder("li").text("one").build())
//!     .child(Node::builder("li").text("two").build())
//!     .build();
//!
//! assert_eq!(
//!     serialize(&list),
//!     "<ul class=\"menu\">\n  <li>one</li>\n  <li>two</li>\n</ul>"
//! );
//! ```

pub mod serial;
pub mod tree;

// Re-export primary types at the crate root for convenience.
pub use serial::{escape, serialize, serialize_into, XML_DECLARATION};
pub use tree::{Attributes, ElementBuilder, Node, NodeKind};
