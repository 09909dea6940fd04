//! Owned markup fragment tree.
//!
//! This module implements the core tree representation as a plain owned value
//! structure. A [`Node`] couples a [`NodeKind`] payload with an opaque
//! per-node client tag; an element owns its children directly in a
//! `Vec<Node>`, in append order. Drop the root and the whole subtree is
//! freed.
//!
//! # Architecture
//!
//! There are no parent, sibling, or document back-links: the tree is built
//! bottom-up and consumed top-down, children are moved into their parent by
//! value, and a node can appear in at most one place. That makes cycles
//! unconstructible and keeps ownership single-owner throughout — no arena,
//! no reference counting, no interior mutability.
//!
//! Kind-restricted accessors (element-only or leaf-only) treat a call on the
//! wrong kind as a programmer error and panic rather than returning a
//! default; see the `# Panics` section on each method. Structure queries
//! that are meaningful for every kind ([`Node::len`], [`Node::kind`],
//! [`Node::client_tag`]) are total.

mod builder;
mod node;

pub use builder::ElementBuilder;
pub use node::{Attributes, NodeKind};

use std::ops::Index;

/// A single node in a markup fragment tree.
///
/// Create nodes with the kind-specific constructors ([`Node::element`],
/// [`Node::text`], [`Node::cdata`], [`Node::entity`], [`Node::comment`]),
/// grow elements with [`Node::append_child`], and serialize with
/// [`crate::serial::serialize`].
///
/// # Examples
///
/// ```
/// use xmlgrove::Node;
///
/// let mut list = Node::element("ul");
/// list.append_child(Node::builder("li").text("first").build());
/// list.append_child(Node::builder("li").text("second").build());
///
/// assert_eq!(list.tag(), "ul");
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[0].text_content(), "first");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What kind of node this is and its payload. Private: a node's kind is
    /// immutable for its lifetime.
    kind: NodeKind,
    /// Caller-reserved slot; see [`Node::client_tag`].
    client_tag: i64,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            client_tag: 0,
        }
    }

    // --- Constructors ---

    /// Creates an element node with the given tag name, no children, and no
    /// attribute mapping.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Element {
            tag: tag.into(),
            children: Vec::new(),
            attributes: None,
        })
    }

    /// Creates a text node holding `content`.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            content: content.into(),
        })
    }

    /// Creates a CDATA section node holding `content`.
    #[must_use]
    pub fn cdata(content: impl Into<String>) -> Self {
        Self::new(NodeKind::CData {
            content: content.into(),
        })
    }

    /// Creates an entity reference node for the entity named `content`
    /// (without `&` and `;`).
    #[must_use]
    pub fn entity(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Entity {
            content: content.into(),
        })
    }

    /// Creates a comment node holding `content`.
    ///
    /// The content is not scanned for embedded `-->` terminators; keeping
    /// comments well-formed is the caller's responsibility.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Comment {
            content: content.into(),
        })
    }

    /// Builds an element wholesale from its parts: tag name, children (order
    /// preserved), and an optional attribute mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlgrove::{Attributes, Node};
    ///
    /// let mut attrs = Attributes::new();
    /// attrs.insert("id".to_string(), "intro".to_string());
    ///
    /// let para = Node::tree("p", vec![Node::text("hello")], Some(attrs));
    /// assert_eq!(para.len(), 1);
    /// assert_eq!(para.attribute("id"), Some("intro"));
    /// ```
    #[must_use]
    pub fn tree(tag: impl Into<String>, children: Vec<Node>, attributes: Option<Attributes>) -> Self {
        Self::new(NodeKind::Element {
            tag: tag.into(),
            children,
            attributes,
        })
    }

    /// Returns a fluent [`ElementBuilder`] for an element with the given tag
    /// name.
    #[must_use]
    pub fn builder(tag: impl Into<String>) -> ElementBuilder {
        ElementBuilder::new(tag)
    }

    // --- Total accessors ---

    /// Returns this node's kind and payload.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the client tag, an opaque integer reserved for callers
    /// layering their own metadata on nodes (e.g., a parser marking
    /// provenance). This crate never reads or interprets it; it defaults
    /// to `0`.
    #[must_use]
    pub fn client_tag(&self) -> i64 {
        self.client_tag
    }

    /// Sets the client tag. See [`Node::client_tag`].
    pub fn set_client_tag(&mut self, value: i64) {
        self.client_tag = value;
    }

    /// Returns the number of children: `0` for every leaf kind, the child
    /// count for elements. Total — never panics.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Element { children, .. } => children.len(),
            _ => 0,
        }
    }

    /// Returns `true` if this node has no children. Leaf kinds are always
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the concatenated content of all `Text` and `CData` nodes in
    /// this node's subtree (including the node itself), in document order.
    ///
    /// Comments and entity references contribute nothing: comments are not
    /// character data, and an entity's expansion is unknown here.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        match &self.kind {
            NodeKind::Text { content } | NodeKind::CData { content } => {
                buf.push_str(content);
            }
            NodeKind::Element { children, .. } => {
                for child in children {
                    child.collect_text(buf);
                }
            }
            _ => {}
        }
    }

    /// Returns a depth-first pre-order iterator over all descendants of this
    /// node (the node itself is not yielded). Empty for leaf kinds.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let NodeKind::Element { children, .. } = &self.kind {
            stack.extend(children.iter().rev());
        }
        Descendants { stack }
    }

    // --- Element accessors ---

    /// Returns the tag name of an element.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    #[must_use]
    pub fn tag(&self) -> &str {
        match &self.kind {
            NodeKind::Element { tag, .. } => tag,
            other => panic!("tag() requires an element node, got {}", other.name()),
        }
    }

    /// Appends `child` to the end of an element's child sequence.
    ///
    /// No cycle check is performed: children are moved in by value, so a
    /// node cannot be its own ancestor in the first place.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    pub fn append_child(&mut self, child: Node) {
        match &mut self.kind {
            NodeKind::Element { children, .. } => children.push(child),
            other => panic!("append_child() requires an element node, got {}", other.name()),
        }
    }

    /// Returns an element's children as a slice, in append order. The slice
    /// indexes and iterates; iteration is restartable.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Element { children, .. } => children,
            other => panic!("children() requires an element node, got {}", other.name()),
        }
    }

    /// Returns an element's attribute mapping, or `None` if no mapping has
    /// been attached.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    #[must_use]
    pub fn attributes(&self) -> Option<&Attributes> {
        match &self.kind {
            NodeKind::Element { attributes, .. } => attributes.as_ref(),
            other => panic!("attributes() requires an element node, got {}", other.name()),
        }
    }

    /// Replaces an element's attribute mapping. Passing `None` detaches the
    /// mapping entirely.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    pub fn set_attributes(&mut self, attributes: Option<Attributes>) {
        match &mut self.kind {
            NodeKind::Element {
                attributes: slot, ..
            } => *slot = attributes,
            other => panic!("set_attributes() requires an element node, got {}", other.name()),
        }
    }

    /// Returns the value of the attribute named `name`, or `None` if the
    /// element has no mapping or the mapping has no such key.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }

    /// Sets the attribute `name` to `value`, attaching a fresh mapping if
    /// the element has none. An existing key keeps its position in the
    /// iteration order; only its value is replaced.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        match &mut self.kind {
            NodeKind::Element { attributes, .. } => {
                attributes
                    .get_or_insert_with(Attributes::new)
                    .insert(name.into(), value.into());
            }
            other => panic!("set_attribute() requires an element node, got {}", other.name()),
        }
    }

    /// Returns the number of attributes on an element: `0` when no mapping
    /// is attached or the mapping is empty.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an element.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        match &self.kind {
            NodeKind::Element { attributes, .. } => {
                attributes.as_ref().map_or(0, Attributes::len)
            }
            other => panic!("attribute_count() requires an element node, got {}", other.name()),
        }
    }

    // --- Leaf accessor ---

    /// Returns the content of a leaf node (text, CDATA, entity, or comment),
    /// exactly as supplied at construction.
    ///
    /// # Panics
    ///
    /// Panics if this node is an element. Use [`Node::text_content`] for the
    /// concatenated character data of an element's subtree.
    #[must_use]
    pub fn content(&self) -> &str {
        match &self.kind {
            NodeKind::Text { content }
            | NodeKind::CData { content }
            | NodeKind::Entity { content }
            | NodeKind::Comment { content } => content,
            NodeKind::Element { .. } => panic!("content() requires a leaf node, got element"),
        }
    }
}

/// Indexed child access: `node[i]` is the `i`-th child of an element.
///
/// Panics if the node is not an element or if `i` is out of range.
impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.children()[index]
    }
}

// --- Iterators ---

/// Depth-first pre-order iterator over the descendants of a node.
///
/// Uses an explicit stack, so walking a deeply nested tree does not recurse.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let NodeKind::Element { children, .. } = &node.kind {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
