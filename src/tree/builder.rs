//! Fluent element construction.
//!
//! [`ElementBuilder`] is convenience sugar over [`Node::tree`]: it collects a
//! tag name, attributes, and children through a method chain and hands them
//! to the bulk constructor in one call. It adds no semantics of its own.

use super::{Attributes, Node};

/// A fluent builder for element nodes.
///
/// Obtained from [`Node::builder`]. Attributes are recorded in the order the
/// `attr` calls are made; children in the order the `child`/`children`/`text`
/// calls are made.
///
/// # Examples
///
/// ```
/// use xmlgrove::Node;
///
/// let link = Node::builder("a")
///     .attr("href", "http://example.com")
///     .text("example")
///     .build();
///
/// assert_eq!(xmlgrove::serialize(&link), "<a href=\"http://example.com\">example</a>");
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: String,
    children: Vec<Node>,
    attributes: Option<Attributes>,
}

impl ElementBuilder {
    pub(super) fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            attributes: None,
        }
    }

    /// Sets the attribute `name` to `value`. A repeated name replaces the
    /// earlier value and keeps its position in the iteration order.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value.into());
        self
    }

    /// Appends `child` to the element's child sequence.
    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every node of `children`, in iteration order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a text child holding `content`. Shorthand for
    /// `.child(Node::text(content))`.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Consumes the builder and produces the element node.
    #[must_use]
    pub fn build(self) -> Node {
        Node::tree(self.tag, self.children, self.attributes)
    }
}
