//! XML serializer.
//!
//! Serializes a [`Node`] subtree into its textual markup form, appending into
//! a caller-supplied buffer so repeated calls can accumulate a larger
//! document. Output bytes are part of the contract: the same tree always
//! serializes to the same string (given the attribute mapping's stable
//! iteration order), and whitespace is only ever introduced where it cannot
//! change the document's meaning.

use std::fmt;

use crate::tree::{Node, NodeKind};

/// The XML declaration for callers assembling a complete document.
///
/// [`serialize`] never emits this on its own, so fragments compose without an
/// implied declaration; prepend it explicitly or use [`serialize_document`].
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n";

/// Spaces added per nesting level when pretty-printing, unless the caller
/// passes a different width to [`serialize_into`].
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Serializes a node subtree to a fresh string, starting at indent level 0
/// with [`DEFAULT_INDENT_WIDTH`].
///
/// # Examples
///
/// ```
/// use xmlgrove::{serialize, Node};
///
/// let mut para = Node::element("p");
/// para.append_child(Node::text("hi"));
/// assert_eq!(serialize(&para), "<p>hi</p>");
/// ```
#[must_use]
pub fn serialize(node: &Node) -> String {
    let mut out = String::new();
    serialize_into(Some(node), &mut out, 0, DEFAULT_INDENT_WIDTH);
    out
}

/// Serializes a complete document: the [`XML_DECLARATION`], the root
/// subtree, and a trailing newline.
#[must_use]
pub fn serialize_document(root: &Node) -> String {
    let mut out = String::from(XML_DECLARATION);
    serialize_into(Some(root), &mut out, 0, DEFAULT_INDENT_WIDTH);
    out.push('\n');
    out
}

/// Appends the textual form of `node` to `out`.
///
/// `indent` is the current left margin in spaces; `indent_width` is added to
/// it per nesting level. Passing `None` appends nothing — an absent subtree
/// is tolerated so optional fragments compose without caller-side checks.
///
/// Rendering per kind:
///
/// - **Text**: escaped content, no surrounding markers.
/// - **Comment**: `<!-- `, escaped content, ` -->`.
/// - **CData**: `<![CDATA[`, raw content, `]]>`.
/// - **Entity**: `&`, raw content, `;`.
/// - **Element**: open tag with attributes in mapping iteration order;
///   `<tag />` when childless. Otherwise the child policy is chosen once per
///   element: a single child, or several children where any is text-like
///   (mixed content), renders with no inserted whitespace, since whitespace
///   next to a text run would change the document's meaning
///   (`a<b>b</b>` ≠ `a <b>b</b>`). Only when every child is an element,
///   comment, or CDATA section does each child go on its own line at
///   `indent + indent_width`, with the closing tag aligned under the
///   opening one.
///
/// Traversal is plain recursive descent; recursion depth equals tree depth.
pub fn serialize_into(node: Option<&Node>, out: &mut String, indent: usize, indent_width: usize) {
    let Some(node) = node else { return };
    match node.kind() {
        NodeKind::Text { content } => write_escaped(out, content),
        NodeKind::Comment { content } => {
            out.push_str("<!-- ");
            write_escaped(out, content);
            out.push_str(" -->");
        }
        NodeKind::CData { content } => {
            out.push_str("<![CDATA[");
            out.push_str(content);
            out.push_str("]]>");
        }
        NodeKind::Entity { content } => {
            out.push('&');
            out.push_str(content);
            out.push(';');
        }
        NodeKind::Element {
            tag,
            children,
            attributes,
        } => {
            out.push('<');
            out.push_str(tag);
            if let Some(attributes) = attributes {
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    write_escaped(out, value);
                    out.push('"');
                }
            }

            if children.is_empty() {
                out.push_str(" />");
                return;
            }
            out.push('>');

            let inner = indent + indent_width;
            if children.len() == 1 || is_mixed_content(children) {
                // No whitespace between children.
                for child in children {
                    serialize_into(Some(child), out, inner, indent_width);
                }
            } else {
                for child in children {
                    out.push('\n');
                    push_spaces(out, inner);
                    serialize_into(Some(child), out, inner, indent_width);
                }
                out.push('\n');
                push_spaces(out, indent);
            }

            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

/// Returns `true` if any child is a text run or entity reference, in which
/// case inserting pretty-print whitespace between siblings would alter the
/// element's character data. Deliberately counts any text-like child, even
/// when every child is text-like.
fn is_mixed_content(children: &[Node]) -> bool {
    children
        .iter()
        .any(|c| matches!(c.kind(), NodeKind::Text { .. } | NodeKind::Entity { .. }))
}

fn push_spaces(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}

/// Appends `text` to `out` with markup-significant characters replaced by
/// named character references: `<` → `&lt;`, `>` → `&gt;`, `&` → `&amp;`,
/// `"` → `&quot;`. Every other character passes through unchanged.
///
/// Applied to text content and attribute values; CDATA and entity payloads
/// are emitted verbatim instead.
pub fn write_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Returns `text` with markup-significant characters escaped. See
/// [`write_escaped`].
///
/// # Examples
///
/// ```
/// assert_eq!(xmlgrove::escape("x < y"), "x &lt; y");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_escaped(&mut out, text);
    out
}

/// `{}` formatting serializes the subtree with the default indent settings.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Attributes;

    #[test]
    fn test_escape_substitutions() {
        assert_eq!(escape("<a>&\"b\""), "&lt;a&gt;&amp;&quot;b&quot;");
    }

    #[test]
    fn test_escape_passes_other_characters_through() {
        assert_eq!(
            escape("plain text, 'quotes', héllo"),
            "plain text, 'quotes', héllo"
        );
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_write_escaped_appends() {
        let mut out = String::from("x=");
        write_escaped(&mut out, "a&b");
        assert_eq!(out, "x=a&amp;b");
    }

    #[test]
    fn test_none_node_appends_nothing() {
        let mut out = String::from("before");
        serialize_into(None, &mut out, 0, 2);
        assert_eq!(out, "before");
    }

    #[test]
    fn test_empty_element_self_closes_with_space() {
        assert_eq!(serialize(&Node::element("br")), "<br />");
    }

    #[test]
    fn test_empty_element_with_attributes_self_closes() {
        let img = Node::builder("img").attr("src", "x.png").build();
        assert_eq!(serialize(&img), "<img src=\"x.png\" />");
    }

    #[test]
    fn test_single_text_child_has_no_whitespace() {
        let para = Node::tree("p", vec![Node::text("hi")], None);
        assert_eq!(serialize(&para), "<p>hi</p>");
    }

    #[test]
    fn test_single_element_child_has_no_whitespace() {
        let outer = Node::tree("outer", vec![Node::element("inner")], None);
        assert_eq!(serialize(&outer), "<outer><inner /></outer>");
    }

    #[test]
    fn test_text_content_is_escaped() {
        let para = Node::tree("p", vec![Node::text("a < b & c")], None);
        assert_eq!(serialize(&para), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_mixed_content_suppresses_whitespace() {
        let tree = Node::tree(
            "a",
            vec![Node::text("x"), Node::tree("b", vec![Node::text("y")], None)],
            None,
        );
        assert_eq!(serialize(&tree), "<a>x<b>y</b></a>");
    }

    #[test]
    fn test_entity_child_counts_as_mixed_content() {
        let tree = Node::tree(
            "p",
            vec![
                Node::entity("amp"),
                Node::tree("b", vec![Node::text("x")], None),
                Node::element("br"),
            ],
            None,
        );
        assert_eq!(serialize(&tree), "<p>&amp;<b>x</b><br /></p>");
    }

    #[test]
    fn test_all_text_children_also_suppress_whitespace() {
        // Two adjacent text runs: still treated as mixed content.
        let para = Node::tree("p", vec![Node::text("a"), Node::text("b")], None);
        assert_eq!(serialize(&para), "<p>ab</p>");
    }

    #[test]
    fn test_element_only_children_are_pretty_printed() {
        let list = Node::tree(
            "ul",
            vec![
                Node::tree("li", vec![Node::text("first")], None),
                Node::tree("li", vec![Node::text("second")], None),
            ],
            None,
        );
        assert_eq!(
            serialize(&list),
            "<ul>\n  <li>first</li>\n  <li>second</li>\n</ul>"
        );
    }

    #[test]
    fn test_nested_pretty_printing_accumulates_indent() {
        let tree = Node::tree(
            "a",
            vec![
                Node::tree("b", vec![Node::element("c"), Node::element("d")], None),
                Node::element("e"),
            ],
            None,
        );
        assert_eq!(
            serialize(&tree),
            "<a>\n  <b>\n    <c />\n    <d />\n  </b>\n  <e />\n</a>"
        );
    }

    #[test]
    fn test_comment_and_cdata_children_are_pretty_printed() {
        let tree = Node::tree(
            "root",
            vec![Node::comment("note"), Node::cdata("raw"), Node::element("x")],
            None,
        );
        assert_eq!(
            serialize(&tree),
            "<root>\n  <!-- note -->\n  <![CDATA[raw]]>\n  <x />\n</root>"
        );
    }

    #[test]
    fn test_indent_level_offsets_nested_output() {
        let list = Node::tree("ul", vec![Node::element("li"), Node::element("li")], None);
        let mut out = String::new();
        serialize_into(Some(&list), &mut out, 4, 2);
        assert_eq!(out, "<ul>\n      <li />\n      <li />\n    </ul>");
    }

    #[test]
    fn test_indent_width_is_honored() {
        let list = Node::tree("ul", vec![Node::element("li"), Node::element("li")], None);
        let mut out = String::new();
        serialize_into(Some(&list), &mut out, 0, 4);
        assert_eq!(out, "<ul>\n    <li />\n    <li />\n</ul>");
    }

    #[test]
    fn test_attribute_rendering_and_escaping() {
        let mut attrs = Attributes::new();
        attrs.insert("href".to_string(), "http://x".to_string());
        attrs.insert("title".to_string(), "a \"b\" & c".to_string());
        let link = Node::tree("a", vec![Node::text("link")], Some(attrs));
        assert_eq!(
            serialize(&link),
            "<a href=\"http://x\" title=\"a &quot;b&quot; &amp; c\">link</a>"
        );
    }

    #[test]
    fn test_comment_is_padded_and_escaped() {
        assert_eq!(serialize(&Node::comment("a & b")), "<!-- a &amp; b -->");
    }

    #[test]
    fn test_cdata_is_verbatim() {
        assert_eq!(
            serialize(&Node::cdata("if (a < b && c > d) {}")),
            "<![CDATA[if (a < b && c > d) {}]]>"
        );
    }

    #[test]
    fn test_entity_is_verbatim() {
        assert_eq!(serialize(&Node::entity("nbsp")), "&nbsp;");
        assert_eq!(serialize(&Node::entity("amp")), "&amp;");
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let tree = Node::builder("root")
            .attr("b", "2")
            .attr("a", "1")
            .child(Node::tree("x", vec![Node::text("t")], None))
            .child(Node::element("y"))
            .build();
        assert_eq!(serialize(&tree), serialize(&tree));
    }

    #[test]
    fn test_serialize_into_accumulates_fragments() {
        let mut out = String::new();
        serialize_into(Some(&Node::element("a")), &mut out, 0, 2);
        serialize_into(None, &mut out, 0, 2);
        serialize_into(Some(&Node::element("b")), &mut out, 0, 2);
        assert_eq!(out, "<a /><b />");
    }

    #[test]
    fn test_serialize_never_emits_declaration() {
        let root = Node::tree("root", vec![Node::text("x")], None);
        assert!(!serialize(&root).contains("<?xml"));
    }

    #[test]
    fn test_serialize_document_wraps_with_declaration() {
        let root = Node::tree("root", vec![Node::text("x")], None);
        assert_eq!(
            serialize_document(&root),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<root>x</root>\n"
        );
    }

    #[test]
    fn test_display_matches_serialize() {
        let tree = Node::tree("p", vec![Node::text("hi")], None);
        assert_eq!(tree.to_string(), serialize(&tree));
    }
}
