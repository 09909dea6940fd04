//! Fragment accumulation example.
//!
//! Serializes several independent fragments into one buffer at a chosen
//! indent level, prepending the XML declaration by hand.
//!
//! Run with: `cargo run --example fragments`

use xmlgrove::{serialize_into, Node, XML_DECLARATION};

fn main() {
    let mut out = String::from(XML_DECLARATION);
    out.push_str("<report>\n  ");

    let summary = Node::builder("summary")
        .text("Two items, ")
        .child(Node::builder("b").text("one flagged").build())
        .build();
    serialize_into(Some(&summary), &mut out, 2, 2);
    out.push_str("\n  ");

    // An optional fragment that happens to be absent appends nothing.
    serialize_into(None, &mut out, 2, 2);

    let items = Node::builder("items")
        .child(Node::builder("item").attr("id", "1").build())
        .child(Node::builder("item").attr("id", "2").attr("flag", "true").build())
        .build();
    serialize_into(Some(&items), &mut out, 2, 2);

    out.push_str("\n</report>\n");
    println!("{out}");
}
