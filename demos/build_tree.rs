//! Tree construction and document serialization example.
//!
//! Run with: `cargo run --example build_tree`

use xmlgrove::serial::serialize_document;
use xmlgrove::Node;

fn main() {
    let catalog = Node::builder("catalog")
        .attr("version", "2.0")
        .child(Node::comment("generated example"))
        .child(
            Node::builder("book")
                .attr("id", "bk101")
                .child(Node::builder("title").text("Markup & Meaning").build())
                .child(Node::builder("author").text("J. Doe").build())
                .build(),
        )
        .child(
            Node::builder("book")
                .attr("id", "bk102")
                .child(Node::builder("title").text("Trees <for> Fun").build())
                .child(Node::builder("script").child(Node::cdata("a < b && b > c")).build())
                .build(),
        )
        .build();

    println!("{}", serialize_document(&catalog));
}
