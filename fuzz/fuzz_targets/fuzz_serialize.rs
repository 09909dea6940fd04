#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlgrove::{serialize, Node};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Assemble the input into every leaf kind plus attribute values and
        // tag content; serialization must never panic and must be stable
        // under repetition.
        let tree = Node::builder("root")
            .attr("value", s)
            .text(s)
            .child(Node::comment(s))
            .child(Node::cdata(s))
            .child(Node::entity(s))
            .child(Node::builder("inner").text(s).build())
            .build();

        let first = serialize(&tree);
        let second = serialize(&tree);
        assert_eq!(first, second);
    }
});
