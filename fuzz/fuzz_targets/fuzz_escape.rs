#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlgrove::escape;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let escaped = escape(s);
        // Escaped output must contain no raw markup characters, and every
        // `&` must introduce one of the four named references we emit.
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        let mut rest = escaped.as_str();
        while let Some(pos) = rest.find('&') {
            let tail = &rest[pos..];
            assert!(
                tail.starts_with("&lt;")
                    || tail.starts_with("&gt;")
                    || tail.starts_with("&amp;")
                    || tail.starts_with("&quot;"),
                "unexpected ampersand in escaped output"
            );
            rest = &tail[1..];
        }
        // Escaping the same input twice is stable.
        assert_eq!(escaped, escape(s));
    }
});
