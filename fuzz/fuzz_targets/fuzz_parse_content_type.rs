#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_header_values::ContentType;

fuzz_target!(|data: &[u8]| {
    if let Ok(ct) = ContentType::parse(data) {
        // Canonical output must parse back with the same media type
        let reparsed = ContentType::parse(&ct.serialize()).expect("canonical form must parse");
        assert_eq!(reparsed.essence(), ct.essence());
    }
});
