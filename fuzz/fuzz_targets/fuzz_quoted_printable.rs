#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_header_values::quotedprintable::{decode, Encoder};

fuzz_target!(|data: &[u8]| {
    let _ = decode(data);

    // Binary mode must reproduce the input exactly
    let encoded = Encoder { binary: true }.encode(data);
    assert_eq!(decode(&encoded).unwrap(), data);
});
