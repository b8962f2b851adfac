#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_header_values::{Charset, ContentTransferEncoding};

fuzz_target!(|data: &[u8]| {
    if let Ok(encoding) = ContentTransferEncoding::parse(data) {
        assert_eq!(ContentTransferEncoding::parse(&encoding.serialize()).unwrap(), encoding);
    }
    if let Ok(charset) = Charset::parse(data) {
        assert_eq!(Charset::parse(&charset.serialize()).unwrap(), charset);
    }
});
