#![no_main]

use datasplunk::{StringExtractor, TextExtractor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let extractor = StringExtractor::default();

    for fragment in extractor.extract(data) {
        assert!(fragment.len() >= extractor.min_length());
        assert!(fragment.bytes().all(|b| (0x20..=0x7e).contains(&b)));
        assert_eq!(fragment.trim(), fragment);
    }
});
