#![no_main]

use datasplunk::detect;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(format) = detect(data) {
        assert!(data.len() >= 2);
        assert!(!format.name().is_empty());
    }
});
