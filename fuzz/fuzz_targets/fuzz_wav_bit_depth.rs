#![no_main]

use libfuzzer_sys::fuzz_target;
use reeltag::formats::wav::{MIN_WAV_HEADER, parse_fmt_chunk, read_bit_depth};

fuzz_target!(|data: &[u8]| {
    if read_bit_depth(data).is_some() {
        assert!(data.len() >= MIN_WAV_HEADER);
    }
    let _ = parse_fmt_chunk(data);
});
