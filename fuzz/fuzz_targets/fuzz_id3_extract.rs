#![no_main]

use libfuzzer_sys::fuzz_target;
use reeltag::formats::id3::{FrameIter, extract_picture};

fuzz_target!(|data: &[u8]| {
    if let Some(frames) = FrameIter::new(data) {
        for frame in frames {
            assert!(frame.body_end() <= data.len());
        }
    }

    if let Some(image) = extract_picture(data) {
        assert!(!image.is_empty());
        assert!(image.len() < data.len());
    }
});
