pub mod id3;
pub mod wav;

pub use id3::{extract_art, extract_picture};
pub use wav::{parse_fmt_chunk, read_bit_depth};
