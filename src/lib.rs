pub mod bytes;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod inspect;
pub mod io;
pub mod naming;
pub mod types;

pub use error::{ReeltagError, Result};
pub use formats::{extract_art, extract_picture, parse_fmt_chunk, read_bit_depth};
pub use inspect::{Inspection, TrackReport, inspect_bytes, inspect_file};
pub use naming::TrackName;
pub use types::{EmbeddedImage, ImageFormat, WavFormatInfo};
