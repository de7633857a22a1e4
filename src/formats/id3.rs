use tracing::{debug, trace};

use crate::bytes::{ByteCursor, array_at, be_u24, be_u32, synchsafe_u28};
use crate::types::EmbeddedImage;

pub const ID3_MAGIC: &[u8; 3] = b"ID3";
pub const ID3_HEADER_LEN: usize = 10;

/// The frame walk stops once fewer than this many bytes remain before the scan boundary.
const MIN_FRAME_TAIL: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3Header {
    pub major_version: u8,
    pub revision: u8,
    pub flags: u8,
    /// Tag body length, excluding the 10-byte header.
    pub tag_size: u32,
}

impl Id3Header {
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < ID3_HEADER_LEN || &data[0..3] != ID3_MAGIC {
            return None;
        }

        Some(Self {
            major_version: data[3],
            revision: data[4],
            flags: data[5],
            tag_size: synchsafe_u28([data[6], data[7], data[8], data[9]]),
        })
    }

    #[inline]
    pub fn layout(&self) -> FrameLayout {
        FrameLayout::for_version(self.major_version)
    }

    /// End of the frame area, clamped to the buffer so a truncated file is never over-read.
    #[inline]
    pub fn scan_end(&self, buffer_len: usize) -> usize {
        ID3_HEADER_LEN
            .saturating_add(self.tag_size as usize)
            .min(buffer_len)
    }
}

/// Per-version frame framing, chosen once from the header's major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayout {
    /// 3-byte id, 3-byte big-endian size, no flags.
    V22,
    /// 4-byte id, plain big-endian u32 size, 2 flag bytes.
    V23,
    /// 4-byte id, synchsafe size, 2 flag bytes.
    V24,
}

impl FrameLayout {
    /// Versions other than 2 and 4 are framed like v2.3.
    pub fn for_version(major_version: u8) -> Self {
        match major_version {
            2 => FrameLayout::V22,
            4 => FrameLayout::V24,
            _ => FrameLayout::V23,
        }
    }

    #[inline]
    pub const fn header_len(self) -> usize {
        match self {
            FrameLayout::V22 => 6,
            FrameLayout::V23 | FrameLayout::V24 => 10,
        }
    }

    #[inline]
    pub const fn id_len(self) -> usize {
        match self {
            FrameLayout::V22 => 3,
            FrameLayout::V23 | FrameLayout::V24 => 4,
        }
    }

    pub const fn picture_frame_id(self) -> &'static [u8] {
        match self {
            FrameLayout::V22 => b"PIC",
            FrameLayout::V23 | FrameLayout::V24 => b"APIC",
        }
    }

    fn read_frame_size(self, data: &[u8], offset: usize) -> Option<u32> {
        let size_at = offset + self.id_len();
        match self {
            FrameLayout::V22 => array_at(data, size_at).map(be_u24),
            FrameLayout::V23 => array_at(data, size_at).map(be_u32),
            FrameLayout::V24 => array_at(data, size_at).map(synchsafe_u28),
        }
    }

    /// Skips the image-format field that precedes the picture type.
    fn skip_image_format(self, cursor: &mut ByteCursor<'_>) -> Option<()> {
        match self {
            // Fixed 3-character code such as "JPG", never terminated.
            FrameLayout::V22 => cursor.skip(3),
            FrameLayout::V23 | FrameLayout::V24 => cursor.skip_until_nul(),
        }
    }
}

/// Text encoding marker at the start of a picture frame body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Latin1,
    Utf16Bom,
    Utf16Be,
    Utf8,
    Other(u8),
}

impl TextEncoding {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => TextEncoding::Latin1,
            1 => TextEncoding::Utf16Bom,
            2 => TextEncoding::Utf16Be,
            3 => TextEncoding::Utf8,
            other => TextEncoding::Other(other),
        }
    }

    #[inline]
    pub fn is_wide(self) -> bool {
        matches!(self, TextEncoding::Utf16Bom | TextEncoding::Utf16Be)
    }

    fn skip_terminated(self, cursor: &mut ByteCursor<'_>) -> Option<()> {
        if self.is_wide() {
            cursor.skip_until_nul_pair()
        } else {
            cursor.skip_until_nul()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3Frame<'a> {
    pub id: &'a [u8],
    pub offset: usize,
    pub body_offset: usize,
    pub body_size: usize,
}

impl<'a> Id3Frame<'a> {
    #[inline]
    pub const fn body_end(&self) -> usize {
        self.body_offset + self.body_size
    }

    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(self.id).into_owned()
    }
}

/// Sequential walk over the frames of a tag.
///
/// Ends at the first zero-sized frame (padding) or the first frame that
/// would extend past the scan boundary.
pub struct FrameIter<'a> {
    data: &'a [u8],
    layout: FrameLayout,
    pos: usize,
    end: usize,
    done: bool,
}

impl<'a> FrameIter<'a> {
    pub fn new(data: &'a [u8]) -> Option<Self> {
        let header = Id3Header::parse(data)?;
        Some(Self::with_header(data, &header))
    }

    pub fn with_header(data: &'a [u8], header: &Id3Header) -> Self {
        Self {
            data,
            layout: header.layout(),
            pos: ID3_HEADER_LEN,
            end: header.scan_end(data.len()),
            done: false,
        }
    }
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Id3Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.end.saturating_sub(MIN_FRAME_TAIL) {
            return None;
        }

        let offset = self.pos;
        let header_len = self.layout.header_len();
        let id = self.data.get(offset..offset + self.layout.id_len())?;
        let Some(size) = self.layout.read_frame_size(self.data, offset) else {
            self.done = true;
            return None;
        };

        if size == 0 {
            trace!(offset, "zero-sized frame, treating rest of tag as padding");
            self.done = true;
            return None;
        }

        let body_offset = offset + header_len;
        let body_end = body_offset.checked_add(size as usize);
        if body_end.is_none_or(|e| e > self.end) {
            debug!(
                offset,
                size,
                end = self.end,
                "frame overruns tag boundary, stopping walk"
            );
            self.done = true;
            return None;
        }

        let frame = Id3Frame {
            id,
            offset,
            body_offset,
            body_size: size as usize,
        };
        self.pos = frame.body_end();
        Some(frame)
    }
}

/// Returns the first embedded picture frame with a non-empty payload.
pub fn extract_picture(data: &[u8]) -> Option<EmbeddedImage> {
    let header = Id3Header::parse(data)?;
    let layout = header.layout();
    let target = layout.picture_frame_id();

    for frame in FrameIter::with_header(data, &header) {
        if frame.id != target {
            continue;
        }

        match picture_payload(data, &frame, layout) {
            Some(payload) => {
                debug!(
                    version = header.major_version,
                    offset = frame.offset,
                    len = payload.len(),
                    "embedded picture found"
                );
                return Some(EmbeddedImage::new(payload.to_vec()));
            }
            None => {
                debug!(offset = frame.offset, "picture frame has no payload");
            }
        }
    }

    None
}

/// Raw bytes of the first embedded picture.
pub fn extract_art(data: &[u8]) -> Option<Vec<u8>> {
    extract_picture(data).map(|image| image.data)
}

fn picture_payload<'a>(
    data: &'a [u8],
    frame: &Id3Frame<'_>,
    layout: FrameLayout,
) -> Option<&'a [u8]> {
    let body_end = frame.body_end();
    let mut cursor = ByteCursor::new(data, frame.body_offset, body_end);

    let encoding = TextEncoding::from_byte(cursor.read_u8()?);
    layout.skip_image_format(&mut cursor)?;
    // Picture type.
    cursor.skip(1)?;
    encoding.skip_terminated(&mut cursor)?;

    let payload = data.get(cursor.position()..body_end)?;
    (!payload.is_empty()).then_some(payload)
}
