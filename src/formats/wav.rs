use crate::bytes::{array_at, le_u16, le_u32};
use crate::types::WavFormatInfo;

pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_FORM: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK_ID: &[u8; 4] = b"fmt ";

/// Smallest buffer holding a canonical RIFF header plus `fmt ` up to `bits_per_sample`.
pub const MIN_WAV_HEADER: usize = 36;

/// Offset of `bits_per_sample` when `fmt ` is the first chunk, right after the RIFF header.
pub const CANONICAL_BITS_OFFSET: usize = 34;

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;
const MIN_FMT_CHUNK_LEN: usize = 16;

#[inline]
pub fn is_riff_wave(data: &[u8]) -> bool {
    data.len() >= RIFF_HEADER_LEN && &data[0..4] == RIFF_MAGIC && &data[8..12] == WAVE_FORM
}

/// Reads bits-per-sample from the canonical offset of a RIFF/WAVE buffer.
///
/// No chunk walk is done: a WAV whose `fmt ` chunk is not first, or is
/// preceded by other chunks, yields whatever two bytes sit at offset 34.
/// Use [`parse_fmt_chunk`] when the layout may be non-canonical.
pub fn read_bit_depth(data: &[u8]) -> Option<u16> {
    if data.len() < MIN_WAV_HEADER || !is_riff_wave(data) {
        return None;
    }
    array_at(data, CANONICAL_BITS_OFFSET).map(le_u16)
}

/// Walks the RIFF chunk list and decodes the first `fmt ` chunk.
pub fn parse_fmt_chunk(data: &[u8]) -> Option<WavFormatInfo> {
    if !is_riff_wave(data) {
        return None;
    }

    let mut pos = RIFF_HEADER_LEN;

    while let Some(header) = array_at::<CHUNK_HEADER_LEN>(data, pos) {
        let chunk_id = &header[0..4];
        let chunk_len = le_u32([header[4], header[5], header[6], header[7]]) as usize;
        let body = pos + CHUNK_HEADER_LEN;

        if chunk_id == FMT_CHUNK_ID {
            if chunk_len < MIN_FMT_CHUNK_LEN {
                return None;
            }
            let fmt = data.get(body..body.checked_add(MIN_FMT_CHUNK_LEN)?)?;
            return Some(WavFormatInfo {
                audio_format: le_u16([fmt[0], fmt[1]]),
                channels: le_u16([fmt[2], fmt[3]]),
                sample_rate: le_u32([fmt[4], fmt[5], fmt[6], fmt[7]]),
                bits_per_sample: le_u16([fmt[14], fmt[15]]),
            });
        }

        // Chunk bodies are padded to an even length.
        let padded = chunk_len.checked_add(chunk_len & 1)?;
        pos = body.checked_add(padded)?;
    }

    None
}
