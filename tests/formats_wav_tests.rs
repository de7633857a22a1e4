use reeltag::formats::wav::{is_riff_wave, parse_fmt_chunk, read_bit_depth};
use reeltag::types::WavFormatInfo;

fn make_chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut chunk = id.to_vec();
    chunk.extend_from_slice(&(body.len() as u32).to_le_bytes());
    chunk.extend_from_slice(body);
    if body.len() % 2 == 1 {
        chunk.push(0);
    }
    chunk
}

fn fmt_body(audio_format: u16, channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * bits.div_ceil(8);
    let byte_rate = sample_rate * u32::from(block_align);
    let mut body = Vec::new();
    body.extend_from_slice(&audio_format.to_le_bytes());
    body.extend_from_slice(&channels.to_le_bytes());
    body.extend_from_slice(&sample_rate.to_le_bytes());
    body.extend_from_slice(&byte_rate.to_le_bytes());
    body.extend_from_slice(&block_align.to_le_bytes());
    body.extend_from_slice(&bits.to_le_bytes());
    body
}

fn make_wav(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body = chunks.concat();
    let mut wav = b"RIFF".to_vec();
    wav.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(&body);
    wav
}

fn canonical_wav(bits: u16) -> Vec<u8> {
    make_wav(&[
        make_chunk(b"fmt ", &fmt_body(1, 2, 44_100, bits)),
        make_chunk(b"data", &[0u8; 16]),
    ])
}

#[test]
fn test_read_bit_depth_canonical() {
    for bits in [8, 16, 24, 32] {
        assert_eq!(read_bit_depth(&canonical_wav(bits)), Some(bits));
    }
}

#[test]
fn test_read_bit_depth_rifx_is_absent() {
    let mut wav = canonical_wav(16);
    wav[3] = b'X';
    assert!(read_bit_depth(&wav).is_none());
}

#[test]
fn test_read_bit_depth_not_wave() {
    let mut avi = canonical_wav(16);
    avi[8..12].copy_from_slice(b"AVI ");
    assert!(read_bit_depth(&avi).is_none());
}

#[test]
fn test_read_bit_depth_short_buffer() {
    let wav = canonical_wav(16);
    assert!(read_bit_depth(&wav[..35]).is_none());
    assert_eq!(read_bit_depth(&wav[..36]), Some(16));
    assert!(read_bit_depth(&[]).is_none());
}

#[test]
fn test_read_bit_depth_non_canonical_layout_reads_fixed_offset() {
    // A LIST chunk ahead of fmt shifts it by 12 bytes; offset 34 then lands on the channel count.
    let wav = make_wav(&[
        make_chunk(b"LIST", b"INFO"),
        make_chunk(b"fmt ", &fmt_body(1, 2, 48_000, 24)),
        make_chunk(b"data", &[0u8; 8]),
    ]);

    assert_eq!(read_bit_depth(&wav), Some(2));
    assert_eq!(parse_fmt_chunk(&wav).map(|f| f.bits_per_sample), Some(24));
}

#[test]
fn test_parse_fmt_chunk_fields() {
    let info = parse_fmt_chunk(&canonical_wav(24)).unwrap();
    assert_eq!(
        info,
        WavFormatInfo {
            audio_format: 1,
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 24,
        }
    );
    assert!(info.is_pcm());
    assert_eq!(info.format_name(), "PCM");
}

#[test]
fn test_parse_fmt_chunk_skips_odd_sized_chunk() {
    let wav = make_wav(&[
        make_chunk(b"junk", &[1, 2, 3]),
        make_chunk(b"fmt ", &fmt_body(3, 1, 96_000, 32)),
    ]);
    let info = parse_fmt_chunk(&wav).unwrap();
    assert_eq!(info.audio_format, WavFormatInfo::WAVE_FORMAT_IEEE_FLOAT);
    assert_eq!(info.sample_rate, 96_000);
    assert_eq!(info.bits_per_sample, 32);
}

#[test]
fn test_parse_fmt_chunk_extensible() {
    let mut body = fmt_body(0xFFFE, 6, 48_000, 24);
    body.extend_from_slice(&22u16.to_le_bytes());
    body.extend_from_slice(&[0u8; 22]);
    let wav = make_wav(&[make_chunk(b"fmt ", &body)]);

    let info = parse_fmt_chunk(&wav).unwrap();
    assert_eq!(info.audio_format, WavFormatInfo::WAVE_FORMAT_EXTENSIBLE);
    assert_eq!(info.channels, 6);
    assert!(!info.is_pcm());
}

#[test]
fn test_parse_fmt_chunk_missing_or_truncated() {
    let no_fmt = make_wav(&[make_chunk(b"data", &[0u8; 32])]);
    assert!(parse_fmt_chunk(&no_fmt).is_none());

    let wav = canonical_wav(16);
    assert!(parse_fmt_chunk(&wav[..30]).is_none());

    let tiny_fmt = make_wav(&[make_chunk(b"fmt ", &[1, 0, 2, 0])]);
    assert!(parse_fmt_chunk(&tiny_fmt).is_none());
}

#[test]
fn test_parse_fmt_chunk_huge_chunk_length() {
    let mut wav = make_wav(&[make_chunk(b"junk", &[0u8; 4])]);
    wav[16..20].copy_from_slice(&u32::MAX.to_le_bytes());
    wav.extend_from_slice(&make_chunk(b"fmt ", &fmt_body(1, 2, 44_100, 16)));
    assert!(parse_fmt_chunk(&wav).is_none());
}

#[test]
fn test_is_riff_wave() {
    assert!(is_riff_wave(b"RIFF\x00\x00\x00\x00WAVE"));
    assert!(!is_riff_wave(b"RIFF\x00\x00\x00\x00WAV"));
    assert!(!is_riff_wave(b"ID3\x03\x00\x00\x00\x00\x00\x00\x00\x00"));
}

#[test]
fn test_format_name() {
    let mut info = parse_fmt_chunk(&canonical_wav(16)).unwrap();
    info.audio_format = WavFormatInfo::WAVE_FORMAT_IEEE_FLOAT;
    assert_eq!(info.format_name(), "IEEE float");
    info.audio_format = WavFormatInfo::WAVE_FORMAT_EXTENSIBLE;
    assert_eq!(info.format_name(), "extensible");
    info.audio_format = 0x0055;
    assert_eq!(info.format_name(), "tag 0x0055");
}
