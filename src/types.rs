use serde::Serialize;
use sha2::{Digest, Sha256};

pub const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const GIF_SIGNATURE: &[u8; 4] = b"GIF8";
pub const BMP_SIGNATURE: &[u8; 2] = b"BM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Unknown,
}

impl ImageFormat {
    /// Identifies the image by its leading magic bytes.
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(&JPEG_SOI) {
            ImageFormat::Jpeg
        } else if data.starts_with(&PNG_SIGNATURE) {
            ImageFormat::Png
        } else if data.starts_with(GIF_SIGNATURE) {
            ImageFormat::Gif
        } else if data.starts_with(BMP_SIGNATURE) {
            ImageFormat::Bmp
        } else {
            ImageFormat::Unknown
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Unknown => "bin",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Unknown => "application/octet-stream",
        }
    }
}

/// Picture payload lifted out of an ID3v2 PIC/APIC frame.
///
/// The bytes are copied out of the caller's buffer, so the image outlives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub data: Vec<u8>,
    pub format: ImageFormat,
}

impl EmbeddedImage {
    pub fn new(data: Vec<u8>) -> Self {
        let format = ImageFormat::sniff(&data);
        Self { data, format }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.data))
    }
}

/// Fields of a WAV `fmt ` chunk located by walking the RIFF chunk list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavFormatInfo {
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormatInfo {
    pub const WAVE_FORMAT_PCM: u16 = 0x0001;
    pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 0x0003;
    pub const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

    pub fn is_pcm(&self) -> bool {
        self.audio_format == Self::WAVE_FORMAT_PCM
    }

    pub fn format_name(&self) -> String {
        match self.audio_format {
            Self::WAVE_FORMAT_PCM => "PCM".to_string(),
            Self::WAVE_FORMAT_IEEE_FLOAT => "IEEE float".to_string(),
            Self::WAVE_FORMAT_EXTENSIBLE => "extensible".to_string(),
            other => format!("tag 0x{other:04X}"),
        }
    }
}
