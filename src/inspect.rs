use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;
use crate::formats::{extract_picture, parse_fmt_chunk, read_bit_depth};
use crate::io::AudioFile;
use crate::naming::TrackName;
use crate::types::{EmbeddedImage, ImageFormat, WavFormatInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkSummary {
    pub format: ImageFormat,
    pub mime_type: &'static str,
    pub size_bytes: usize,
    pub sha256: String,
}

impl ArtworkSummary {
    pub fn of(image: &EmbeddedImage) -> Self {
        Self {
            format: image.format,
            mime_type: image.format.mime_type(),
            size_bytes: image.len(),
            sha256: image.sha256_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackReport {
    pub file_name: String,
    pub track: TrackName,
    pub size_bytes: usize,
    /// Value at the canonical `bits_per_sample` offset.
    pub bit_depth: Option<u16>,
    /// `fmt ` chunk found by walking the RIFF chunk list.
    pub wav_format: Option<WavFormatInfo>,
    pub artwork: Option<ArtworkSummary>,
}

impl TrackReport {
    /// True when the canonical-offset read and the chunk walk disagree,
    /// which happens for WAV files whose `fmt ` chunk is not first.
    pub fn bit_depth_mismatch(&self) -> bool {
        match (self.bit_depth, self.wav_format) {
            (Some(canonical), Some(fmt)) => canonical != fmt.bits_per_sample,
            _ => false,
        }
    }
}

/// Report plus the artwork bytes, which the report only summarizes.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub path: Option<PathBuf>,
    pub report: TrackReport,
    pub artwork: Option<EmbeddedImage>,
}

/// Runs both readers over the same buffer; neither depends on the other.
pub fn inspect_bytes(file_name: &str, data: &[u8]) -> Inspection {
    let bit_depth = read_bit_depth(data);
    let wav_format = parse_fmt_chunk(data);
    let artwork = extract_picture(data);

    let report = TrackReport {
        file_name: file_name.to_string(),
        track: TrackName::from_filename(file_name),
        size_bytes: data.len(),
        bit_depth,
        wav_format,
        artwork: artwork.as_ref().map(ArtworkSummary::of),
    };

    if report.bit_depth_mismatch() {
        warn!(
            file = file_name,
            canonical = ?report.bit_depth,
            chunk = ?report.wav_format.map(|f| f.bits_per_sample),
            "non-canonical WAV layout, bit depth at offset 34 disagrees with fmt chunk"
        );
    }

    debug!(
        file = file_name,
        bit_depth = ?report.bit_depth,
        has_art = report.artwork.is_some(),
        "inspected"
    );

    Inspection {
        path: None,
        report,
        artwork,
    }
}

pub fn inspect_file(path: &Path) -> Result<Inspection> {
    let file = AudioFile::open(path)?;
    let mut inspection = inspect_bytes(&file.file_name(), &file);
    inspection.path = Some(path.to_path_buf());
    Ok(inspection)
}

/// Inspects every path in parallel, preserving input order.
pub fn inspect_paths(paths: &[PathBuf]) -> Vec<Result<Inspection>> {
    paths.par_iter().map(|path| inspect_file(path)).collect()
}
