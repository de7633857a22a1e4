use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{ReeltagError, Result};
use crate::inspect::Inspection;
use crate::types::{EmbeddedImage, ImageFormat};

#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub extracted: Vec<PathBuf>,
    pub without_art: usize,
    pub failed: usize,
}

pub fn generate_filename(index: usize, stem: &str, format: ImageFormat) -> String {
    format!(
        "{:04}_{}.{}",
        index,
        sanitize_stem(stem),
        format.extension()
    )
}

fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        "cover".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn write_artwork(image: &EmbeddedImage, output_path: &Path) -> Result<()> {
    let write_err = |source| ReeltagError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let mut out = File::create(output_path).map_err(write_err)?;
    out.write_all(&image.data).map_err(write_err)?;
    out.sync_all().map_err(write_err)?;
    Ok(())
}

/// Writes the artwork of every inspection that has one into `output_dir`.
pub fn extract_all(inspections: &[Inspection], output_dir: &Path) -> Result<ExtractionReport> {
    fs::create_dir_all(output_dir).map_err(|source| ReeltagError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = ExtractionReport::default();

    for (i, inspection) in inspections.iter().enumerate() {
        let Some(image) = &inspection.artwork else {
            report.without_art += 1;
            continue;
        };

        let stem = stem_of(&inspection.report.file_name);
        let filename = generate_filename(i, stem, image.format);
        let output_path = output_dir.join(&filename);

        match write_artwork(image, &output_path) {
            Ok(()) => {
                info!(path = %output_path.display(), bytes = image.len(), "artwork written");
                report.extracted.push(output_path);
            }
            Err(e) => {
                warn!("Failed to extract {}: {}", filename, e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

fn stem_of(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}
