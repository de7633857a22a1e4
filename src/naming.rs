//! Display names derived from audio file names.

use serde::Serialize;
use std::path::{Path, PathBuf};

pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "flac", "aac", "ogg", "m4a"];

const ARTIST_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackName {
    pub artist: String,
    pub title: String,
}

impl TrackName {
    /// Splits an `"Artist - Title.ext"` file name.
    ///
    /// Only the last extension is stripped. Anything after the first
    /// separator belongs to the title, so `"A - B - C.mp3"` has title `"B - C"`.
    /// Without a separator the artist is empty and the title is the stem.
    pub fn from_filename(file_name: &str) -> Self {
        let stem = strip_extension(file_name);

        match stem.split_once(ARTIST_SEPARATOR) {
            Some((artist, title)) => Self {
                artist: artist.trim().to_string(),
                title: title.trim().to_string(),
            },
            None => Self {
                artist: String::new(),
                title: stem.to_string(),
            },
        }
    }

    pub fn has_artist(&self) -> bool {
        !self.artist.is_empty()
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if !file_name[idx + 1..].is_empty() => &file_name[..idx],
        _ => file_name,
    }
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Expands directories one level deep into the audio files they contain, sorted.
///
/// Explicit file arguments are kept as given, whatever their extension.
pub fn expand_paths(paths: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(audio_files_in(path)?);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

fn audio_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_audio_file(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
