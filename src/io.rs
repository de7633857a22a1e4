use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use crate::error::{ReeltagError, Result};

/// Read-only view of a whole audio file.
///
/// Non-empty files are memory-mapped; an empty file maps to an empty slice
/// since zero-length mappings are rejected on some platforms.
pub struct AudioFile {
    path: PathBuf,
    mmap: Option<Mmap>,
}

impl AudioFile {
    pub fn open(path: &Path) -> Result<Self> {
        let read_err = |source| ReeltagError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let metadata = file.metadata().map_err(read_err)?;
        if !metadata.is_file() {
            return Err(ReeltagError::NotAFile(path.to_path_buf()));
        }

        let mmap = if metadata.len() == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only and dropped with `AudioFile`;
            // the file is not expected to be truncated while it is being inspected.
            Some(unsafe { Mmap::map(&file) }.map_err(read_err)?)
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    /// File name component, or the full path when there is none.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Deref for AudioFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}
