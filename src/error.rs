use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReeltagError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, ReeltagError>;
