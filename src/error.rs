use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the sequence and file utilities.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed content in {}: {reason}", .path.display())]
    MalformedContent { path: PathBuf, reason: String },

    #[error("invalid base '{base}' at offset {offset}")]
    InvalidBase { base: char, offset: usize },

    #[error("sequence is empty")]
    EmptySequence,

    #[error("requires at least one record to write")]
    EmptyRecords,

    #[error("a destination filename is required")]
    MissingFilename,

    #[error("record {index} does not provide both 'id' and 'sequence'")]
    MalformedRecord { index: usize },

    #[error("{0} format is not available yet")]
    UnsupportedFormat(String),

    #[error("restriction enzyme list not found at {}", .0.display())]
    MissingEnzymeFile(PathBuf),

    #[error("unable to run '{program}'")]
    CompressorUnavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to gzip {}: {status}: {stderr}", .path.display())]
    CompressionFailed {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UtilError>;

impl UtilError {
    /// Classifies an I/O error raised while accessing `path`, keeping the path for the
    /// causes a caller is likely to act on.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => UtilError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => UtilError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::InvalidData => UtilError::MalformedContent {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
            _ => UtilError::Io(err),
        }
    }
}
