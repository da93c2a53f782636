//! Content loading errors.

use std::io;
use std::path::PathBuf;

/// Errors that can occur when loading content.
///
/// Only environment problems are errors; missing or malformed fields inside
/// a document never are.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read content file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    /// Path that could not be read.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::DirectoryRead { path, .. } | Self::FileRead { path, .. } => path,
        }
    }
}
