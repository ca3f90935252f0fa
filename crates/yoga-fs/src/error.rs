//! Error types for yoga-fs

use std::path::PathBuf;

/// Result type for yoga-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in yoga-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} file at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: &crate::NormalizedPath, format: &str, message: impl ToString) -> Self {
        Self::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message: message.to_string(),
        }
    }
}
