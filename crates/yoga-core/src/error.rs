//! Error types for yoga-core

use std::path::PathBuf;

/// Result type for yoga-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured or default path failed its existence policy
    #[error("{message}")]
    ConfigValidation { message: String },

    /// Project facts were built from a relative project directory
    #[error("Project directory must be absolute, got '{path}'")]
    RelativeProjectDir { path: String },

    /// The config file does not have the expected shape
    #[error("Invalid config at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// A loaded module has no export with the requested name
    #[error("Module {path} has no export named '{export}'")]
    ExportNotFound { path: PathBuf, export: String },

    /// The external module loader exited unsuccessfully
    #[error("Loader command `{command}` failed with code {code}: {stderr}")]
    LoaderFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The module loader produced output that could not be used
    #[error("Loader output error: {message}")]
    LoaderOutput { message: String },

    /// Filesystem error from yoga-fs
    #[error(transparent)]
    Fs(#[from] yoga_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a config validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Whether this is a config validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ConfigValidation { .. })
    }
}
