//! Existence policies for resolved paths

use crate::{Error, Result};
use yoga_fs::NormalizedPath;

/// Answers whether a path exists.
///
/// The resolver only ever asks this question of the filesystem, so tests can
/// substitute a fixed set of paths for a real project tree.
pub trait PathOracle: Send + Sync {
    fn exists(&self, path: &NormalizedPath) -> bool;
}

/// [`PathOracle`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOracle;

impl PathOracle for FsOracle {
    fn exists(&self, path: &NormalizedPath) -> bool {
        path.exists()
    }
}

/// Optional policy: a missing path is only an error if the user asked for it.
pub fn optional_path(
    oracle: &dyn PathOracle,
    path: NormalizedPath,
    was_user_supplied: bool,
    message: impl Into<String>,
) -> Result<Option<NormalizedPath>> {
    if oracle.exists(&path) {
        return Ok(Some(path));
    }
    if was_user_supplied {
        return Err(Error::validation(message));
    }
    tracing::debug!(%path, "Optional default path absent");
    Ok(None)
}

/// Required policy: a missing path is always an error.
pub fn required_path(
    oracle: &dyn PathOracle,
    path: NormalizedPath,
    message: impl Into<String>,
) -> Result<NormalizedPath> {
    if oracle.exists(&path) {
        Ok(path)
    } else {
        Err(Error::validation(message))
    }
}

/// Standard "could not find" message for a config field.
pub(crate) fn not_found(field: &str, path: &NormalizedPath) -> String {
    format!("Could not find a valid '{}' at {}", field, path)
}
