//! Read-only I/O helpers

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::path::Path;

/// Read a file to a string.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Canonicalize a directory into a `NormalizedPath`.
///
/// Uses `dunce` so Windows paths do not carry the `\\?\` verbatim prefix.
pub fn canonical_dir(path: impl AsRef<Path>) -> Result<NormalizedPath> {
    let path = path.as_ref();
    dunce::canonicalize(path)
        .map(NormalizedPath::new)
        .map_err(|e| Error::io(path, e))
}
