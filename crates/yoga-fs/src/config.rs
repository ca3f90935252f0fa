//! Format-agnostic configuration loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently into any serde type, including `serde_json::Value`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Whether `path` has an extension this store can read.
    pub fn supports(path: &NormalizedPath) -> bool {
        matches!(
            path.extension().map(str::to_lowercase).as_deref(),
            Some("toml" | "json" | "jsonc" | "json5" | "yaml" | "yml")
        )
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.jsonc`, `.json5` -> JSON with comments and trailing commas
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        if !Self::supports(path) {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = io::read_text(path)?;
        tracing::trace!(%path, format = %extension, "Parsing config file");

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::parse(path, "TOML", e)),
            "json" => serde_json::from_str(&content).map_err(|e| Error::parse(path, "JSON", e)),
            "jsonc" | "json5" => {
                json5::from_str(&content).map_err(|e| Error::parse(path, "JSONC", e))
            }
            _ => serde_yaml::from_str(&content).map_err(|e| Error::parse(path, "YAML", e)),
        }
    }

    /// Load a JSON-with-comments file regardless of its extension.
    ///
    /// `tsconfig.json` files routinely carry comments and trailing commas.
    pub fn load_jsonc<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        json5::from_str(&content).map_err(|e| Error::parse(path, "JSONC", e))
    }
}
