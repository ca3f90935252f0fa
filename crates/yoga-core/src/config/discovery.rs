//! Config file discovery and loading

use serde_json::Value;
use yoga_fs::{ConfigStore, NormalizedPath, YogaPath};

use super::raw::RawConfig;
use crate::loader::{AuxiliaryLoader, LoadContext, LoadRequest};
use crate::{Error, Result};

/// The config file chosen for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: NormalizedPath,
    pub kind: YogaPath,
}

/// Find the project's config file.
///
/// Only one config file is honored. Candidates are tried in the order of
/// [`YogaPath::CONFIG_CANDIDATES`]; any further candidates present are
/// reported and ignored.
pub fn find_config_file(project_dir: &NormalizedPath) -> Option<ConfigSource> {
    let mut found = YogaPath::CONFIG_CANDIDATES
        .into_iter()
        .map(|kind| ConfigSource {
            path: project_dir.join(kind.as_str()),
            kind,
        })
        .filter(|source| source.path.is_file());

    let chosen = found.next()?;
    for ignored in found {
        tracing::warn!(
            used = %chosen.path,
            ignored = %ignored.path,
            "Multiple config files found, ignoring all but the first"
        );
    }
    tracing::debug!(path = %chosen.path, "Using config file");
    Some(chosen)
}

/// Load the raw config for `project_dir`.
///
/// Script configs (`.ts`, `.js`) are evaluated through `loader` and their
/// default export is used; data configs are parsed directly. Without a
/// config file the raw config is empty.
pub async fn load_raw_config(
    project_dir: &NormalizedPath,
    loader: &dyn AuxiliaryLoader,
    ctx: &LoadContext,
) -> Result<(Option<ConfigSource>, RawConfig)> {
    let Some(source) = find_config_file(project_dir) else {
        tracing::debug!(%project_dir, "No config file found, using defaults");
        return Ok((None, RawConfig::default()));
    };

    let value: Value = if source.kind.is_script() {
        let request = LoadRequest::default_export(source.path.clone());
        loader
            .load(std::slice::from_ref(&request), ctx)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::LoaderOutput {
                message: format!("no value returned for {}", source.path),
            })?
    } else {
        ConfigStore::new().load(&source.path)?
    };

    let raw = parse_raw(&source.path, value)?;
    Ok((Some(source), raw))
}

fn parse_raw(path: &NormalizedPath, value: Value) -> Result<RawConfig> {
    // An empty YAML document or `export default undefined` reads as null.
    if value.is_null() {
        return Ok(RawConfig::default());
    }
    serde_json::from_value(value).map_err(|e| Error::InvalidConfig {
        path: path.to_native(),
        message: e.to_string(),
    })
}
