//! Loader for data files

use async_trait::async_trait;
use serde_json::Value;
use yoga_fs::{ConfigStore, NormalizedPath};

use super::{AuxiliaryLoader, DEFAULT_EXPORT, LoadContext, LoadRequest};
use crate::{Error, Result};

/// Loads JSON, JSONC, YAML and TOML files as modules.
///
/// The default export is the whole document; any other export name selects
/// the top-level key of that name.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataModuleLoader {
    store: ConfigStore,
}

impl DataModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this loader can read `path`.
    pub fn handles(path: &NormalizedPath) -> bool {
        ConfigStore::supports(path)
    }

    fn load_one(&self, request: &LoadRequest) -> Result<Value> {
        let document: Value = self.store.load(&request.path)?;
        select_export(document, request)
    }
}

fn select_export(document: Value, request: &LoadRequest) -> Result<Value> {
    if request.export_name == DEFAULT_EXPORT {
        return Ok(document);
    }
    let selected = match document {
        Value::Object(mut map) => map.remove(&request.export_name),
        _ => None,
    };
    selected.ok_or_else(|| Error::ExportNotFound {
        path: request.path.to_native(),
        export: request.export_name.clone(),
    })
}

#[async_trait]
impl AuxiliaryLoader for DataModuleLoader {
    async fn load(&self, requests: &[LoadRequest], _ctx: &LoadContext) -> Result<Vec<Value>> {
        requests
            .iter()
            .map(|request| {
                tracing::debug!(path = %request.path, export = %request.export_name, "Loading data module");
                self.load_one(request)
            })
            .collect()
    }
}
