//! Extension-based dispatch between data and script loaders

use async_trait::async_trait;
use serde_json::Value;

use super::{AuxiliaryLoader, DataModuleLoader, LoadContext, LoadRequest, NodeModuleLoader};
use crate::Result;

/// Default loader: data files are parsed in-process, everything else is
/// handed to Node.
///
/// Consecutive requests of the same kind are batched into one call, and
/// batches run in request order so evaluation order is preserved.
#[derive(Debug, Clone, Default)]
pub struct ModuleLoader {
    data: DataModuleLoader,
    script: NodeModuleLoader,
}

impl ModuleLoader {
    /// Use `script` for modules that are not data files.
    pub fn with_script_loader(script: NodeModuleLoader) -> Self {
        Self {
            data: DataModuleLoader::new(),
            script,
        }
    }
}

/// Split requests into maximal runs that go to the same loader.
fn runs(requests: &[LoadRequest]) -> Vec<(bool, &[LoadRequest])> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=requests.len() {
        let boundary = i == requests.len()
            || DataModuleLoader::handles(&requests[i].path)
                != DataModuleLoader::handles(&requests[start].path);
        if boundary {
            runs.push((
                DataModuleLoader::handles(&requests[start].path),
                &requests[start..i],
            ));
            start = i;
        }
    }
    runs
}

#[async_trait]
impl AuxiliaryLoader for ModuleLoader {
    async fn load(&self, requests: &[LoadRequest], ctx: &LoadContext) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(requests.len());
        for (is_data, run) in runs(requests) {
            let loaded = if is_data {
                self.data.load(run, ctx).await?
            } else {
                self.script.load(run, ctx).await?
            };
            values.extend(loaded);
        }
        Ok(values)
    }
}
