#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use yoga_core::{
    AuxiliaryLoader, ConfigResolver, LoadContext, LoadRequest, PathOracle, PresenceProbe,
    ProjectFacts, Result,
};
use yoga_fs::NormalizedPath;

/// An oracle that only knows the paths it was given.
pub struct FakeOracle(HashSet<String>);

impl FakeOracle {
    pub fn new(existing: &[&str]) -> Self {
        Self(existing.iter().map(|path| path.to_string()).collect())
    }
}

impl PathOracle for FakeOracle {
    fn exists(&self, path: &NormalizedPath) -> bool {
        self.0.contains(path.as_str())
    }
}

/// A probe with a fixed answer.
pub struct FakeProbe(pub Option<&'static str>);

impl PresenceProbe for FakeProbe {
    fn detect(&self, _facts: &ProjectFacts) -> Option<NormalizedPath> {
        self.0.map(NormalizedPath::from)
    }
}

/// A loader that records every call and answers from a table.
///
/// Unknown paths load as `{"path": <path>, "export": <export>}`.
#[derive(Default)]
pub struct RecordingLoader {
    values: HashMap<String, Value>,
    calls: Mutex<Vec<Vec<LoadRequest>>>,
}

impl RecordingLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_values(values: &[(&str, Value)]) -> Arc<Self> {
        Arc::new(Self {
            values: values
                .iter()
                .map(|(path, value)| (path.to_string(), value.clone()))
                .collect(),
            calls: Mutex::default(),
        })
    }

    pub fn calls(&self) -> Vec<Vec<LoadRequest>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuxiliaryLoader for RecordingLoader {
    async fn load(&self, requests: &[LoadRequest], _ctx: &LoadContext) -> Result<Vec<Value>> {
        self.calls.lock().unwrap().push(requests.to_vec());
        Ok(requests
            .iter()
            .map(|request| {
                self.values.get(request.path.as_str()).cloned().unwrap_or_else(|| {
                    serde_json::json!({
                        "path": request.path.as_str(),
                        "export": request.export_name
                    })
                })
            })
            .collect())
    }
}

/// A resolver for `/proj` against an in-memory filesystem.
pub fn resolver(
    existing: &[&str],
    probe: Option<&'static str>,
    loader: Arc<RecordingLoader>,
) -> ConfigResolver {
    ConfigResolver::new(ProjectFacts::new("/proj").unwrap())
        .with_oracle(FakeOracle::new(existing))
        .with_probe(FakeProbe(probe))
        .with_loader(loader)
}
