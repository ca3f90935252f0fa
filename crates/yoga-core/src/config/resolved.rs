//! The fully resolved configuration handed to the generators

use serde::Serialize;
use serde_json::Value;
use yoga_fs::NormalizedPath;

use super::raw::{DbIntegrationInput, DbOverrides, ModuleSource, RawConfig, RawOutput};

/// The final configuration after defaulting and validation.
///
/// Every path is absolute. Optional paths are `None` when the default does
/// not exist on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_path: Option<NormalizedPath>,

    pub resolvers_path: NormalizedPath,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_file_path: Option<NormalizedPath>,

    pub output: ResolvedOutput,

    /// `None` when the integration is neither configured nor detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_integration: Option<ResolvedDbIntegration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOutput {
    pub typegen_path: NormalizedPath,
    pub schema_path: NormalizedPath,
    pub build_path: NormalizedPath,
}

/// An enabled database integration with its modules loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDbIntegration {
    /// `None` when the client was supplied inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_path: Option<NormalizedPath>,

    pub client: Value,

    /// `None` when the schema descriptor was supplied inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_descriptor_path: Option<NormalizedPath>,

    pub schema_descriptor: Value,

    pub client_binding_name: String,
}

impl ResolvedConfig {
    /// Re-derive a raw config that resolves back to this one.
    ///
    /// Paths become `./`-relative to `root` where possible; paths outside the
    /// root stay absolute. Values that were supplied inline stay inline.
    pub fn to_raw(&self, root: &NormalizedPath) -> RawConfig {
        let rel = |path: &NormalizedPath| path.relative_to(root).unwrap_or_else(|| path.to_string());

        RawConfig {
            context_path: self.context_path.as_ref().map(rel),
            resolvers_path: Some(rel(&self.resolvers_path)),
            eject_file_path: self.eject_file_path.as_ref().map(rel),
            output: Some(RawOutput {
                typegen_path: Some(rel(&self.output.typegen_path)),
                schema_path: Some(rel(&self.output.schema_path)),
                build_path: Some(rel(&self.output.build_path)),
            }),
            db_integration: self.db_integration.as_ref().map(|db| {
                let source = |path: &Option<NormalizedPath>, value: &Value| match path {
                    Some(path) => ModuleSource::Path(rel(path)),
                    None => ModuleSource::Inline(value.clone()),
                };
                DbIntegrationInput::Overrides(DbOverrides {
                    client_path: Some(source(&db.client_path, &db.client)),
                    schema_descriptor_path: Some(source(
                        &db.schema_descriptor_path,
                        &db.schema_descriptor,
                    )),
                    client_binding_name: Some(db.client_binding_name.clone()),
                })
            }),
        }
    }

    /// Every resolved path, labelled with its config key.
    pub fn paths(&self) -> Vec<(&'static str, &NormalizedPath)> {
        let mut paths = Vec::new();
        if let Some(path) = &self.context_path {
            paths.push(("contextPath", path));
        }
        paths.push(("resolversPath", &self.resolvers_path));
        if let Some(path) = &self.eject_file_path {
            paths.push(("ejectFilePath", path));
        }
        paths.push(("output.typegenPath", &self.output.typegen_path));
        paths.push(("output.schemaPath", &self.output.schema_path));
        paths.push(("output.buildPath", &self.output.build_path));
        if let Some(db) = &self.db_integration {
            if let Some(path) = &db.client_path {
                paths.push(("dbIntegration.clientPath", path));
            }
            if let Some(path) = &db.schema_descriptor_path {
                paths.push(("dbIntegration.schemaDescriptorPath", path));
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved() -> ResolvedConfig {
        ResolvedConfig {
            context_path: None,
            resolvers_path: NormalizedPath::new("/proj/src/graphql/"),
            eject_file_path: Some(NormalizedPath::new("/proj/src/index.ts")),
            output: ResolvedOutput {
                typegen_path: NormalizedPath::new("/proj/yoga/nexus.ts"),
                schema_path: NormalizedPath::new("/proj/src/schema.graphql"),
                build_path: NormalizedPath::new("/out/dist"),
            },
            db_integration: Some(ResolvedDbIntegration {
                client_path: Some(NormalizedPath::new("/proj/yoga/prisma-client/index.ts")),
                client: json!({"kind": "client"}),
                schema_descriptor_path: None,
                schema_descriptor: json!({"uniqueFieldsByModel": {}}),
                client_binding_name: "prisma".into(),
            }),
        }
    }

    #[test]
    fn to_raw_relativizes_paths_under_root() {
        let raw = resolved().to_raw(&NormalizedPath::new("/proj"));

        assert_eq!(raw.context_path, None);
        assert_eq!(raw.resolvers_path.as_deref(), Some("./src/graphql/"));
        assert_eq!(raw.eject_file_path.as_deref(), Some("./src/index.ts"));
        let output = raw.output.unwrap();
        assert_eq!(output.build_path.as_deref(), Some("/out/dist"));
    }

    #[test]
    fn to_raw_keeps_inline_values_inline() {
        let raw = resolved().to_raw(&NormalizedPath::new("/proj"));

        let Some(DbIntegrationInput::Overrides(db)) = raw.db_integration else {
            panic!("expected overrides");
        };
        assert_eq!(
            db.client_path,
            Some(ModuleSource::Path("./yoga/prisma-client/index.ts".into()))
        );
        assert_eq!(
            db.schema_descriptor_path,
            Some(ModuleSource::Inline(json!({"uniqueFieldsByModel": {}})))
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(resolved()).unwrap();
        assert_eq!(json["resolversPath"], "/proj/src/graphql/");
        assert_eq!(json["dbIntegration"]["clientBindingName"], "prisma");
        assert!(json.get("contextPath").is_none());
    }

    #[test]
    fn paths_lists_every_resolved_path() {
        let config = resolved();
        let keys: Vec<_> = config.paths().into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "resolversPath",
                "ejectFilePath",
                "output.typegenPath",
                "output.schemaPath",
                "output.buildPath",
                "dbIntegration.clientPath",
            ]
        );
    }
}
