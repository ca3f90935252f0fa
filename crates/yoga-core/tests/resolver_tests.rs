mod common;

use common::{RecordingLoader, resolver};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use yoga_core::{
    ConfigResolver, DbIntegrationInput, DbOverrides, Error, ModuleSource, ProjectFacts, RawConfig,
};

const RESOLVERS: &str = "/proj/src/graphql/";
const CLIENT: &str = "/proj/yoga/prisma-client/index.ts";
const DESCRIPTOR: &str = "/proj/yoga/nexus-prisma/datamodel-info.ts";

fn raw(value: serde_json::Value) -> RawConfig {
    serde_json::from_value(value).unwrap()
}

fn validation_message(err: Error) -> String {
    assert!(err.is_validation(), "expected a validation error, got {err:?}");
    err.to_string()
}

#[tokio::test]
async fn test_empty_config_requires_resolvers_dir() {
    let err = resolver(&[], None, RecordingLoader::new())
        .resolve(&RawConfig::default())
        .await
        .unwrap_err();

    let message = validation_message(err);
    assert_eq!(
        message,
        "Could not find a valid 'resolversPath' at /proj/src/graphql/"
    );
}

#[tokio::test]
async fn test_explicit_resolvers_dir_keeps_trailing_separator() {
    let resolved = resolver(&["/proj/api/"], None, RecordingLoader::new())
        .resolve(&raw(json!({"resolversPath": "./api/"})))
        .await
        .unwrap();

    assert_eq!(resolved.resolvers_path.as_str(), "/proj/api/");
    assert_eq!(
        resolved.to_raw(&"/proj".into()).resolvers_path.as_deref(),
        Some("./api/")
    );
}

#[tokio::test]
async fn test_minimal_project_uses_defaults() {
    let loader = RecordingLoader::new();
    let resolved = resolver(&[RESOLVERS], None, loader.clone())
        .resolve(&RawConfig::default())
        .await
        .unwrap();

    assert_eq!(resolved.context_path, None);
    assert_eq!(resolved.eject_file_path, None);
    assert_eq!(resolved.resolvers_path.as_str(), RESOLVERS);
    assert_eq!(resolved.output.typegen_path.as_str(), "/proj/yoga/nexus.ts");
    assert_eq!(resolved.output.schema_path.as_str(), "/proj/src/schema.graphql");
    assert_eq!(resolved.output.build_path.as_str(), "/proj/dist");
    assert_eq!(resolved.db_integration, None);
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn test_existing_optional_defaults_are_picked_up() {
    let resolved = resolver(
        &[RESOLVERS, "/proj/src/context.ts", "/proj/src/index.ts"],
        None,
        RecordingLoader::new(),
    )
    .resolve(&RawConfig::default())
    .await
    .unwrap();

    assert_eq!(
        resolved.context_path.as_ref().map(|p| p.as_str()),
        Some("/proj/src/context.ts")
    );
    assert_eq!(
        resolved.eject_file_path.as_ref().map(|p| p.as_str()),
        Some("/proj/src/index.ts")
    );
}

#[rstest]
#[case::context(json!({"contextPath": "./nope.ts"}), "contextPath", "/proj/nope.ts")]
#[case::eject(json!({"ejectFilePath": "./main.ts"}), "ejectFilePath", "/proj/main.ts")]
#[case::resolvers(json!({"resolversPath": "./api"}), "resolversPath", "/proj/api")]
#[tokio::test]
async fn test_explicit_missing_path_fails(
    #[case] input: serde_json::Value,
    #[case] field: &str,
    #[case] path: &str,
) {
    let err = resolver(&[RESOLVERS], None, RecordingLoader::new())
        .resolve(&raw(input))
        .await
        .unwrap_err();

    let message = validation_message(err);
    assert!(message.contains(field), "{message}");
    assert!(message.contains(path), "{message}");
}

#[tokio::test]
async fn test_explicit_existing_paths_are_absolutized() {
    let resolved = resolver(
        &["/proj/server/context.ts", "/proj/server/resolvers/"],
        None,
        RecordingLoader::new(),
    )
    .resolve(&raw(json!({
        "contextPath": "server/context.ts",
        "resolversPath": "./server/resolvers/",
        "output": {"typegenPath": "./gen/types.ts", "buildPath": "/abs/build"}
    })))
    .await
    .unwrap();

    assert_eq!(
        resolved.context_path.as_ref().map(|p| p.as_str()),
        Some("/proj/server/context.ts")
    );
    assert_eq!(resolved.resolvers_path.as_str(), "/proj/server/resolvers/");
    assert_eq!(resolved.output.typegen_path.as_str(), "/proj/gen/types.ts");
    assert_eq!(resolved.output.build_path.as_str(), "/abs/build");
    for (field, path) in resolved.paths() {
        assert!(path.is_absolute(), "{field} is not absolute: {path}");
    }
}

#[tokio::test]
async fn test_db_integration_true_requires_client() {
    let err = resolver(&[RESOLVERS, DESCRIPTOR], None, RecordingLoader::new())
        .resolve(&raw(json!({"dbIntegration": true})))
        .await
        .unwrap_err();

    let message = validation_message(err);
    assert!(message.contains(CLIENT), "{message}");
}

#[tokio::test]
async fn test_db_integration_validates_before_loading() {
    // Client exists, descriptor does not: nothing may be loaded.
    let loader = RecordingLoader::new();
    let err = resolver(&[RESOLVERS, CLIENT], None, loader.clone())
        .resolve(&raw(json!({"dbIntegration": true})))
        .await
        .unwrap_err();

    assert!(validation_message(err).contains(DESCRIPTOR));
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn test_db_integration_defaults_load_in_one_ordered_batch() {
    let loader = RecordingLoader::with_values(&[
        (CLIENT, json!({"endpoint": "http://localhost:4466"})),
        (DESCRIPTOR, json!({"uniqueFieldsByModel": {"User": ["id"]}})),
    ]);
    let resolved = resolver(&[RESOLVERS, CLIENT, DESCRIPTOR], None, loader.clone())
        .resolve(&raw(json!({"dbIntegration": true})))
        .await
        .unwrap();

    let db = resolved.db_integration.expect("integration enabled");
    assert_eq!(db.client_path.as_ref().map(|p| p.as_str()), Some(CLIENT));
    assert_eq!(db.client, json!({"endpoint": "http://localhost:4466"}));
    assert_eq!(
        db.schema_descriptor_path.as_ref().map(|p| p.as_str()),
        Some(DESCRIPTOR)
    );
    assert_eq!(db.schema_descriptor["uniqueFieldsByModel"]["User"], json!(["id"]));
    assert_eq!(db.client_binding_name, "prisma");

    let calls = loader.calls();
    assert_eq!(calls.len(), 1);
    let requested: Vec<(&str, &str)> = calls[0]
        .iter()
        .map(|r| (r.path.as_str(), r.export_name.as_str()))
        .collect();
    assert_eq!(requested, vec![(CLIENT, "prisma"), (DESCRIPTOR, "default")]);
}

#[tokio::test]
async fn test_prisma_yml_auto_enables_integration() {
    let loader = RecordingLoader::new();
    let resolved = resolver(
        &[RESOLVERS, CLIENT, DESCRIPTOR],
        Some("/proj/prisma.yml"),
        loader.clone(),
    )
    .resolve(&RawConfig::default())
    .await
    .unwrap();

    let db = resolved.db_integration.expect("auto-enabled");
    assert_eq!(db.client_binding_name, "prisma");
    assert_eq!(loader.calls().len(), 1);
}

#[tokio::test]
async fn test_prisma_yml_auto_enable_still_checks_defaults() {
    let err = resolver(&[RESOLVERS], Some("/proj/prisma.yml"), RecordingLoader::new())
        .resolve(&RawConfig::default())
        .await
        .unwrap_err();

    assert!(validation_message(err).contains(CLIENT));
}

#[tokio::test]
async fn test_false_flag_without_descriptor_is_disabled() {
    let loader = RecordingLoader::new();
    let resolved = resolver(&[RESOLVERS], None, loader.clone())
        .resolve(&raw(json!({"dbIntegration": false})))
        .await
        .unwrap();

    assert_eq!(resolved.db_integration, None);
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn test_inline_values_skip_loading() {
    let loader = RecordingLoader::new();
    let resolved = resolver(&[RESOLVERS], None, loader.clone())
        .resolve(&raw(json!({
            "dbIntegration": {
                "clientPath": {"endpoint": "http://db"},
                "schemaDescriptorPath": {"uniqueFieldsByModel": {}},
                "clientBindingName": "db"
            }
        })))
        .await
        .unwrap();

    let db = resolved.db_integration.expect("integration enabled");
    assert_eq!(db.client_path, None);
    assert_eq!(db.client, json!({"endpoint": "http://db"}));
    assert_eq!(db.schema_descriptor_path, None);
    assert_eq!(db.client_binding_name, "db");
    assert!(loader.calls().is_empty());
}

#[tokio::test]
async fn test_mixed_inline_and_path_loads_only_path() {
    let loader = RecordingLoader::new();
    let resolved = resolver(&[RESOLVERS, "/proj/generated/info.ts"], None, loader.clone())
        .resolve(&raw(json!({
            "dbIntegration": {
                "clientPath": {"endpoint": "http://db"},
                "schemaDescriptorPath": "./generated/info.ts"
            }
        })))
        .await
        .unwrap();

    let db = resolved.db_integration.expect("integration enabled");
    assert_eq!(
        db.schema_descriptor,
        json!({"path": "/proj/generated/info.ts", "export": "default"})
    );
    let calls = loader.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[0][0].path.as_str(), "/proj/generated/info.ts");
}

#[tokio::test]
async fn test_legacy_prisma_key_is_accepted() {
    let resolved = resolver(
        &[RESOLVERS, CLIENT, "/proj/generated/info.ts"],
        None,
        RecordingLoader::new(),
    )
    .resolve(&raw(json!({
        "prisma": {
            "datamodelInfoPath": "./generated/info.ts",
            "contextClientName": "db"
        }
    })))
    .await
    .unwrap();

    let db = resolved.db_integration.expect("integration enabled");
    assert_eq!(
        db.schema_descriptor_path.as_ref().map(|p| p.as_str()),
        Some("/proj/generated/info.ts")
    );
    assert_eq!(db.client_binding_name, "db");
}

#[tokio::test]
async fn test_build_output_dir_fact_overrides_config() {
    let resolved = ConfigResolver::new(
        ProjectFacts::new("/proj")
            .unwrap()
            .with_build_output_dir("/proj/build"),
    )
    .with_oracle(common::FakeOracle::new(&[RESOLVERS]))
    .with_probe(common::FakeProbe(None))
    .with_loader(RecordingLoader::new())
    .resolve(&raw(json!({"output": {"buildPath": "./out"}})))
    .await
    .unwrap();

    assert_eq!(resolved.output.build_path.as_str(), "/proj/build");
}

#[tokio::test]
async fn test_resolution_is_idempotent_through_to_raw() {
    let existing = [RESOLVERS, "/proj/src/context.ts", CLIENT, DESCRIPTOR];
    let input = raw(json!({"dbIntegration": {"clientBindingName": "db"}}));

    let first = resolver(&existing, None, RecordingLoader::new())
        .resolve(&input)
        .await
        .unwrap();
    let again = resolver(&existing, None, RecordingLoader::new())
        .resolve(&first.to_raw(&"/proj".into()))
        .await
        .unwrap();

    assert_eq!(first, again);
}

#[tokio::test]
async fn test_to_raw_keeps_inline_values_inline() {
    let existing = [RESOLVERS];
    let input = raw(json!({
        "dbIntegration": {
            "clientPath": {"endpoint": "http://db"},
            "schemaDescriptorPath": {"uniqueFieldsByModel": {}}
        }
    }));

    let first = resolver(&existing, None, RecordingLoader::new())
        .resolve(&input)
        .await
        .unwrap();
    let rebuilt = first.to_raw(&"/proj".into());

    let Some(DbIntegrationInput::Overrides(DbOverrides { client_path, .. })) =
        &rebuilt.db_integration
    else {
        panic!("expected overrides");
    };
    assert_eq!(
        client_path,
        &Some(ModuleSource::Inline(json!({"endpoint": "http://db"})))
    );
}

#[tokio::test]
async fn test_repeated_resolution_is_stable() {
    let resolver = resolver(&[RESOLVERS, CLIENT, DESCRIPTOR], None, RecordingLoader::new());
    let input = raw(json!({"dbIntegration": true}));

    let first = resolver.resolve(&input).await.unwrap();
    let second = resolver.resolve(&input).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_loader_arc_is_shared() {
    let loader = RecordingLoader::new();
    let resolver = resolver(&[RESOLVERS, CLIENT, DESCRIPTOR], None, Arc::clone(&loader));
    resolver.resolve(&raw(json!({"dbIntegration": true}))).await.unwrap();
    resolver.resolve(&raw(json!({"dbIntegration": true}))).await.unwrap();
    assert_eq!(loader.calls().len(), 2);
}
