//! User-authored configuration as read from `yoga.config.*`

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The configuration as the user wrote it. Every field may be omitted.
///
/// Paths are relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    /// Module exporting the GraphQL context factory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_path: Option<String>,

    /// Directory holding the resolver definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolvers_path: Option<String>,

    /// Entry point used instead of the generated server when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_file_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<RawOutput>,

    /// `true`, an override object, or absent for auto-detection
    #[serde(default, alias = "prisma", skip_serializing_if = "Option::is_none")]
    pub db_integration: Option<DbIntegrationInput>,
}

/// Generated artifact locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typegen_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_path: Option<String>,
}

/// The shapes accepted for the database integration key.
///
/// `false` is accepted and treated like an absent key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DbIntegrationInput {
    Flag(bool),
    Overrides(DbOverrides),
}

// Dispatch on the JSON type so errors inside an override object name the
// offending key instead of failing every untagged variant.
impl<'de> Deserialize<'de> for DbIntegrationInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Ok(Self::Flag(flag)),
            value @ Value::Object(_) => DbOverrides::deserialize(value)
                .map(Self::Overrides)
                .map_err(|e| de::Error::custom(format!("invalid dbIntegration: {e}"))),
            other => Err(de::Error::custom(format!(
                "invalid dbIntegration: expected `true`, `false` or an object, found {other}"
            ))),
        }
    }
}

/// Explicit settings for an enabled database integration.
///
/// The keys of the older Prisma-specific config shape are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DbOverrides {
    #[serde(default, alias = "client", skip_serializing_if = "Option::is_none")]
    pub client_path: Option<ModuleSource>,

    #[serde(
        default,
        alias = "datamodelInfoPath",
        alias = "datamodel",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_descriptor_path: Option<ModuleSource>,

    /// Name under which the client is exposed on the GraphQL context
    #[serde(
        default,
        alias = "contextClientName",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_binding_name: Option<String>,
}

/// Either a path to a module or the module's value supplied inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleSource {
    Path(String),
    Inline(Value),
}

impl ModuleSource {
    /// The path, unless the value was supplied inline.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path.as_str()),
            Self::Inline(_) => None,
        }
    }
}
