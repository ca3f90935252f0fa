//! Database (Prisma) integration resolution

use serde_json::Value;
use yoga_fs::NormalizedPath;

use super::defaults::{
    self, CONTEXT_CLIENT_NAME, DATAMODEL_INFO_EXPORT, DATAMODEL_INFO_PATH, PRISMA_CLIENT_EXPORT,
    PRISMA_CLIENT_PATH,
};
use super::raw::{DbIntegrationInput, DbOverrides, ModuleSource};
use super::resolved::ResolvedDbIntegration;
use super::validate::{PathOracle, not_found, required_path};
use crate::loader::{AuxiliaryLoader, LoadContext, LoadRequest};
use crate::probe::PresenceProbe;
use crate::project::ProjectFacts;
use crate::{Error, Result};

/// Whether and how the integration is switched on.
#[derive(Debug, Clone, PartialEq)]
pub enum DbIntegrationMode {
    /// Not configured and no descriptor on disk
    Disabled,
    /// `true`, or detected through the presence probe
    EnabledDefault,
    /// An explicit override object
    EnabledWithOverrides(DbOverrides),
}

impl DbIntegrationMode {
    /// Classify the user input, consulting the probe only when the key is absent.
    pub fn detect(input: Option<&DbIntegrationInput>, probe: impl FnOnce() -> bool) -> Self {
        match input {
            Some(DbIntegrationInput::Flag(true)) => Self::EnabledDefault,
            Some(DbIntegrationInput::Overrides(overrides)) => {
                Self::EnabledWithOverrides(overrides.clone())
            }
            Some(DbIntegrationInput::Flag(false)) | None => {
                if probe() {
                    Self::EnabledDefault
                } else {
                    Self::Disabled
                }
            }
        }
    }

    /// The overrides to apply, or `None` when disabled.
    pub fn into_overrides(self) -> Option<DbOverrides> {
        match self {
            Self::Disabled => None,
            Self::EnabledDefault => Some(DbOverrides::default()),
            Self::EnabledWithOverrides(overrides) => Some(overrides),
        }
    }
}

/// A module either already materialized or waiting to be loaded from disk.
enum Pending {
    Inline(Value),
    Load(NormalizedPath),
}

impl Pending {
    fn path(&self) -> Option<&NormalizedPath> {
        match self {
            Self::Load(path) => Some(path),
            Self::Inline(_) => None,
        }
    }
}

pub(super) struct PrismaResolver<'a> {
    pub facts: &'a ProjectFacts,
    pub oracle: &'a dyn PathOracle,
    pub probe: &'a dyn PresenceProbe,
    pub loader: &'a dyn AuxiliaryLoader,
}

impl PrismaResolver<'_> {
    pub async fn resolve(
        &self,
        input: Option<&DbIntegrationInput>,
        output_dir: &NormalizedPath,
    ) -> Result<Option<ResolvedDbIntegration>> {
        let mode = DbIntegrationMode::detect(input, || match self.probe.detect(self.facts) {
            Some(descriptor) => {
                tracing::debug!(%descriptor, "Prisma descriptor found, enabling integration");
                true
            }
            None => false,
        });
        let Some(overrides) = mode.into_overrides() else {
            tracing::debug!("Database integration disabled");
            return Ok(None);
        };

        // Every path is validated before anything is loaded.
        let client = self.pending(
            overrides.client_path.as_ref(),
            PRISMA_CLIENT_PATH,
            "dbIntegration.clientPath",
        )?;
        let descriptor = self.pending(
            overrides.schema_descriptor_path.as_ref(),
            DATAMODEL_INFO_PATH,
            "dbIntegration.schemaDescriptorPath",
        )?;
        let client_binding_name =
            defaults::value_or_default(overrides.client_binding_name.as_deref(), CONTEXT_CLIENT_NAME)
                .to_string();

        let mut requests = Vec::with_capacity(2);
        if let Some(path) = client.path() {
            requests.push(LoadRequest::new(path.clone(), PRISMA_CLIENT_EXPORT));
        }
        if let Some(path) = descriptor.path() {
            requests.push(LoadRequest::new(path.clone(), DATAMODEL_INFO_EXPORT));
        }

        let loaded: Vec<Value> = if requests.is_empty() {
            Vec::new()
        } else {
            let ctx = LoadContext::new(self.facts.project_dir.clone(), output_dir.clone());
            let values = self.loader.load(&requests, &ctx).await?;
            if values.len() != requests.len() {
                return Err(Error::LoaderOutput {
                    message: format!(
                        "expected {} values, loader returned {}",
                        requests.len(),
                        values.len()
                    ),
                });
            }
            values
        };
        let mut loaded = loaded.into_iter();

        let (client_path, client) = take(client, &mut loaded)?;
        let (schema_descriptor_path, schema_descriptor) = take(descriptor, &mut loaded)?;

        Ok(Some(ResolvedDbIntegration {
            client_path,
            client,
            schema_descriptor_path,
            schema_descriptor,
            client_binding_name,
        }))
    }

    fn pending(
        &self,
        source: Option<&ModuleSource>,
        default: &str,
        field: &str,
    ) -> Result<Pending> {
        match source {
            Some(ModuleSource::Inline(value)) => Ok(Pending::Inline(value.clone())),
            other => self.required(other.and_then(ModuleSource::as_path), default, field),
        }
    }

    fn required(&self, input: Option<&str>, default: &str, field: &str) -> Result<Pending> {
        let path = defaults::path_or_default(&self.facts.project_dir, input, default);
        let message = not_found(field, &path);
        required_path(self.oracle, path, message).map(Pending::Load)
    }
}

fn take(
    pending: Pending,
    loaded: &mut impl Iterator<Item = Value>,
) -> Result<(Option<NormalizedPath>, Value)> {
    match pending {
        Pending::Inline(value) => Ok((None, value)),
        Pending::Load(path) => {
            let value = loaded.next().ok_or_else(|| Error::LoaderOutput {
                message: format!("no value returned for {}", path),
            })?;
            Ok((Some(path), value))
        }
    }
}
