//! Resolution of a raw config against a project
//!
//! The `ConfigResolver` computes each field independently from the raw
//! value, its default and its existence policy.

use std::sync::Arc;

use yoga_fs::NormalizedPath;

use super::defaults::{
    self, BUILD_PATH, CONTEXT_PATH, EJECT_FILE_PATH, RESOLVERS_PATH, SCHEMA_PATH, TYPEGEN_PATH,
};
use super::discovery::{self, ConfigSource};
use super::prisma::PrismaResolver;
use super::raw::{RawConfig, RawOutput};
use super::resolved::{ResolvedConfig, ResolvedOutput};
use super::validate::{FsOracle, PathOracle, not_found, optional_path, required_path};
use crate::Result;
use crate::loader::{AuxiliaryLoader, LoadContext, ModuleLoader};
use crate::probe::{PresenceProbe, PrismaYmlProbe};
use crate::project::ProjectFacts;

/// Resolves raw configuration for one project
///
/// Holds the project facts and the three collaborators resolution depends
/// on. It keeps no state between calls: resolving the same input against
/// the same filesystem yields the same result.
pub struct ConfigResolver {
    facts: ProjectFacts,
    oracle: Arc<dyn PathOracle>,
    probe: Arc<dyn PresenceProbe>,
    loader: Arc<dyn AuxiliaryLoader>,
}

impl ConfigResolver {
    /// Create a resolver backed by the real filesystem, the `prisma.yml`
    /// probe and the extension-dispatching module loader.
    pub fn new(facts: ProjectFacts) -> Self {
        Self {
            facts,
            oracle: Arc::new(FsOracle),
            probe: Arc::new(PrismaYmlProbe),
            loader: Arc::new(ModuleLoader::default()),
        }
    }

    /// Replace the path existence oracle.
    pub fn with_oracle(mut self, oracle: impl PathOracle + 'static) -> Self {
        self.oracle = Arc::new(oracle);
        self
    }

    /// Replace the database descriptor probe.
    pub fn with_probe(mut self, probe: impl PresenceProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Replace the auxiliary module loader.
    pub fn with_loader(mut self, loader: Arc<dyn AuxiliaryLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Get the project facts this resolver works against
    pub fn facts(&self) -> &ProjectFacts {
        &self.facts
    }

    fn root(&self) -> &NormalizedPath {
        &self.facts.project_dir
    }

    /// Resolve `raw` into a fully populated configuration
    ///
    /// Fails with [`Error::ConfigValidation`](crate::Error::ConfigValidation)
    /// on the first field that violates its existence policy. Nothing is
    /// returned on failure.
    pub async fn resolve(&self, raw: &RawConfig) -> Result<ResolvedConfig> {
        tracing::debug!(project_dir = %self.root(), "Resolving config");

        let context_path = self.optional(raw.context_path.as_deref(), CONTEXT_PATH, "contextPath")?;
        let resolvers_path =
            self.required(raw.resolvers_path.as_deref(), RESOLVERS_PATH, "resolversPath")?;
        let eject_file_path =
            self.optional(raw.eject_file_path.as_deref(), EJECT_FILE_PATH, "ejectFilePath")?;
        let output = self.output(raw.output.as_ref());

        let db_integration = PrismaResolver {
            facts: &self.facts,
            oracle: self.oracle.as_ref(),
            probe: self.probe.as_ref(),
            loader: self.loader.as_ref(),
        }
        .resolve(raw.db_integration.as_ref(), &output.build_path)
        .await?;

        Ok(ResolvedConfig {
            context_path,
            resolvers_path,
            eject_file_path,
            output,
            db_integration,
        })
    }

    /// Locate the project's config file, load it and resolve it
    ///
    /// A project without a config file resolves as if it had an empty one.
    pub async fn load_and_resolve(&self) -> Result<ResolvedConfig> {
        let (_, raw) = self.load_raw().await?;
        self.resolve(&raw).await
    }

    /// Locate and load the project's config file without resolving it.
    pub async fn load_raw(&self) -> Result<(Option<ConfigSource>, RawConfig)> {
        let ctx = LoadContext::new(self.root().clone(), self.default_build_path());
        discovery::load_raw_config(self.root(), self.loader.as_ref(), &ctx).await
    }

    fn optional(
        &self,
        input: Option<&str>,
        default: &str,
        field: &str,
    ) -> Result<Option<NormalizedPath>> {
        let path = defaults::path_or_default(self.root(), input, default);
        let user_supplied = input.is_some_and(|value| !value.is_empty());
        let message = not_found(field, &path);
        let resolved = optional_path(self.oracle.as_ref(), path, user_supplied, message)?;
        tracing::debug!(field, path = ?resolved.as_ref().map(NormalizedPath::as_str), "Resolved optional path");
        Ok(resolved)
    }

    fn required(&self, input: Option<&str>, default: &str, field: &str) -> Result<NormalizedPath> {
        let path = defaults::path_or_default(self.root(), input, default);
        let message = not_found(field, &path);
        let resolved = required_path(self.oracle.as_ref(), path, message)?;
        tracing::debug!(field, path = %resolved, "Resolved required path");
        Ok(resolved)
    }

    fn output(&self, output: Option<&RawOutput>) -> ResolvedOutput {
        let typegen = output.and_then(|o| o.typegen_path.as_deref());
        let schema = output.and_then(|o| o.schema_path.as_deref());
        let build = output.and_then(|o| o.build_path.as_deref());

        let build_path = match &self.facts.build_output_dir {
            Some(dir) => dir.clone(),
            None => defaults::path_or_default(self.root(), build, BUILD_PATH),
        };

        ResolvedOutput {
            typegen_path: defaults::path_or_default(self.root(), typegen, TYPEGEN_PATH),
            schema_path: defaults::path_or_default(self.root(), schema, SCHEMA_PATH),
            build_path,
        }
    }

    /// Build directory used before a config file has been read.
    fn default_build_path(&self) -> NormalizedPath {
        self.facts
            .build_output_dir
            .clone()
            .unwrap_or_else(|| self.root().join(BUILD_PATH))
    }
}
