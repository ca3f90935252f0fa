//! Configuration resolution
//!
//! A [`RawConfig`] is what the user wrote; a [`ResolvedConfig`] is what the
//! generators consume. Resolution fills every gap with a default, joins
//! every path onto the project root and enforces a per-field existence
//! policy:
//!
//! | Field | Policy | Default |
//! |---|---|---|
//! | `contextPath` | optional | `./src/context.ts` |
//! | `resolversPath` | required | `./src/graphql/` |
//! | `ejectFilePath` | optional | `./src/index.ts` |
//! | `output.typegenPath` | unchecked | `./yoga/nexus.ts` |
//! | `output.schemaPath` | unchecked | `./src/schema.graphql` |
//! | `output.buildPath` | unchecked | tsconfig `outDir`, else `./dist` |
//!
//! The Prisma integration is resolved last because its loader needs the
//! resolved build directory.
//!
//! # Example
//!
//! ```ignore
//! use yoga_core::config::{ConfigResolver, RawConfig};
//! use yoga_core::ProjectFacts;
//!
//! let resolver = ConfigResolver::new(ProjectFacts::new("/path/to/project")?);
//! let raw: RawConfig = serde_json::from_str(r#"{ "contextPath": "./src/ctx.ts" }"#)?;
//! let resolved = resolver.resolve(&raw).await?;
//! ```

pub mod defaults;
mod discovery;
mod prisma;
mod raw;
mod resolved;
mod resolver;
pub mod validate;

pub use discovery::{ConfigSource, find_config_file, load_raw_config};
pub use prisma::DbIntegrationMode;
pub use raw::{DbIntegrationInput, DbOverrides, ModuleSource, RawConfig, RawOutput};
pub use resolved::{ResolvedConfig, ResolvedDbIntegration, ResolvedOutput};
pub use resolver::ConfigResolver;
pub use validate::{FsOracle, PathOracle};
