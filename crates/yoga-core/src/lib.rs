//! Configuration resolution for yoga projects
//!
//! Turns a partial, user-authored `yoga.config.*` plus ambient project
//! state into a fully resolved configuration for the code generators:
//!
//! - **Defaulting**: every path falls back to a documented default joined
//!   onto the project root
//! - **Validation**: required paths must exist, optional paths must exist
//!   when the user named them explicitly
//! - **Prisma integration**: enabled explicitly or auto-detected from a
//!   `prisma.yml`, with its client and datamodel info loaded through an
//!   [`AuxiliaryLoader`]
//!
//! # Architecture
//!
//! ```text
//!                 yoga-cli
//!                    |
//!                yoga-core
//!     +--------+-----+-----+---------+
//!     |        |           |         |
//!  config   loader      probe     project
//!     |
//!  yoga-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use yoga_core::{ConfigResolver, ProjectFacts, RawConfig};
//!
//! let facts = ProjectFacts::new("/path/to/project")?;
//! let resolved = ConfigResolver::new(facts).resolve(&RawConfig::default()).await?;
//! println!("resolvers at {}", resolved.resolvers_path);
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod probe;
pub mod project;

pub use config::{
    ConfigResolver, ConfigSource, DbIntegrationInput, DbIntegrationMode, DbOverrides,
    FsOracle, ModuleSource, PathOracle, RawConfig, RawOutput, ResolvedConfig,
    ResolvedDbIntegration, ResolvedOutput,
};
pub use error::{Error, Result};
pub use loader::{AuxiliaryLoader, LoadContext, LoadRequest, ModuleLoader};
pub use probe::{PresenceProbe, PrismaYmlProbe};
pub use project::{ProjectDescriptor, ProjectFacts, ProjectInfo, TsConfigDescriptor};

use std::path::Path;

/// Resolve the project containing `cwd` with the stock collaborators.
///
/// Locates the project through `tsconfig.json`, reads the project's
/// config file if there is one, and resolves it.
pub async fn resolve_project(cwd: &Path) -> Result<ResolvedConfig> {
    let facts = ProjectFacts::discover(cwd, &TsConfigDescriptor)?;
    ConfigResolver::new(facts).load_and_resolve().await
}
