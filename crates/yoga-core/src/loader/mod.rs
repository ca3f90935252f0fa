//! Auxiliary module loading
//!
//! Resolution occasionally needs the *value* a project file exports rather
//! than its path: the datamodel info module, the Prisma client, or a
//! `yoga.config.ts`. An [`AuxiliaryLoader`] turns `(path, export)` pairs
//! into JSON values.
//!
//! - [`DataModuleLoader`] parses JSON, YAML and TOML files directly
//! - [`NodeModuleLoader`] evaluates scripts in a Node.js process
//! - [`ModuleLoader`] dispatches between the two by extension

mod data;
mod dispatch;
mod node;

pub use data::DataModuleLoader;
pub use dispatch::ModuleLoader;
pub use node::NodeModuleLoader;

use async_trait::async_trait;
use serde_json::Value;
use yoga_fs::NormalizedPath;

use crate::Result;

/// Name of the default export.
pub const DEFAULT_EXPORT: &str = "default";

/// One export to read from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub path: NormalizedPath,
    pub export_name: String,
}

impl LoadRequest {
    pub fn new(path: NormalizedPath, export_name: impl Into<String>) -> Self {
        Self {
            path,
            export_name: export_name.into(),
        }
    }

    /// Request the default export of `path`.
    pub fn default_export(path: NormalizedPath) -> Self {
        Self::new(path, DEFAULT_EXPORT)
    }
}

/// Where loading happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadContext {
    pub project_dir: NormalizedPath,
    /// Resolved build directory; script loaders compile into it
    pub output_dir: NormalizedPath,
}

impl LoadContext {
    pub fn new(project_dir: NormalizedPath, output_dir: NormalizedPath) -> Self {
        Self {
            project_dir,
            output_dir,
        }
    }
}

/// Loads named exports from project files.
#[async_trait]
pub trait AuxiliaryLoader: Send + Sync {
    /// Load every request, returning one value per request in the same order.
    ///
    /// Requests are evaluated in order; an implementation must not reorder
    /// evaluation since modules may have side effects.
    async fn load(&self, requests: &[LoadRequest], ctx: &LoadContext) -> Result<Vec<Value>>;
}
