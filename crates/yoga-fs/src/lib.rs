//! Filesystem layer for yoga-config
//!
//! Provides normalized absolute path handling and format-agnostic loading of
//! configuration and data files.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::YogaPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
