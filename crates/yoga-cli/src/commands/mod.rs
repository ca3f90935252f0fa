//! Command implementations for yoga-cli

pub mod config;

pub use config::{run_check, run_paths, run_resolve};
