//! Shared test utilities for the yoga-config workspace.
//!
//! This crate provides standardised project fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for on-disk yoga project layouts

pub mod project;

pub use project::TestProject;
