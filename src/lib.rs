//! Dusty Library
//!
//! Retention cleanup for container registries: for every repository, keep the
//! newest tags (and optionally manifests) and delete the rest.

pub mod cli;
pub mod concurrency;
pub mod error;
pub mod logging;
pub mod registry;
pub mod retention;

pub use error::{RegistryError, Result};
pub use logging::Logger;
