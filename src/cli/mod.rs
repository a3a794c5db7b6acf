//! Command line interface module
//!
//! Argument parsing with environment fallbacks, validation into a
//! [`RetentionConfig`], and the [`Runner`] driving one cleanup run.

pub mod args;
pub mod config;
pub mod runner;

pub use args::Args;
pub use config::{AuthConfig, RegistryConfig, RetentionConfig};
pub use runner::Runner;
