//! Registry module for container registry interactions
//!
//! This module provides the transport, wire types and client logic for the
//! catalog, tag and manifest endpoints of an Azure Container Registry style API.

pub mod client;
pub mod model;
pub mod operations;
pub mod transport;

pub use client::{RegistryClient, RegistryClientBuilder};
pub use model::{
    ChangeableAttributes, ItemKind, Manifest, RepositoryCatalog, RepositoryManifestSet,
    RepositoryTagSet, Tag,
};
pub use transport::{HttpTransport, RegistryTransport, TransportResponse};
