//! Registry client used by the retention workers
//!
//! [`RegistryClient`] bundles the catalog, tag and manifest operations over one
//! shared transport. It is read-only state and is shared between workers behind
//! an `Arc`.

use crate::cli::config::{AuthConfig, RegistryConfig};
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::model::{ItemKind, RepositoryCatalog, RepositoryManifestSet, RepositoryTagSet};
use crate::registry::operations::{CatalogOperations, ManifestOperations, TagOperations};
use crate::registry::transport::{HttpTransport, RegistryTransport};
use std::sync::Arc;

pub struct RegistryClientBuilder {
    registry: RegistryConfig,
    auth_config: Option<AuthConfig>,
    transport: Option<Arc<dyn RegistryTransport>>,
    output: Logger,
}

impl RegistryClientBuilder {
    pub fn new(registry: RegistryConfig) -> Self {
        Self {
            registry,
            auth_config: None,
            transport: None,
            output: Logger::new(false),
        }
    }

    pub fn with_auth(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = Some(auth_config);
        self
    }

    /// Use a custom transport instead of the HTTP one
    pub fn with_transport(mut self, transport: Arc<dyn RegistryTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_logger(mut self, output: Logger) -> Self {
        self.output = output;
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let auth = self.auth_config.unwrap_or_default();
                Arc::new(HttpTransport::new(&self.registry, auth)?)
            }
        };

        let address = self.registry.address.clone();
        Ok(RegistryClient {
            catalog: CatalogOperations::new(
                transport.clone(),
                address.clone(),
                self.output.clone(),
            ),
            tags: TagOperations::new(transport.clone(), address.clone(), self.output.clone()),
            manifests: ManifestOperations::new(transport, address.clone(), self.output),
            address,
        })
    }
}

#[derive(Clone)]
pub struct RegistryClient {
    catalog: CatalogOperations,
    tags: TagOperations,
    manifests: ManifestOperations,
    address: String,
}

impl RegistryClient {
    pub fn builder(registry: RegistryConfig) -> RegistryClientBuilder {
        RegistryClientBuilder::new(registry)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn list_repositories(&self) -> Result<RepositoryCatalog> {
        self.catalog.list_repositories().await
    }

    pub async fn list_tags(&self, repository: &str) -> Result<RepositoryTagSet> {
        self.tags.list_tags(repository).await
    }

    pub async fn list_manifests(&self, repository: &str) -> Result<RepositoryManifestSet> {
        self.manifests.list_manifests(repository).await
    }

    /// Delete a tag by name or a manifest by digest
    pub async fn delete(&self, kind: ItemKind, repository: &str, reference: &str) -> Result<()> {
        match kind {
            ItemKind::Tag => self.tags.delete_tag(repository, reference).await,
            ItemKind::Manifest => self.manifests.delete_manifest(repository, reference).await,
        }
    }
}
