//! Manifest operations
//!
//! - Manifest listing (`GET /acr/v1/{repo}/_manifests`)
//! - Manifest deletion by digest (`DELETE /v2/{repo}/manifests/{digest}`)

use crate::error::handlers::HttpErrorHandler;
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::model::{ItemKind, RepositoryManifestSet};
use crate::registry::operations::decode;
use crate::registry::transport::RegistryTransport;
use reqwest::Method;
use std::sync::Arc;

#[derive(Clone)]
pub struct ManifestOperations {
    transport: Arc<dyn RegistryTransport>,
    address: String,
    output: Logger,
}

impl ManifestOperations {
    pub fn new(transport: Arc<dyn RegistryTransport>, address: String, output: Logger) -> Self {
        Self {
            transport,
            address,
            output,
        }
    }

    pub async fn list_manifests(&self, repository: &str) -> Result<RepositoryManifestSet> {
        let url = format!("{}/acr/v1/{}/_manifests", self.address, repository);
        let operation = format!("{} repository manifests", repository);
        self.output
            .verbose(&format!("Getting manifests list for {}", repository));

        let response = self.transport.execute(Method::GET, &url, &operation).await?;
        HttpErrorHandler::check_listing(response.status, &operation)?;
        decode(&response.body, &operation)
    }

    /// Deletes go through the distribution API, not `acr/v1`
    pub async fn delete_manifest(&self, repository: &str, digest: &str) -> Result<()> {
        let url = format!("{}/v2/{}/manifests/{}", self.address, repository, digest);
        let operation = format!("deleting manifest {}", digest);

        let response = self
            .transport
            .execute(Method::DELETE, &url, &operation)
            .await?;
        HttpErrorHandler::check_delete(response.status, repository, ItemKind::Manifest, digest)
    }
}
