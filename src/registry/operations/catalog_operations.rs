//! Catalog operations: `GET /acr/v1/_catalog`

use crate::error::handlers::HttpErrorHandler;
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::model::RepositoryCatalog;
use crate::registry::operations::decode;
use crate::registry::transport::RegistryTransport;
use reqwest::Method;
use std::sync::Arc;

const OPERATION: &str = "repository names";

#[derive(Clone)]
pub struct CatalogOperations {
    transport: Arc<dyn RegistryTransport>,
    address: String,
    output: Logger,
}

impl CatalogOperations {
    pub fn new(transport: Arc<dyn RegistryTransport>, address: String, output: Logger) -> Self {
        Self {
            transport,
            address,
            output,
        }
    }

    /// List every repository in the registry. Only the first page is read.
    pub async fn list_repositories(&self) -> Result<RepositoryCatalog> {
        let url = format!("{}/acr/v1/_catalog", self.address);
        self.output
            .verbose(&format!("Obtaining repository names from {}", url));

        let response = self.transport.execute(Method::GET, &url, OPERATION).await?;
        HttpErrorHandler::check_listing(response.status, OPERATION)?;

        let catalog: RepositoryCatalog = decode(&response.body, OPERATION)?;
        self.output.verbose(&format!(
            "Found {} repositories",
            catalog.repositories.len()
        ));
        Ok(catalog)
    }
}
