//! Tag operations
//!
//! - Tag listing (`GET /acr/v1/{repo}/_tags`)
//! - Tag deletion by name (`DELETE /acr/v1/{repo}/_tags/{tag}`)

use crate::error::handlers::HttpErrorHandler;
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::model::{ItemKind, RepositoryTagSet};
use crate::registry::operations::decode;
use crate::registry::transport::RegistryTransport;
use reqwest::Method;
use std::sync::Arc;

#[derive(Clone)]
pub struct TagOperations {
    transport: Arc<dyn RegistryTransport>,
    address: String,
    output: Logger,
}

impl TagOperations {
    pub fn new(transport: Arc<dyn RegistryTransport>, address: String, output: Logger) -> Self {
        Self {
            transport,
            address,
            output,
        }
    }

    pub async fn list_tags(&self, repository: &str) -> Result<RepositoryTagSet> {
        let url = format!("{}/acr/v1/{}/_tags", self.address, repository);
        let operation = format!("{} repository tags", repository);
        self.output
            .verbose(&format!("Getting tags list for {}", repository));

        let response = self.transport.execute(Method::GET, &url, &operation).await?;
        HttpErrorHandler::check_listing(response.status, &operation)?;
        decode(&response.body, &operation)
    }

    pub async fn delete_tag(&self, repository: &str, tag: &str) -> Result<()> {
        let url = format!("{}/acr/v1/{}/_tags/{}", self.address, repository, tag);
        let operation = format!("deleting tag {}", tag);

        let response = self
            .transport
            .execute(Method::DELETE, &url, &operation)
            .await?;
        HttpErrorHandler::check_delete(response.status, repository, ItemKind::Tag, tag)
    }
}
