//! Runner: catalog listing, fan-out and final report

use crate::cli::config::RetentionConfig;
use crate::concurrency::{FanOut, RunSummary};
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::{RegistryClient, RegistryTransport};
use crate::retention::RepositoryWorker;
use std::sync::Arc;

pub struct Runner {
    config: RetentionConfig,
    output: Logger,
    transport: Option<Arc<dyn RegistryTransport>>,
}

impl Runner {
    pub fn new(config: RetentionConfig) -> Self {
        let output = Logger::new(config.verbose);
        Self {
            config,
            output,
            transport: None,
        }
    }

    /// Replace the HTTP transport
    pub fn with_transport(mut self, transport: Arc<dyn RegistryTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        self.output.verbose(&format!("Config being used: {:?}", self.config));
        if self.config.dry_run {
            self.output.info("Dry run mode - no deletes will be issued");
        }
        if self.config.manage_manifests {
            self.output.warning(
                "Tags and manifests are pruned independently with the same limit; \
                 a kept tag may point at a deleted manifest",
            );
        }

        let client = Arc::new(self.create_registry_client()?);
        let catalog = client.list_repositories().await?;
        self.output.info(&format!(
            "Processing {} repositories in {}",
            catalog.repositories.len(),
            client.address()
        ));

        let worker = RepositoryWorker::new(
            client,
            self.config.policy,
            self.config.dry_run,
            self.config.manage_manifests,
            self.output.clone(),
        );
        let summary = FanOut::new(worker, self.output.clone())
            .with_max_concurrent(self.config.max_concurrent)
            .run(catalog)
            .await?;

        self.output.summary_kv(
            "Summary",
            &[
                ("Repositories", summary.repositories.to_string()),
                ("Deleted", summary.deleted.to_string()),
                ("Would delete", summary.would_delete.to_string()),
                ("Elapsed", self.output.elapsed()),
            ],
        );
        self.output.success("Complete");
        Ok(summary)
    }

    fn create_registry_client(&self) -> Result<RegistryClient> {
        let mut builder = RegistryClient::builder(self.config.registry.clone())
            .with_auth(self.config.auth.clone())
            .with_logger(self.output.clone());
        if let Some(transport) = &self.transport {
            builder = builder.with_transport(transport.clone());
        }
        builder.build()
    }
}
