//! Per-repository retention run
//!
//! A worker walks `Fetching-Tags → Deleting-Tags → Fetching-Manifests →
//! Deleting-Manifests → Done` for one repository. Every state is entered even
//! when a listing comes back empty. The manifest states only run when manifest
//! retention is enabled. Any error ends the worker and is fatal for the run.

use crate::error::Result;
use crate::logging::Logger;
use crate::registry::RegistryClient;
use crate::retention::deleter::{DeleteOutcome, Deleter};
use crate::retention::policy::{Retainable, RetentionPolicy, Selection};
use std::sync::Arc;

/// Result of one tag or manifest phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseReport {
    pub listed: usize,
    pub retained: usize,
    pub outcome: DeleteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub repository: String,
    pub tags: PhaseReport,
    pub manifests: Option<PhaseReport>,
}

impl WorkerReport {
    pub fn deleted(&self) -> usize {
        self.tags.outcome.deleted.len()
            + self.manifests.as_ref().map_or(0, |m| m.outcome.deleted.len())
    }

    pub fn would_delete(&self) -> usize {
        self.tags.outcome.would_delete.len()
            + self
                .manifests
                .as_ref()
                .map_or(0, |m| m.outcome.would_delete.len())
    }
}

#[derive(Clone)]
pub struct RepositoryWorker {
    client: Arc<RegistryClient>,
    policy: RetentionPolicy,
    deleter: Deleter,
    manage_manifests: bool,
    output: Logger,
}

impl RepositoryWorker {
    pub fn new(
        client: Arc<RegistryClient>,
        policy: RetentionPolicy,
        dry_run: bool,
        manage_manifests: bool,
        output: Logger,
    ) -> Self {
        let deleter = Deleter::new(client.clone(), dry_run, output.clone());
        Self {
            client,
            policy,
            deleter,
            manage_manifests,
            output,
        }
    }

    pub async fn run(&self, repository: &str) -> Result<WorkerReport> {
        let tag_set = self.client.list_tags(repository).await?;
        let tags = self.policy.apply(tag_set.tags);
        self.log_listing(repository, "Tag", &tags);
        let tags = self.delete_phase(repository, tags).await?;

        let manifests = if self.manage_manifests {
            let manifest_set = self.client.list_manifests(repository).await?;
            let manifests = self.policy.apply(manifest_set.manifests);
            self.log_listing(repository, "Manifest", &manifests);
            Some(self.delete_phase(repository, manifests).await?)
        } else {
            None
        };

        Ok(WorkerReport {
            repository: repository.to_string(),
            tags,
            manifests,
        })
    }

    async fn delete_phase<T: Retainable>(
        &self,
        repository: &str,
        selection: Selection<T>,
    ) -> Result<PhaseReport> {
        let outcome = self
            .deleter
            .delete_all(repository, &selection.delete)
            .await?;

        Ok(PhaseReport {
            listed: selection.delete.len() + selection.retain.len(),
            retained: selection.retain.len(),
            outcome,
        })
    }

    fn log_listing<T: Retainable>(&self, repository: &str, label: &str, selection: &Selection<T>) {
        if !self.output.verbose {
            return;
        }

        let items: Vec<String> = selection
            .delete
            .iter()
            .chain(selection.retain.iter())
            .map(|item| format!("{} {} \t {}", label, item.reference(), item.created_at()))
            .collect();
        self.output.list(&format!("Repository: {}", repository), &items);
    }
}
