//! One task per repository, joined before the run reports completion

use crate::error::{RegistryError, Result};
use crate::logging::Logger;
use crate::registry::model::RepositoryCatalog;
use crate::retention::worker::{RepositoryWorker, WorkerReport};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Totals over every finished worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub repositories: usize,
    pub deleted: usize,
    pub would_delete: usize,
}

impl RunSummary {
    fn record(&mut self, report: &WorkerReport) {
        self.repositories += 1;
        self.deleted += report.deleted();
        self.would_delete += report.would_delete();
    }
}

pub struct FanOut {
    worker: RepositoryWorker,
    max_concurrent: Option<usize>,
    output: Logger,
}

impl FanOut {
    pub fn new(worker: RepositoryWorker, output: Logger) -> Self {
        Self {
            worker,
            max_concurrent: None,
            output,
        }
    }

    /// Cap the number of repositories processed at once. `None` means no cap.
    pub fn with_max_concurrent(mut self, max_concurrent: Option<usize>) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Run one worker per repository name and wait for all of them.
    ///
    /// The first failing worker aborts every other in-flight worker and its
    /// error is returned. Deletes that already went through stay deleted.
    pub async fn run(&self, catalog: RepositoryCatalog) -> Result<RunSummary> {
        let semaphore = self.max_concurrent.map(|n| Arc::new(Semaphore::new(n)));
        let mut tasks = JoinSet::new();

        for repository in catalog.repositories {
            let worker = self.worker.clone();
            let semaphore = semaphore.clone();

            tasks.spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => Some(semaphore.acquire_owned().await.map_err(|e| {
                        RegistryError::Worker(format!("Failed to acquire worker permit: {}", e))
                    })?),
                    None => None,
                };
                worker.run(&repository).await
            });
        }

        self.output
            .verbose(&format!("Started {} repository workers", tasks.len()));

        let mut summary = RunSummary::default();
        while let Some(joined) = tasks.join_next().await {
            let report = match joined {
                Ok(Ok(report)) => report,
                Ok(Err(e)) => {
                    tasks.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    tasks.abort_all();
                    return Err(e.into());
                }
            };

            self.output.detail(&format!(
                "Finished {}: {} deleted, {} would delete",
                report.repository,
                report.deleted(),
                report.would_delete()
            ));
            summary.record(&report);
        }

        Ok(summary)
    }
}
