//! Sequential delete execution with dry-run support

use crate::error::Result;
use crate::logging::Logger;
use crate::registry::RegistryClient;
use crate::retention::policy::Retainable;
use std::sync::Arc;

/// References handled by one delete pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: Vec<String>,
    pub would_delete: Vec<String>,
}

#[derive(Clone)]
pub struct Deleter {
    client: Arc<RegistryClient>,
    dry_run: bool,
    output: Logger,
}

impl Deleter {
    pub fn new(client: Arc<RegistryClient>, dry_run: bool, output: Logger) -> Self {
        Self {
            client,
            dry_run,
            output,
        }
    }

    /// Delete `items` in the given order, stopping at the first failure.
    ///
    /// Callers pass the delete half of a selection, so this runs oldest first.
    pub async fn delete_all<T: Retainable>(
        &self,
        repository: &str,
        items: &[T],
    ) -> Result<DeleteOutcome> {
        let mut outcome = DeleteOutcome::default();

        for item in items {
            let reference = item.reference();

            if self.dry_run {
                self.output.verbose(&format!(
                    "Would delete {} {} from {}",
                    T::KIND,
                    reference,
                    repository
                ));
                outcome.would_delete.push(reference.to_string());
                continue;
            }

            self.output.verbose(&format!(
                "Deleting {} {} from {}...",
                T::KIND,
                reference,
                repository
            ));
            self.client.delete(T::KIND, repository, reference).await?;
            outcome.deleted.push(reference.to_string());
        }

        Ok(outcome)
    }
}
