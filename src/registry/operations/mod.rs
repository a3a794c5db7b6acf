//! Registry operations module
//!
//! One operation group per `acr/v1` resource. All groups share the same
//! transport and registry base address.

pub mod catalog_operations;
pub mod manifest_operations;
pub mod tag_operations;

pub use catalog_operations::CatalogOperations;
pub use manifest_operations::ManifestOperations;
pub use tag_operations::TagOperations;

use crate::error::{RegistryError, Result};
use serde::de::DeserializeOwned;

/// Decode a listing body, failing loudly on anything that is not the expected shape
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], operation: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| RegistryError::Decode {
        operation: operation.to_string(),
        message: e.to_string(),
    })
}
