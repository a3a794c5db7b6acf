//! Error types and handlers for registry operations

pub mod handlers;

use crate::registry::model::ItemKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Every failure the cleanup run can hit.
///
/// Apart from [`RegistryError::Configuration`], which is raised before any
/// network traffic, all variants are fatal for the whole run.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Missing or invalid registry, credentials or keep-count
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A listing endpoint answered with something other than 200
    #[error("HTTP request for {operation} returned {status}")]
    Request { operation: String, status: u16 },
    /// A delete endpoint answered with something other than 202
    #[error("HTTP request for deleting {kind} {reference} in {repository} returned {status}")]
    Delete {
        repository: String,
        kind: ItemKind,
        reference: String,
        status: u16,
    },
    /// Network level failure (connect, timeout, request construction)
    #[error("Network error during {operation}: {message}")]
    Transport { operation: String, message: String },
    /// Listing body could not be decoded
    #[error("Failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },
    /// A repository worker panicked or was cancelled
    #[error("Worker error: {0}")]
    Worker(String),
}

impl RegistryError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, RegistryError::Configuration(_))
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Request { status, .. } | RegistryError::Delete { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<url::ParseError> for RegistryError {
    fn from(err: url::ParseError) -> Self {
        RegistryError::Configuration(format!("Invalid registry URL: {}", err))
    }
}

impl From<tokio::task::JoinError> for RegistryError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            RegistryError::Worker("repository worker was cancelled".to_string())
        } else {
            RegistryError::Worker(format!("repository worker panicked: {}", err))
        }
    }
}
