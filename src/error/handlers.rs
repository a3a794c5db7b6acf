//! Standardized status checks and error mapping shared by the registry operations

use crate::error::{RegistryError, Result};
use crate::registry::model::ItemKind;

/// Status codes the registry answers with on success
pub const LISTING_OK: u16 = 200;
pub const DELETE_ACCEPTED: u16 = 202;

/// Standard error handler for HTTP responses
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Listing endpoints only succeed with 200
    pub fn check_listing(status: u16, operation: &str) -> Result<()> {
        if status == LISTING_OK {
            Ok(())
        } else {
            Err(RegistryError::Request {
                operation: operation.to_string(),
                status,
            })
        }
    }

    /// Deletes are asynchronous on the registry side and only succeed with 202
    pub fn check_delete(
        status: u16,
        repository: &str,
        kind: ItemKind,
        reference: &str,
    ) -> Result<()> {
        if status == DELETE_ACCEPTED {
            Ok(())
        } else {
            Err(RegistryError::Delete {
                repository: repository.to_string(),
                kind,
                reference: reference.to_string(),
                status,
            })
        }
    }

    /// Short human hint for a failing status, printed next to fatal errors
    pub fn status_hint(status: u16) -> Option<&'static str> {
        match status {
            401 => Some("credentials were rejected by the registry"),
            403 => Some("credentials lack permission for this operation"),
            404 => Some("repository or reference not found"),
            405 => Some("delete is disabled for this repository or reference"),
            429 => Some("registry is rate limiting requests"),
            500 => Some("registry server error"),
            502 | 503 | 504 => Some("registry unavailable"),
            _ => None,
        }
    }
}

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    /// Categorize and format network errors with helpful context
    pub fn handle_network_error(error: &reqwest::Error, context: &str) -> RegistryError {
        let message = if error.is_timeout() {
            format!("timeout: {}", error)
        } else if error.is_connect() {
            format!("connection error: {}", error)
        } else if error.is_builder() {
            format!("malformed request: {}", error)
        } else if error.to_string().contains("certificate") {
            format!("TLS certificate error: {}", error)
        } else {
            error.to_string()
        };

        RegistryError::Transport {
            operation: context.to_string(),
            message,
        }
    }
}

/// Validation helpers used while building the configuration
pub struct ValidationErrorHandler;

impl ValidationErrorHandler {
    pub fn validate_registry_url(address: &str) -> Result<()> {
        if address.is_empty() {
            return Err(RegistryError::Configuration(
                "Registry name cannot be empty".to_string(),
            ));
        }

        if !address.starts_with("http://") && !address.starts_with("https://") {
            return Err(RegistryError::Configuration(format!(
                "Invalid registry address: {}. Must start with http:// or https://",
                address
            )));
        }

        url::Url::parse(address)?;
        Ok(())
    }

    pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(RegistryError::Configuration(
                "Client ID cannot be empty".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(RegistryError::Configuration(
                "Client secret cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_keep(keep: i64) -> Result<usize> {
        if keep <= 0 {
            return Err(RegistryError::Configuration(format!(
                "Tag limit must be greater than 0, got {}",
                keep
            )));
        }
        usize::try_from(keep)
            .map_err(|_| RegistryError::Configuration(format!("Tag limit {} is too large", keep)))
    }

    pub fn validate_timeout(timeout: u64) -> Result<()> {
        if timeout == 0 {
            return Err(RegistryError::Configuration(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if timeout > 86400 {
            return Err(RegistryError::Configuration(
                "Timeout cannot exceed 24 hours (86400 seconds)".to_string(),
            ));
        }

        Ok(())
    }

    pub fn validate_max_concurrent(max_concurrent: usize) -> Result<()> {
        if max_concurrent == 0 {
            return Err(RegistryError::Configuration(
                "max-concurrent must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
