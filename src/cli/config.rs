//! Configuration management module

use crate::cli::args::Args;
use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use crate::retention::policy::RetentionPolicy;
use std::fmt;

/// Basic authentication credentials
#[derive(Clone, Default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn validate(&self) -> Result<()> {
        ValidationErrorHandler::validate_credentials(&self.username, &self.password)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registry endpoint configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub address: String,
    pub skip_tls: bool,
    pub timeout: Option<u64>,
}

impl RegistryConfig {
    pub fn new(address: String) -> Self {
        Self {
            address,
            skip_tls: false,
            timeout: None,
        }
    }

    /// A bare registry name is expanded to its `azurecr.io` endpoint
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        let address = if name.starts_with("http://") || name.starts_with("https://") {
            name.trim_end_matches('/').to_string()
        } else {
            format!("https://{}.azurecr.io:443", name)
        };
        Self::new(address)
    }

    pub fn with_skip_tls(mut self, skip_tls: bool) -> Self {
        self.skip_tls = skip_tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ValidationErrorHandler::validate_registry_url(&self.address)?;
        if let Some(timeout) = self.timeout {
            ValidationErrorHandler::validate_timeout(timeout)?;
        }
        Ok(())
    }
}

/// Validated configuration for one cleanup run
#[derive(Debug, Clone)]
pub struct RetentionConfig {
    pub registry: RegistryConfig,
    pub auth: AuthConfig,
    pub policy: RetentionPolicy,
    pub verbose: bool,
    pub dry_run: bool,
    pub manage_manifests: bool,
    pub max_concurrent: Option<usize>,
}

impl RetentionConfig {
    /// Build and validate the configuration. Nothing touches the network here.
    pub fn from_args(args: Args) -> Result<Self> {
        let name = args
            .registry
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| RegistryError::Configuration("Registry name is required".to_string()))?;
        let registry = RegistryConfig::from_name(&name)
            .with_skip_tls(args.skip_tls)
            .with_timeout(args.timeout);
        registry.validate()?;

        let auth = AuthConfig::new(
            args.user.unwrap_or_default(),
            args.password.unwrap_or_default(),
        );
        auth.validate()?;

        let limit = args
            .limit
            .ok_or_else(|| RegistryError::Configuration("Tag limit is required".to_string()))?;
        let policy = RetentionPolicy::new(limit)?;

        if let Some(max_concurrent) = args.max_concurrent {
            ValidationErrorHandler::validate_max_concurrent(max_concurrent)?;
        }

        Ok(Self {
            registry,
            auth,
            policy,
            verbose: args.verbose,
            dry_run: args.dry_run,
            manage_manifests: args.manifests,
            max_concurrent: args.max_concurrent,
        })
    }
}
