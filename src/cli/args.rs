//! Command-line argument parsing

use crate::error::{RegistryError, Result};
use clap::Parser;

pub const ENV_REGISTRY: &str = "DUSTY_REG_NAME";
pub const ENV_CLIENT_ID: &str = "DUSTY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "DUSTY_CLIENT_SECRET";
pub const ENV_TAG_LIMIT: &str = "DUSTY_TAG_LIMIT";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dusty")]
#[command(
    about = "Keep the newest tags of every repository in a container registry and delete the rest"
)]
#[command(version)]
pub struct Args {
    /// Registry name or URL
    #[arg(
        long = "registry",
        short = 'r',
        help = "Name of your Azure Container Registry, or its full URL"
    )]
    pub registry: Option<String>,

    /// Number of items to keep
    #[arg(
        long = "limit",
        short = 'l',
        allow_negative_numbers = true,
        help = "Number of tags you'd like to keep for each image"
    )]
    pub limit: Option<i64>,

    #[arg(
        long = "user",
        short = 'u',
        help = "Client ID / User for authentication"
    )]
    pub user: Option<String>,

    #[arg(
        long = "password",
        short = 'p',
        help = "Secret / Password for authentication"
    )]
    pub password: Option<String>,

    #[arg(long = "verbose", short = 'v', help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long = "dry-run", short = 'd', help = "Perform a dry run")]
    pub dry_run: bool,

    /// Also apply the limit to manifests
    #[arg(
        long = "manifests",
        short = 'm',
        help = "Also keep only the newest manifests of each image (multi-architecture images)"
    )]
    pub manifests: bool,

    #[arg(
        long = "max-concurrent",
        help = "Maximum number of repositories processed at once (default: no limit)"
    )]
    pub max_concurrent: Option<usize>,

    #[arg(
        long = "timeout",
        short = 't',
        help = "Timeout for each registry request in seconds (default: none)"
    )]
    pub timeout: Option<u64>,

    #[arg(
        long = "skip-tls",
        short = 'k',
        help = "Skip TLS certificate verification"
    )]
    pub skip_tls: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Fill unset values from the `DUSTY_*` environment variables
    pub fn fill_from_env(self) -> Result<Self> {
        self.with_env_fallback(|key| std::env::var(key).ok())
    }

    /// Flags win over the environment. The limit is also taken from the
    /// environment when it was given but is not positive.
    pub fn with_env_fallback<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if blank(&self.registry) {
            self.registry = lookup(ENV_REGISTRY);
        }

        if blank(&self.user) {
            self.user = lookup(ENV_CLIENT_ID);
        }

        if blank(&self.password) {
            self.password = lookup(ENV_CLIENT_SECRET);
        }

        if self.limit.is_none_or(|limit| limit <= 0) {
            if let Some(value) = lookup(ENV_TAG_LIMIT) {
                let limit = value.trim().parse::<i64>().map_err(|_| {
                    RegistryError::Configuration(format!(
                        "Error converting {} to integer value: {:?}",
                        ENV_TAG_LIMIT, value
                    ))
                })?;
                self.limit = Some(limit);
            }
        }

        Ok(self)
    }

    /// Print usage examples
    pub fn print_examples() {
        println!("Examples:");
        println!("  # Keep the 10 newest tags of every repository in myregistry");
        println!("  dusty -r myregistry -u <client-id> -p <client-secret> -l 10");
        println!();
        println!("  # See what would be deleted, including manifests");
        println!("  dusty -r https://myregistry.azurecr.io -l 5 --manifests --dry-run -v");
        println!();
        println!("  # Using environment variables");
        println!("  export {}=myregistry", ENV_REGISTRY);
        println!("  export {}=<client-id>", ENV_CLIENT_ID);
        println!("  export {}=<client-secret>", ENV_CLIENT_SECRET);
        println!("  export {}=10", ENV_TAG_LIMIT);
        println!("  dusty");
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
