//! Logging and output control
//!
//! This module provides the [`Logger`] used by every component for user-visible
//! output. Messages are emitted through `tracing`; [`init_tracing`] installs the
//! subscriber for the binary. Verbose messages are only emitted when the logger
//! was created in verbose mode.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` sets the base filter (default `info`); `--verbose` always adds
/// debug output for this crate on top of it.
pub fn init_tracing(verbose: bool) {
    let from_env = std::env::var("RUST_LOG").ok();
    let filter = env_filter(verbose, from_env.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn env_filter(verbose: bool, from_env: Option<&str>) -> EnvFilter {
    let mut filter = from_env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    if verbose {
        if let Ok(directive) = "dusty=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Logger responsible for all user-visible output
#[derive(Debug, Clone)]
pub struct Logger {
    pub verbose: bool,
    pub start_time: Instant,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            start_time: Instant::now(),
        }
    }

    /// Only shown in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            tracing::debug!("{}", message);
        }
    }

    /// Detailed information (only shown in verbose mode)
    pub fn detail(&self, message: &str) {
        if self.verbose {
            tracing::debug!("   {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    pub fn success(&self, message: &str) {
        tracing::info!("✅ {}", message);
    }

    pub fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    /// Numbered list, verbose mode only
    pub fn list(&self, title: &str, items: &[String]) {
        if !self.verbose {
            return;
        }
        self.verbose(title);
        for (i, item) in items.iter().enumerate() {
            tracing::debug!("  {}. {}", i + 1, item);
        }
        if items.is_empty() {
            tracing::debug!("  (No items to display)");
        }
    }

    /// Key-value pair summary display
    pub fn summary_kv(&self, title: &str, items: &[(&str, String)]) {
        tracing::info!("--- {} ---", title);
        for (key, value) in items {
            tracing::info!("  {}: {}", key, value);
        }
    }

    /// Format duration in human-readable format
    pub fn format_duration(&self, duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{:.1}s", duration.as_secs_f64())
        } else if secs < 3600 {
            format!("{}m{:02}s", secs / 60, secs % 60)
        } else {
            format!("{}h{:02}m{:02}s", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
    }

    pub fn elapsed(&self) -> String {
        self.format_duration(self.start_time.elapsed())
    }
}
