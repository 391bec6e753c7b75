//! Tracing setup shared by the desktop app and the proxy.
//!
//! ```ignore
//! use usercard_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new().with_filter("usercard=debug").init()?;
//! ```
//!
//! `RUST_LOG` always wins over the builder's filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

pub struct LoggingBuilder {
    env_filter: String,
    with_target: bool,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: DEFAULT_LOG_FILTER.to_string(),
            with_target: true,
        }
    }

    /// Set the fallback filter (e.g., "usercard=info,usercard_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = filter.into();
        self
    }

    /// Hide module paths in console output.
    pub fn without_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Filter actually applied: `RUST_LOG` if set and valid, else the builder's.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.env_filter))
    }

    /// Install the global subscriber. Fails if one is already set.
    pub fn init(self) -> Result<(), TryInitError> {
        tracing_subscriber::registry()
            .with(self.filter())
            .with(tracing_subscriber::fmt::layer().with_target(self.with_target))
            .try_init()
    }
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the default subscriber, ignoring a second call.
pub fn init() {
    if LoggingBuilder::new().init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
