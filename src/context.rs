//! Application config context for User Card.
//!
//! The command line is parsed once in `main` and stored globally; the
//! root component provides it to every card via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_app_config();
//! let source = config.source(CardVariant::Direct);
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use usercard_core::config::{DEFAULT_PROXY_URL, RANDOM_USER_API_URL};
use usercard_core::{ApplyPolicy, GenderFilter, ProfileSource, ProxyClient, RandomUserClient};

/// Which backend a card talks to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardVariant {
    /// Calls the public random-user API itself
    Direct,
    /// Goes through `usercard-proxy`
    Proxy,
}

impl CardVariant {
    pub fn heading(&self) -> &'static str {
        match self {
            CardVariant::Direct => "Direct API Version",
            CardVariant::Proxy => "Server API Version",
        }
    }
}

/// Settings fixed at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub proxy_url: String,
    pub gender: Option<GenderFilter>,
    pub show_proxy_card: bool,
    pub policy: ApplyPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: RANDOM_USER_API_URL.to_string(),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            gender: None,
            show_proxy_card: true,
            policy: ApplyPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build the profile source for a card variant.
    pub fn source(&self, variant: CardVariant) -> Arc<dyn ProfileSource> {
        match variant {
            CardVariant::Direct => {
                Arc::new(RandomUserClient::with_endpoint(self.endpoint.clone()).gender(self.gender))
            }
            CardVariant::Proxy => Arc::new(ProxyClient::new(self.proxy_url.clone()).gender(self.gender)),
        }
    }

    /// Card variants to render, in page order.
    pub fn variants(&self) -> Vec<CardVariant> {
        if self.show_proxy_card {
            vec![CardVariant::Direct, CardVariant::Proxy]
        } else {
            vec![CardVariant::Direct]
        }
    }
}

/// Get the startup config (set from command line args).
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Hook to access the app config from context.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
