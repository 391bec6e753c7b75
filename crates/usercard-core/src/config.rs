//! Fixed endpoints and brand constants.
//!
//! None of these vary at runtime unless a binary overrides them from its
//! command line.

/// Public random-user endpoint the direct card calls.
pub const RANDOM_USER_API_URL: &str = "https://randomuser.me/api/";

/// Where the proxy listens by default.
pub const DEFAULT_PROXY_PORT: u16 = 5000;

/// Proxy route the server-backed card calls.
pub const DEFAULT_PROXY_URL: &str = "http://localhost:5000/user";

/// Map search prefix; the percent-encoded address is appended as a path segment.
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";
