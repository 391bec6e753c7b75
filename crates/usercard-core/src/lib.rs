//! User Card Core Library
//!
//! Everything behind the profile card that is not pixels: the Person
//! Record model, where records come from, the card's fetch/expansion
//! state and the contact actions derived from a record.
//!
//! ## Quick Start
//!
//! ```ignore
//! use usercard_core::{CardService, RandomUserClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let card = CardService::new(RandomUserClient::new());
//!     card.mount().await;
//!
//!     if let Some(person) = card.snapshot().record() {
//!         println!("{} <{}>", person.full_name(), person.email);
//!     }
//! }
//! ```

pub mod actions;
pub mod card;
pub mod config;
pub mod error;
pub mod gender;
pub mod logging;
pub mod service;
pub mod source;
pub mod types;

// Re-exports
pub use actions::{map_address, ContactAction, ContactKind, Navigator};
pub use card::{ApplyPolicy, CardState, FetchOutcome, FetchTicket};
pub use error::{FetchError, FetchResult};
pub use gender::GenderIcon;
pub use service::{run_fetch, run_mount, CardService, CardStore};
pub use source::{GenderFilter, ProfileSource, ProxyClient, RandomUserClient};
pub use types::*;
