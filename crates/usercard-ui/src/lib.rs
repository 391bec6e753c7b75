//! User Card UI Components
//!
//! Dioxus primitives shared by the card front-end, styled with the brand
//! palette:
//! - **Orange (#f27c22)**: buttons, accents, card glow
//! - **Deep orange (#c25d10)**: hover state of filled buttons
//! - **White cards on a light grey page**
//!
//! The CSS classes referenced here are defined by the application's
//! global stylesheet.

pub mod components;

pub use components::*;
