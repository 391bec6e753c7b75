//! Reusable UI components.

mod button;
mod icons;
mod spinner;

pub use button::*;
pub use icons::*;
pub use spinner::*;
