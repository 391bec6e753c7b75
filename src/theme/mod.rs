//! Brand palette and global stylesheet.

pub mod colors;
mod styles;

pub use styles::global_styles;
