//! Brand colour constants.
//!
//! Declared as CSS custom properties at the top of the global stylesheet.

// === BRAND ===
pub const BRAND_ORANGE: &str = "#f27c22";
pub const BRAND_ORANGE_DARK: &str = "#c25d10";
pub const BRAND_GLOW: &str = "rgba(242, 124, 34, 0.3)";
pub const BRAND_TINT: &str = "rgba(242, 124, 34, 0.1)";

// === SURFACES ===
pub const PAGE_BG: &str = "#f9fafb";
pub const CARD_BG: &str = "#ffffff";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#111827";
pub const TEXT_BODY: &str = "#374151";
pub const TEXT_MUTED: &str = "#4b5563";

// === GENDER ICONS ===
pub const MALE_BLUE: &str = "#3b82f6";
pub const FEMALE_PINK: &str = "#ec4899";

// === CARD WIDTHS (per breakpoint) ===
pub const CARD_MAX_WIDTH: &str = "22rem";
pub const CARD_MAX_WIDTH_LG: &str = "26rem";
pub const CARD_MAX_WIDTH_XL: &str = "30rem";
