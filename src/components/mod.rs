//! UI Components for User Card.

mod contact_bar;
mod gender_badge;
mod navigator;
mod user_card;

pub use contact_bar::ContactBar;
pub use gender_badge::GenderBadge;
pub use navigator::WebviewNavigator;
pub use user_card::UserCard;
