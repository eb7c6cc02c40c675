pub mod field_error;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod status_badge;

pub use field_error::FieldError;
pub use modal::AppModal;
pub use navbar::Navbar;
pub use page::Page;
pub use status_badge::{DeliveryBadge, StatusBadge};
