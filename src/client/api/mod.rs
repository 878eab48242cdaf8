pub mod auth;
pub mod base_url;
pub mod listing;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub use listing::{get_classes, get_quran, get_roles, get_tags};
