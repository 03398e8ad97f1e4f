//! HTTP request handlers.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::{cache_check_handler, health_handler, liveness_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
