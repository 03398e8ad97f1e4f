//! Core domain entities.
//!
//! - [`ShortLinkRecord`] - A persisted token → target mapping
//! - [`NewShortLink`] - Input for creating a record

pub mod short_link;

pub use short_link::{NewShortLink, ShortLinkRecord};
