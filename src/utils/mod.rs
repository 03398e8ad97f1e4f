//! Utility helpers shared across layers.
//!
//! - [`token_generator`] - Short token generation

pub mod token_generator;

pub use token_generator::{RandomTokenGenerator, TokenGenerator};
