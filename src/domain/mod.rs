//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Durable store trait definitions
//! - [`errors`] - Error taxonomy shared by adapters and the engine
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;
