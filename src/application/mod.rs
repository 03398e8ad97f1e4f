//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the durable
//! store, the fast cache and token generation. Services consume trait objects
//! injected at construction and provide a clean API for HTTP handlers and the
//! admin CLI.
//!
//! # Available Services
//!
//! - [`services::resolution_engine::ResolutionEngine`] - Short link creation and resolution

pub mod services;
