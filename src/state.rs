//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ResolutionEngine;

/// Process-wide handles, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ResolutionEngine>,
    /// Prefix for externally visible short URLs, without trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(engine: Arc<ResolutionEngine>, base_url: &str) -> Self {
        Self {
            engine,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Composes `base_url/token`.
    pub fn short_url(&self, token: &str) -> String {
        format!("{}/{}", self.base_url, token)
    }
}
