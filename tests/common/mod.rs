#![allow(dead_code)]

use std::sync::Arc;
use linkcache::application::services::{EngineSettings, ResolutionEngine};
use linkcache::infrastructure::cache::{CacheService, MemoryCache};
use linkcache::infrastructure::persistence::MemoryLinkStore;
use linkcache::state::AppState;
use linkcache::utils::RandomTokenGenerator;

pub const BASE_URL: &str = "http://s.test";

/// Backends shared between the engine under test and assertions.
pub struct Backends {
    pub store: Arc<MemoryLinkStore>,
    pub cache: Arc<MemoryCache>,
}

pub fn create_test_engine() -> (ResolutionEngine, Backends) {
    let store = Arc::new(MemoryLinkStore::new());
    let cache = Arc::new(MemoryCache::new());

    let engine = ResolutionEngine::new(
        store.clone(),
        cache.clone(),
        Arc::new(RandomTokenGenerator::default()),
        EngineSettings::default(),
    );

    (engine, Backends { store, cache })
}

pub fn create_test_state() -> (AppState, Backends) {
    let (engine, backends) = create_test_engine();
    (AppState::new(Arc::new(engine), BASE_URL), backends)
}

/// State backed by an in-memory store and the given cache.
pub fn create_test_state_with_cache(cache: Arc<dyn CacheService>) -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let engine = ResolutionEngine::new(
        store.clone(),
        cache,
        Arc::new(RandomTokenGenerator::default()),
        EngineSettings::default(),
    );

    (AppState::new(Arc::new(engine), BASE_URL), store)
}

pub async fn seed_link(backends: &Backends, token: &str, target: &str) {
    use linkcache::domain::entities::NewShortLink;
    use linkcache::domain::repositories::LinkStore;

    backends
        .store
        .insert(NewShortLink::new(token, target))
        .await
        .unwrap();
}
