//! Shared handler state.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use notepad_core::{IdGenerator, KeyValueStore, Result};
use notepad_store::{MemoryStore, NoteStore, RedisStore};

use crate::config::{Config, StoreBackend};

/// How often the in-memory backend drops expired notes.
const MEMORY_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteStore,
    pub ids: IdGenerator,
}

impl AppState {
    pub fn new(notes: NoteStore, ids: IdGenerator) -> Self {
        Self { notes, ids }
    }

    /// Build the configured store backend and wrap it in the note adapter.
    ///
    /// A Redis backend that cannot be reached here is a startup error; there
    /// is no fallback to memory.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let backend: Arc<dyn KeyValueStore> = match config.store_backend {
            StoreBackend::Memory => {
                let store = MemoryStore::new();
                store.spawn_expiry_sweeper(MEMORY_SWEEP_INTERVAL);
                Arc::new(store)
            }
            StoreBackend::Redis => Arc::new(RedisStore::connect(&config.redis).await?),
        };

        info!(
            subsystem = "api",
            backend = backend.backend_name(),
            key_prefix = %config.key_prefix,
            ttl_secs = config.note_ttl.map(|ttl| ttl.as_secs()).unwrap_or(0),
            id_strategy = %config.id_generator.strategy(),
            id_length = config.id_generator.length(),
            "Note store ready"
        );

        let notes = NoteStore::new(backend)
            .with_prefix(config.key_prefix.clone())
            .with_ttl(config.note_ttl);

        Ok(Self::new(notes, config.id_generator))
    }
}
