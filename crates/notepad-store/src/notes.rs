//! Note store adapter.
//!
//! The only component that talks to the key-value store on behalf of notes.
//! A note exists iff its key holds a value; writing empty content deletes the
//! key, so "empty" and "absent" are the same observable state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use notepad_core::{defaults, KeyValueStore, NoteId, Result};

/// What a [`NoteStore::write`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Non-empty content stored (created or replaced).
    Saved,
    /// Empty content; the note was removed.
    Deleted,
}

/// Maps validated note ids to text blobs in a [`KeyValueStore`].
#[derive(Clone)]
pub struct NoteStore {
    backend: Arc<dyn KeyValueStore>,
    prefix: String,
    ttl: Option<Duration>,
}

impl NoteStore {
    /// Adapter with the default key prefix and 30-day expiry.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            prefix: defaults::KEY_PREFIX.to_string(),
            ttl: Some(Duration::from_secs(defaults::NOTE_TTL_SECS)),
        }
    }

    /// Set the key prefix (may be empty).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the expiry applied on every non-empty write; `None` keeps notes
    /// until deleted.
    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// Store key for a note.
    pub fn key(&self, id: &NoteId) -> String {
        format!("{}{}", self.prefix, id)
    }

    /// Fetch a note's content. `None` when never written, deleted, or expired.
    pub async fn read(&self, id: &NoteId) -> Result<Option<String>> {
        let start = Instant::now();
        let content = self.backend.get(&self.key(id)).await?;
        debug!(
            subsystem = "store",
            component = "notes",
            op = "read",
            note_id = %id,
            found = content.is_some(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note read"
        );
        Ok(content)
    }

    /// Replace a note's content; empty content deletes the note.
    pub async fn write(&self, id: &NoteId, content: &str) -> Result<WriteOutcome> {
        if content.is_empty() {
            self.delete(id).await?;
            return Ok(WriteOutcome::Deleted);
        }

        let start = Instant::now();
        self.backend.put(&self.key(id), content, self.ttl).await?;
        info!(
            subsystem = "store",
            component = "notes",
            op = "write",
            note_id = %id,
            content_len = content.len(),
            ttl_secs = self.ttl.map(|t| t.as_secs()),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note saved"
        );
        Ok(WriteOutcome::Saved)
    }

    /// Remove a note. Deleting an absent note succeeds.
    pub async fn delete(&self, id: &NoteId) -> Result<()> {
        let start = Instant::now();
        self.backend.delete(&self.key(id)).await?;
        info!(
            subsystem = "store",
            component = "notes",
            op = "delete",
            note_id = %id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Note deleted"
        );
        Ok(())
    }

    /// Check that the backing store is reachable.
    pub async fn ping(&self) -> Result<()> {
        self.backend.ping().await
    }
}
