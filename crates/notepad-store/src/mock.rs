//! Mock key-value store for deterministic testing.
//!
//! Wraps a [`MemoryStore`], records every call, and can be switched into a
//! failing mode where every call returns [`Error::StoreUnavailable`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notepad_store::mock::MockStore;
//! use notepad_store::{NoteId, NoteStore};
//!
//! let mock = MockStore::new();
//! let notes = NoteStore::new(Arc::new(mock.clone()));
//! mock.set_failing(true);
//! assert!(notes.read(&NoteId::parse("abc")?).await.is_err());
//! assert_eq!(mock.calls().len(), 1);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use notepad_core::{Error, KeyValueStore, Result};

use crate::memory::MemoryStore;

/// One recorded call against a [`MockStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub operation: &'static str,
    pub key: String,
}

/// Recording, optionally failing key-value store.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: MemoryStore,
    failing: Arc<AtomicBool>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    pub fn clear_calls(&self) {
        if let Ok(mut log) = self.call_log.lock() {
            log.clear();
        }
    }

    fn record(&self, operation: &'static str, key: &str) -> Result<()> {
        if let Ok(mut log) = self.call_log.lock() {
            log.push(MockCall {
                operation,
                key: key.to_string(),
            });
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::StoreUnavailable(format!(
                "mock store failing on {}",
                operation
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.record("get", key)?;
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        self.record("put", key)?;
        self.inner.put(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.record("delete", key)?;
        self.inner.delete(key).await
    }

    async fn ping(&self) -> Result<()> {
        self.record("ping", "")
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{NoteStore, WriteOutcome};
    use notepad_core::NoteId;

    #[tokio::test]
    async fn test_records_calls() {
        let mock = MockStore::new();
        mock.put("a", "1", None).await.unwrap();
        mock.get("a").await.unwrap();
        mock.delete("a").await.unwrap();
        let ops: Vec<_> = mock.calls().iter().map(|c| c.operation).collect();
        assert_eq!(ops, vec!["put", "get", "delete"]);
    }

    #[tokio::test]
    async fn test_failing_store_errors_every_call() {
        let mock = MockStore::failing();
        assert!(matches!(mock.get("a").await, Err(Error::StoreUnavailable(_))));
        assert!(matches!(mock.put("a", "1", None).await, Err(Error::StoreUnavailable(_))));
        assert!(matches!(mock.delete("a").await, Err(Error::StoreUnavailable(_))));
        assert!(matches!(mock.ping().await, Err(Error::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_note_store_propagates_store_failure() {
        let mock = MockStore::new();
        let notes = NoteStore::new(Arc::new(mock.clone()));
        let id = NoteId::parse("n1").unwrap();

        notes.write(&id, "hello").await.unwrap();
        mock.set_failing(true);

        assert!(notes.read(&id).await.unwrap_err().is_store_failure());
        assert!(notes.write(&id, "again").await.unwrap_err().is_store_failure());
        assert!(notes.write(&id, "").await.unwrap_err().is_store_failure());
        assert!(notes.delete(&id).await.unwrap_err().is_store_failure());

        // Store recovers; previous content intact
        mock.set_failing(false);
        assert_eq!(notes.read(&id).await.unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_empty_write_issues_delete_not_put() {
        let mock = MockStore::new();
        let notes = NoteStore::new(Arc::new(mock.clone()));
        let id = NoteId::parse("n1").unwrap();

        assert_eq!(notes.write(&id, "").await.unwrap(), WriteOutcome::Deleted);
        assert_eq!(
            mock.calls(),
            vec![MockCall {
                operation: "delete",
                key: "note:n1".to_string()
            }]
        );
    }
}
