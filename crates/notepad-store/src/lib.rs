//! # notepad-store
//!
//! Storage layer for notepad.
//!
//! This crate provides:
//! - [`MemoryStore`]: in-process key-value store with per-key expiry
//! - [`RedisStore`]: Redis-backed key-value store with bounded call latency
//! - [`NoteStore`]: the note adapter (read / write / delete with
//!   delete-on-empty semantics) over any [`KeyValueStore`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notepad_store::{MemoryStore, NoteStore, NoteId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let notes = NoteStore::new(Arc::new(MemoryStore::new()));
//!     let id = NoteId::parse("shopping")?;
//!     notes.write(&id, "milk, eggs").await?;
//!     assert_eq!(notes.read(&id).await?.as_deref(), Some("milk, eggs"));
//!     Ok(())
//! }
//! ```

pub mod memory;
pub mod mock;
pub mod notes;
pub mod redis_store;

// Re-export core types
pub use notepad_core::*;

pub use self::memory::MemoryStore;
pub use self::notes::{NoteStore, WriteOutcome};
pub use self::redis_store::{RedisConfig, RedisStore};
