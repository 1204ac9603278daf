//! # notepad-core
//!
//! Core types, traits, and abstractions for the notepad service.
//!
//! This crate owns the note-identifier contract ([`NoteId`], [`validate`],
//! [`IdGenerator`]) and the key-value interface ([`KeyValueStore`]) that the
//! storage backends in `notepad-store` implement.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod note_id;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use note_id::{validate, IdGenerator, IdStrategy, NoteId, MAX_ID_LENGTH};
pub use traits::*;
