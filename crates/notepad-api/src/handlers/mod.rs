//! HTTP handlers for notepad-api.

pub mod health;
pub mod notes;
