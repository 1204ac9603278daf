//! notepad-api - HTTP server for notepad
//!
//! Routes:
//! - `GET /` redirects to a freshly generated note id
//! - `GET /{id}` renders the editor page, or plain text in raw mode
//! - `POST /{id}` saves the body as the note (empty body deletes it)
//! - `GET /api/v1/health` reports liveness and store reachability

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod negotiation;
pub mod render;
pub mod state;

pub use app::router;
pub use config::{Config, StoreBackend};
pub use error::ApiError;
pub use state::AppState;
