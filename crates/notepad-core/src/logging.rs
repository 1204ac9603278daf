//! Structured logging schema and field name constants for notepad.
//!
//! All crates log with these field names so log aggregation can query by
//! the same keys across subsystems. The `tracing` macros take field names as
//! identifiers, so call sites spell them literally; this module is the
//! catalogue they are checked against.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Store unavailable, request failed server-side |
//! | WARN  | Rejected input, degraded health check |
//! | INFO  | Lifecycle events (startup, shutdown), note saved/deleted |
//! | DEBUG | Store calls, raw-mode decisions, config choices |
//! | TRACE | Discarded id candidates, per-key expiry purges |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID set by the request-id layer (UUIDv7).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "store"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "notes", "memory", "redis", "render"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "read", "write", "delete", "get", "put", "ping"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note identifier being operated on.
pub const NOTE_ID: &str = "note_id";

/// Store backend name ("memory", "redis").
pub const BACKEND: &str = "backend";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Byte length of note content.
pub const CONTENT_LEN: &str = "content_len";

/// Time-to-live applied to a write, in seconds.
pub const TTL_SECS: &str = "ttl_secs";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Whether the response was served in raw mode.
pub const RAW_MODE: &str = "raw_mode";

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Every field name above, for schema checks.
pub const ALL_FIELDS: &[&str] = &[
    REQUEST_ID,
    SUBSYSTEM,
    COMPONENT,
    OPERATION,
    NOTE_ID,
    BACKEND,
    DURATION_MS,
    CONTENT_LEN,
    TTL_SECS,
    RAW_MODE,
    SUCCESS,
    ERROR_MSG,
];
