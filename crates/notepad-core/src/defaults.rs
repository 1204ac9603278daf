//! Centralized default constants for the notepad service.
//!
//! **This module is the single source of truth** for shared default values.
//! Configuration parsing and tests reference these constants instead of
//! repeating magic numbers.

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Number of characters in a generated note identifier.
pub const ID_LENGTH: usize = 5;

/// Alphabet for the `alphabet` identifier strategy.
///
/// Digits and lowercase letters with the visually ambiguous ones removed
/// (`0 1 6 8 i l o u v`).
pub const ID_ALPHABET: &str = "234579abcdefghjkmnpqrstwxyz";

// =============================================================================
// STORAGE
// =============================================================================

/// Prefix prepended to every note id to form the store key.
pub const KEY_PREFIX: &str = "note:";

/// Time-to-live applied on every non-empty write: 30 days.
pub const NOTE_TTL_SECS: u64 = 60 * 60 * 24 * 30;

/// Default Redis connection URL.
pub const REDIS_URL: &str = "redis://localhost:6379";

/// Upper bound on a single key-value store call, in milliseconds.
pub const STORE_TIMEOUT_MS: u64 = 2_000;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Maximum accepted request body: 5 MiB.
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// User-Agent prefixes that select raw (plain-text) responses.
pub const RAW_USER_AGENT_PREFIXES: &[&str] = &["curl", "Wget"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_no_ambiguous_characters() {
        for c in ['0', '1', 'i', 'l', 'o', 'O', 'I'] {
            assert!(!ID_ALPHABET.contains(c), "alphabet contains {c:?}");
        }
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let mut chars: Vec<char> = ID_ALPHABET.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), ID_ALPHABET.len());
    }

    #[test]
    fn test_ttl_is_thirty_days() {
        assert_eq!(NOTE_TTL_SECS, 2_592_000);
    }
}
