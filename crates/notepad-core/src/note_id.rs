//! Note identifiers: validation and random generation.
//!
//! A note id is the literal key a client puts in the URL path. Every id that
//! reaches the store has passed [`validate`], which bounds key size and keeps
//! path-derived input out of the store's wider key namespace.
//!
//! ## Generation strategies
//!
//! | Strategy       | Symbols | Space at 5 chars |
//! |----------------|---------|------------------|
//! | `alphabet`     | 27      | 27^5 ≈ 1.4·10^7  |
//! | `random-bytes` | 64      | 64^5 ≈ 1.1·10^9  |
//!
//! No uniqueness check is made against the store. By the birthday bound, a
//! collision becomes likely (p ≈ 0.5) after roughly `1.18 * sqrt(space)`
//! generated ids: about 4,500 notes for `alphabet` and 38,600 for
//! `random-bytes` at the default length. A collision overwrites the earlier
//! note. Longer ids (`ID_LENGTH`) shrink that risk geometrically.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::defaults;
use crate::error::{Error, Result};

/// Longest identifier accepted by [`validate`].
pub const MAX_ID_LENGTH: usize = 64;

/// Returns true iff `candidate` matches `^[A-Za-z0-9_-]+$` and is 1–64 chars.
pub fn validate(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= MAX_ID_LENGTH
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// A validated note identifier.
///
/// The only constructors go through [`validate`], so holding a `NoteId` means
/// the string is safe to use as a store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Validate `candidate` and wrap it.
    pub fn parse(candidate: &str) -> Result<Self> {
        if validate(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(Error::InvalidIdentifier(truncate_for_display(candidate)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Keep error messages bounded when a client sends a huge path segment.
fn truncate_for_display(candidate: &str) -> String {
    const SHOWN: usize = MAX_ID_LENGTH + 8;
    match candidate.char_indices().nth(SHOWN) {
        Some((cut, _)) => format!("{}...", &candidate[..cut]),
        None => candidate.to_string(),
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NoteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// How [`IdGenerator`] produces fresh identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Uniform picks from [`defaults::ID_ALPHABET`].
    #[default]
    Alphabet,
    /// OS-random bytes, URL-safe base64 without padding, truncated.
    RandomBytes,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Alphabet => "alphabet",
            IdStrategy::RandomBytes => "random-bytes",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabet" => Ok(IdStrategy::Alphabet),
            "random-bytes" | "random_bytes" | "base64" => Ok(IdStrategy::RandomBytes),
            other => Err(Error::Config(format!(
                "unknown id strategy '{}' (expected 'alphabet' or 'random-bytes')",
                other
            ))),
        }
    }
}

/// Generates random note identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    strategy: IdStrategy,
    length: usize,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::default(),
            length: defaults::ID_LENGTH,
        }
    }
}

impl IdGenerator {
    /// Create a generator; `length` must be within 1–64.
    pub fn new(strategy: IdStrategy, length: usize) -> Result<Self> {
        if length == 0 || length > MAX_ID_LENGTH {
            return Err(Error::Config(format!(
                "id length must be between 1 and {}, got {}",
                MAX_ID_LENGTH, length
            )));
        }
        Ok(Self { strategy, length })
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Produce a fresh identifier. Candidates failing [`validate`] are
    /// discarded and regenerated.
    pub fn generate(&self) -> NoteId {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Alphabet => self.sample_alphabet(),
                IdStrategy::RandomBytes => self.sample_bytes(),
            };
            if validate(&candidate) {
                return NoteId(candidate);
            }
            tracing::trace!(candidate = %candidate, "Discarding generated id that failed validation");
        }
    }

    fn sample_alphabet(&self) -> String {
        let alphabet = defaults::ID_ALPHABET.as_bytes();
        let mut rng = rand::thread_rng();
        (0..self.length)
            .filter_map(|_| alphabet.choose(&mut rng).map(|&b| b as char))
            .collect()
    }

    fn sample_bytes(&self) -> String {
        let mut bytes = vec![0u8; self.length];
        OsRng.fill_bytes(&mut bytes);
        // ceil(4n/3) >= n, so the encoding always has enough characters.
        let mut encoded = URL_SAFE_NO_PAD.encode(&bytes);
        encoded.truncate(self.length);
        encoded
    }
}
