//! Server configuration from environment variables.
//!
//! | Variable           | Default                  | Meaning                                   |
//! |--------------------|--------------------------|-------------------------------------------|
//! | `HOST`             | `0.0.0.0`                | Bind address                              |
//! | `PORT`             | `3000`                   | Bind port                                 |
//! | `STORE_BACKEND`    | `memory`                 | `memory` or `redis`                       |
//! | `REDIS_URL`        | `redis://localhost:6379` | Redis connection URL                      |
//! | `STORE_TIMEOUT_MS` | `2000`                   | Upper bound per store call                |
//! | `KEY_PREFIX`       | `note:`                  | Prefix prepended to note ids in the store |
//! | `NOTE_TTL_SECS`    | `2592000` (30 days)      | Expiry after last write, `0` = never      |
//! | `ID_STRATEGY`      | `alphabet`               | `alphabet` or `random-bytes`              |
//! | `ID_LENGTH`        | `5`                      | Generated id length (1-64)                |
//! | `MAX_BODY_BYTES`   | `5242880`                | Largest accepted request body             |
//!
//! Unset or blank variables take the default; set but unparseable values are
//! errors. The one exception is `KEY_PREFIX`, where an empty value means "no
//! prefix".

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use notepad_core::{defaults, Error, IdGenerator, IdStrategy, Result};
use notepad_store::RedisConfig;

/// Which key-value store backs the notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Process memory; contents are lost on restart.
    #[default]
    Memory,
    Redis,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Redis => "redis",
        })
    }
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            other => Err(Error::Config(format!(
                "unknown STORE_BACKEND '{}' (expected 'memory' or 'redis')",
                other
            ))),
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub redis: RedisConfig,
    pub key_prefix: String,
    /// `None` keeps notes until deleted.
    pub note_ttl: Option<Duration>,
    pub id_generator: IdGenerator,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            store_backend: StoreBackend::default(),
            redis: RedisConfig::default(),
            key_prefix: defaults::KEY_PREFIX.to_string(),
            note_ttl: Some(Duration::from_secs(defaults::NOTE_TTL_SECS)),
            id_generator: IdGenerator::default(),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of
    /// a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();

        let host = parse_var(&lookup, "HOST")?.unwrap_or(base.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(base.port);
        let store_backend =
            parse_var(&lookup, "STORE_BACKEND")?.unwrap_or(base.store_backend);

        let redis = RedisConfig {
            url: lookup("REDIS_URL").unwrap_or(base.redis.url),
            timeout: parse_var::<u64, _>(&lookup, "STORE_TIMEOUT_MS")?
                .map(Duration::from_millis)
                .unwrap_or(base.redis.timeout),
        };
        if redis.timeout.is_zero() {
            return Err(Error::Config("STORE_TIMEOUT_MS must be positive".into()));
        }

        // Set-but-empty is a real value here: no prefix.
        let key_prefix = lookup("KEY_PREFIX").unwrap_or(base.key_prefix);

        let note_ttl = match parse_var::<u64, _>(&lookup, "NOTE_TTL_SECS")? {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => base.note_ttl,
        };

        let id_strategy: IdStrategy = parse_var(&lookup, "ID_STRATEGY")?
            .unwrap_or(base.id_generator.strategy());
        let id_length: usize =
            parse_var(&lookup, "ID_LENGTH")?.unwrap_or(base.id_generator.length());
        let id_generator = IdGenerator::new(id_strategy, id_length)?;

        let max_body_bytes =
            parse_var(&lookup, "MAX_BODY_BYTES")?.unwrap_or(base.max_body_bytes);
        if max_body_bytes == 0 {
            return Err(Error::Config("MAX_BODY_BYTES must be positive".into()));
        }

        Ok(Self {
            host,
            port,
            store_backend,
            redis,
            key_prefix,
            note_ttl,
            id_generator,
            max_body_bytes,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid HOST/PORT '{}:{}': {}", self.host, self.port, e)))
    }
}

/// Parse an optional variable; a set value that fails to parse is an error.
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("invalid {} '{}': {}", key, raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.redis.url, "redis://localhost:6379");
        assert_eq!(config.key_prefix, "note:");
        assert_eq!(config.note_ttl, Some(Duration::from_secs(2_592_000)));
        assert_eq!(config.id_generator.strategy(), IdStrategy::Alphabet);
        assert_eq!(config.id_generator.length(), 5);
        assert_eq!(config.max_body_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STORE_BACKEND", "Redis"),
            ("REDIS_URL", "redis://cache:6380"),
            ("STORE_TIMEOUT_MS", "250"),
            ("KEY_PREFIX", ""),
            ("NOTE_TTL_SECS", "60"),
            ("ID_STRATEGY", "random-bytes"),
            ("ID_LENGTH", "12"),
            ("MAX_BODY_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.store_backend, StoreBackend::Redis);
        assert_eq!(config.redis.url, "redis://cache:6380");
        assert_eq!(config.redis.timeout, Duration::from_millis(250));
        assert_eq!(config.key_prefix, "");
        assert_eq!(config.note_ttl, Some(Duration::from_secs(60)));
        assert_eq!(config.id_generator.strategy(), IdStrategy::RandomBytes);
        assert_eq!(config.id_generator.length(), 12);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_zero_ttl_disables_expiry() {
        let config = config_from(&[("NOTE_TTL_SECS", "0")]).unwrap();
        assert_eq!(config.note_ttl, None);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("PORT", "  "), ("ID_LENGTH", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.id_generator.length(), 5);
    }

    #[test]
    fn test_blank_host_uses_default() {
        let config = config_from(&[("HOST", ""), ("PORT", "8080")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");

        let config = config_from(&[("HOST", "  ")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");

        let config = config_from(&[("HOST", " 127.0.0.1 ")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_empty_key_prefix_is_kept() {
        let config = config_from(&[("KEY_PREFIX", "")]).unwrap();
        assert_eq!(config.key_prefix, "");
    }

    #[test]
    fn test_invalid_values_are_errors() {
        for vars in [
            [("PORT", "http")],
            [("STORE_BACKEND", "postgres")],
            [("ID_STRATEGY", "uuid")],
            [("ID_LENGTH", "0")],
            [("ID_LENGTH", "65")],
            [("NOTE_TTL_SECS", "-1")],
            [("STORE_TIMEOUT_MS", "0")],
            [("MAX_BODY_BYTES", "0")],
        ] {
            let err = config_from(&vars).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{vars:?} gave {err}");
        }
    }

    #[test]
    fn test_bind_addr_rejects_bad_host() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn test_store_backend_display_round_trips() {
        for backend in [StoreBackend::Memory, StoreBackend::Redis] {
            assert_eq!(backend.to_string().parse::<StoreBackend>().unwrap(), backend);
        }
    }
}
