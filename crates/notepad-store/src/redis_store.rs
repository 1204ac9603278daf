//! Redis-backed key-value store.
//!
//! ## Configuration
//!
//! Environment variables (read by the API binary):
//! - `REDIS_URL`: Redis connection URL (default: redis://localhost:6379)
//! - `STORE_TIMEOUT_MS`: upper bound on a single Redis call (default: 2000)
//!
//! Every call is bounded by the timeout; a connection error or timeout
//! surfaces as [`Error::StoreUnavailable`]. Nothing is retried here.

use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, error, info};

use notepad_core::{defaults, Error, KeyValueStore, Result};

/// Connection settings for [`RedisStore`].
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: defaults::REDIS_URL.to_string(),
            timeout: Duration::from_millis(defaults::STORE_TIMEOUT_MS),
        }
    }
}

/// Key-value store backed by a Redis server.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    timeout: Duration,
}

impl RedisStore {
    /// Connect to Redis. Fails if the server cannot be reached within the
    /// configured timeout.
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| Error::Config(format!("invalid Redis URL: {}", e)))?;

        let connection = match tokio::time::timeout(config.timeout, ConnectionManager::new(client))
            .await
        {
            Ok(conn) => conn?,
            Err(_) => {
                return Err(Error::StoreUnavailable(format!(
                    "connecting to Redis timed out after {}ms",
                    config.timeout.as_millis()
                )))
            }
        };

        info!(
            subsystem = "store",
            component = "redis",
            timeout_ms = config.timeout.as_millis() as u64,
            url = %mask_url(&config.url),
            "Redis store connected"
        );

        Ok(Self {
            connection,
            timeout: config.timeout,
        })
    }

    /// Run one Redis call under the store timeout.
    async fn bounded<T, F>(&self, op: &'static str, key: &str, call: F) -> Result<T>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        let start = Instant::now();
        let result = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Error::from(e)),
            Err(_) => Err(Error::StoreUnavailable(format!(
                "Redis {} timed out after {}ms",
                op,
                self.timeout.as_millis()
            ))),
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => debug!(
                subsystem = "store",
                component = "redis",
                op,
                key,
                duration_ms,
                "Redis call completed"
            ),
            Err(e) => error!(
                subsystem = "store",
                component = "redis",
                op,
                key,
                duration_ms,
                error = %e,
                "Redis call failed"
            ),
        }
        result
    }
}

/// Hide credentials and host details of a connection URL in logs.
fn mask_url(url: &str) -> String {
    url.replace(|c: char| c.is_ascii_alphanumeric(), "*")
}

/// Redis rejects `SET EX 0`, so sub-second TTLs round up to one second.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection.clone();
        self.bounded("get", key, async move { conn.get::<_, Option<String>>(key).await })
            .await
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection.clone();
        match ttl {
            Some(ttl) => {
                let seconds = ttl_seconds(ttl);
                self.bounded("put", key, async move {
                    conn.set_ex::<_, _, ()>(key, value, seconds).await
                })
                .await
            }
            None => {
                self.bounded("put", key, async move { conn.set::<_, _, ()>(key, value).await })
                    .await
            }
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection.clone();
        self.bounded("delete", key, async move { conn.del::<_, ()>(key).await })
            .await
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection.clone();
        self.bounded("ping", "", async move {
            redis::cmd("PING").query_async::<String>(&mut conn).await
        })
        .await
        .map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
