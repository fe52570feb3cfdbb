use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::{Config as RedisPoolConfig, Pool, Runtime};
use once_cell::sync::Lazy;
use redis::Script;

use super::rate_limiter::RateLimitStore;
use crate::errors::RateLimitError;

const KEY_PREFIX: &str = "rl:contact";

// INCR and the first PEXPIRE must happen together, otherwise a crash between
// them leaves a counter that never resets.
static INCR_WITH_TTL: Lazy<Script> = Lazy::new(|| {
    Script::new(
        r"
        local count = redis.call('INCR', KEYS[1])
        if count == 1 then
            redis.call('PEXPIRE', KEYS[1], ARGV[1])
        end
        return count
        ",
    )
});

/// Fixed-window limiter whose counters live in Redis, so several instances
/// of the service share one quota per source.
#[derive(Clone)]
pub struct RedisRateLimiter {
    pool: Pool,
    max_requests: u32,
    window: Duration,
}

impl RedisRateLimiter {
    pub fn new(pool: Pool, max_requests: u32, window: Duration) -> Self {
        Self { pool, max_requests, window }
    }

    pub fn from_url(url: &str, max_requests: u32, window: Duration) -> Result<Self, RateLimitError> {
        let pool = RedisPoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| RateLimitError::Pool(e.to_string()))?;

        Ok(Self::new(pool, max_requests, window))
    }

    fn key(source_id: &str) -> String {
        format!("{}:{}", KEY_PREFIX, urlencoding::encode(source_id))
    }
}

#[async_trait]
impl RateLimitStore for RedisRateLimiter {
    async fn admit(&self, source_id: &str) -> Result<bool, RateLimitError> {
        let mut conn = self.pool.get().await?;

        let count: u64 = INCR_WITH_TTL
            .key(Self::key(source_id))
            .arg(self.window.as_millis() as u64)
            .invoke_async(&mut conn)
            .await?;

        Ok(count <= u64::from(self.max_requests))
    }

    /// Redis expires keys on its own.
    async fn sweep(&self) -> usize {
        0
    }
}
