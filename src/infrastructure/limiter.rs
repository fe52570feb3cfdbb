use async_trait::async_trait;

use crate::{errors::RateLimitError, settings::AppConfig};

pub mod rate_limiter;
pub mod redis_limiter;

pub use rate_limiter::{FixedWindowLimiter, RateLimitEntry, RateLimitStore};
pub use redis_limiter::RedisRateLimiter;

#[derive(Clone)]
pub enum RateLimiterBackend {
    InMemory(FixedWindowLimiter),
    Redis(RedisRateLimiter),
}

impl RateLimiterBackend {
    /// Redis when a URL is configured and a pool can be built, otherwise the
    /// in-process table.
    pub fn from_config(config: &AppConfig) -> Self {
        let max_requests = config.rate_limit_max_requests;
        let window = config.rate_limit_window();

        if let Some(url) = &config.redis_url {
            match RedisRateLimiter::from_url(url, max_requests, window) {
                Ok(limiter) => {
                    tracing::info!("Using Redis rate limiter");
                    return RateLimiterBackend::Redis(limiter);
                }
                Err(e) => tracing::error!("Redis rate limiter unavailable, falling back to in-memory: {}", e),
            }
        }

        RateLimiterBackend::InMemory(FixedWindowLimiter::new(max_requests, window))
    }
}

#[async_trait]
impl RateLimitStore for RateLimiterBackend {
    async fn admit(&self, source_id: &str) -> Result<bool, RateLimitError> {
        match self {
            RateLimiterBackend::InMemory(inner) => inner.admit(source_id).await,
            RateLimiterBackend::Redis(inner) => inner.admit(source_id).await,
        }
    }

    async fn sweep(&self) -> usize {
        match self {
            RateLimiterBackend::InMemory(inner) => inner.sweep().await,
            RateLimiterBackend::Redis(inner) => inner.sweep().await,
        }
    }
}
