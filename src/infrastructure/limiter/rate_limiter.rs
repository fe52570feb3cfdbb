use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};

use crate::errors::RateLimitError;

/// Per-source admission control shared by every worker.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Records an attempt from `source_id` and reports whether it is admitted.
    async fn admit(&self, source_id: &str) -> Result<bool, RateLimitError>;

    /// Drops state for windows that have already closed. Returns how many
    /// entries were removed.
    async fn sweep(&self) -> usize;
}

/// Counter for one source inside its current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_reset_at: Instant,
}

impl RateLimitEntry {
    fn open(now: Instant, window: Duration) -> Self {
        Self {
            count: 1,
            window_reset_at: now + window,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now > self.window_reset_at
    }
}

/// Fixed-window counter kept in process memory.
///
/// Windows are anchored at the first admitted call of each source, so a burst
/// straddling a window boundary can briefly see up to twice the cap.
#[derive(Debug, Clone)]
pub struct FixedWindowLimiter {
    entries: Arc<DashMap<String, RateLimitEntry>>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            max_requests,
            window,
        }
    }

    /// Admission check against an explicit clock reading.
    ///
    /// The shard lock taken by `entry` covers the whole read-increment-compare,
    /// so concurrent callers for one source cannot both slip past the cap.
    pub fn admit_at(&self, source_id: &str, now: Instant) -> bool {
        match self.entries.entry(source_id.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(RateLimitEntry::open(now, self.window));
                true
            }
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if entry.is_expired(now) {
                    *entry = RateLimitEntry::open(now, self.window);
                    true
                } else if entry.count < self.max_requests {
                    entry.count += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn entry(&self, source_id: &str) -> Option<RateLimitEntry> {
        self.entries.get(source_id).map(|e| *e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl RateLimitStore for FixedWindowLimiter {
    async fn admit(&self, source_id: &str) -> Result<bool, RateLimitError> {
        Ok(self.admit_at(source_id, Instant::now()))
    }

    async fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }
}
