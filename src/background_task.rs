use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::limiter::RateLimitStore;

/// Periodically drops rate-limit entries whose window has closed, keeping the
/// table bounded by the number of sources seen in the last window.
pub async fn start_sweep_task<L>(limiter: L, every: Duration)
where
    L: RateLimitStore,
{
    let mut interval = interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let removed = limiter.sweep().await;
        if removed > 0 {
            tracing::debug!("Swept {} expired rate-limit entries", removed);
        }
    }
}
