//! Request rate limiting
//!
//! The crawl issues requests one at a time, so a single reservation clock is
//! enough: each caller reserves the next free slot and sleeps until it arrives.
//! Slots are spaced `1 / rate` apart, which caps the long-run average rate.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Caps the rate of outbound requests for one crawl run
pub struct RateLimiter {
    /// Minimum spacing between two granted slots
    interval: Duration,

    /// Earliest instant the next caller may proceed (None until first use)
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `requests_per_second` on average
    ///
    /// # Panics
    ///
    /// Panics if `requests_per_second` is not a positive finite number.
    /// Configuration validation rejects such values before this is reached.
    pub fn new(requests_per_second: f64) -> Self {
        assert!(
            requests_per_second.is_finite() && requests_per_second > 0.0,
            "requests_per_second must be positive, got {}",
            requests_per_second
        );
        Self::with_interval(Duration::from_secs_f64(1.0 / requests_per_second))
    }

    /// Creates a limiter granting one slot per `interval`
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until another request may be issued
    ///
    /// The first call returns immediately. The lock is held while sleeping,
    /// so concurrent callers are granted slots in arrival order.
    ///
    /// # Returns
    ///
    /// How long the caller was held back.
    pub async fn acquire(&self) -> Duration {
        let mut next_slot = self.next_slot.lock().await;
        let now = Instant::now();

        let slot = match *next_slot {
            Some(slot) if slot > now => slot,
            _ => now,
        };
        *next_slot = Some(slot + self.interval);

        if slot > now {
            tokio::time::sleep_until(slot).await;
        }

        slot - now
    }
}
