//! Async token-bucket rate limiter.
//!
//! At most `max_rate` acquisitions per `time_period` window. Callers
//! suspend on [`AsyncLimiter::acquire`] once the window is exhausted and
//! resume when it rolls over; there is no busy-wait and no fairness
//! guarantee beyond tokio's wakeup order.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Sliding-window async rate limiter
pub struct AsyncLimiter {
    max_rate: usize,
    time_period: Duration,
    history: Mutex<VecDeque<Instant>>,
}

impl AsyncLimiter {
    /// Create a limiter allowing `max_rate` acquisitions per
    /// `time_period`.
    ///
    /// # Panics
    /// Panics if `max_rate` is zero, which could never be acquired.
    pub fn new(max_rate: usize, time_period: Duration) -> Self {
        assert!(max_rate > 0, "max_rate must be at least 1");
        Self {
            max_rate,
            time_period,
            history: Mutex::new(VecDeque::with_capacity(max_rate)),
        }
    }

    /// Wait for a slot in the current window.
    ///
    /// Returns as soon as a slot is free; the slot is consumed
    /// immediately and expires `time_period` later.
    pub async fn acquire(&self) {
        loop {
            let wait_until = {
                let mut history = self.history.lock().await;
                let now = Instant::now();

                while let Some(front) = history.front() {
                    if now.duration_since(*front) >= self.time_period {
                        history.pop_front();
                    } else {
                        break;
                    }
                }

                if history.len() < self.max_rate {
                    history.push_back(now);
                    return;
                }

                match history.front() {
                    Some(oldest) => *oldest + self.time_period,
                    None => now,
                }
            };

            debug!("Rate limit reached, suspending until window rolls over");
            tokio::time::sleep_until(wait_until).await;
        }
    }
}
