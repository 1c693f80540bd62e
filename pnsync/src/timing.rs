use std::time::Duration;

use crate::retry::Backoff;

pub const BATCH_SIZE: usize = 500;
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
pub const MAX_ATTEMPTS: u32 = 5;
pub const BACKOFF_BASE: Duration = Duration::from_secs(1);
pub const BACKOFF_MAX: Duration = Duration::from_secs(30);

/// Fixed delays of a run. Only tests build something else than `default()`.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
    pub settle_delay: Duration,
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            wait_timeout: WAIT_TIMEOUT,
            poll_interval: POLL_INTERVAL,
            settle_delay: SETTLE_DELAY,
            max_attempts: MAX_ATTEMPTS,
            backoff: Backoff::new(BACKOFF_BASE, BACKOFF_MAX),
        }
    }
}

impl Timing {
    /// No sleeping at all: every wait checks its condition once.
    pub fn immediate() -> Self {
        Self {
            wait_timeout: Duration::ZERO,
            poll_interval: Duration::ZERO,
            settle_delay: Duration::ZERO,
            max_attempts: MAX_ATTEMPTS,
            backoff: Backoff::new(Duration::ZERO, Duration::ZERO),
        }
    }
}
