use std::{thread, time::Duration};

use pnsync_core::session::Session;

use crate::{error::Error, timing::Timing};

/// Delay before retry `attempt` (0 based): `base` doubled on each attempt,
/// never more than `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    base: Duration,
    max: Duration,
}

impl Backoff {
    pub fn new(base: Duration, max: Duration) -> Self {
        Self { base, max }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base.saturating_mul(factor).min(self.max)
    }
}

/// Run `operation` until it returns something else than a timeout (or a
/// transient lookup error). After such a failure the page is reloaded and
/// `operation` restarts from its first step.
/// Gives up with `OperationExhausted` after `timing.max_attempts` attempts.
pub fn with_reload<T, F>(
    session: &dyn Session,
    timing: &Timing,
    operation_name: &str,
    mut operation: F,
) -> Result<T, Error>
where
    F: FnMut() -> Result<T, Error>,
{
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match operation() {
            Err(error) if error.is_retryable() => {
                if attempt >= timing.max_attempts {
                    log::error!(
                        "{} failed ({}) {} times, give up",
                        operation_name,
                        error,
                        attempt
                    );
                    return Err(Error::OperationExhausted {
                        operation: operation_name.to_string(),
                        attempts: attempt,
                    });
                }

                let delay = timing.backoff.delay(attempt - 1);
                log::warn!(
                    "{} failed ({}) at attempt {}/{}, reload and retry in {:?}",
                    operation_name,
                    error,
                    attempt,
                    timing.max_attempts,
                    delay
                );
                thread::sleep(delay);
                session.reload()?;
            }
            result => return result,
        }
    }
}
