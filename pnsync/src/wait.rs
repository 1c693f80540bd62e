use std::{
    fmt::Display,
    thread,
    time::{Duration, Instant},
};

use pnsync_core::session::{Locator, Session, SessionError};

use crate::{error::Error, timing::Timing};

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Element is present, displayed and enabled.
    Interactable(Locator),
    /// Element is absent or not displayed.
    Invisible(Locator),
}

impl Condition {
    fn check(&self, session: &dyn Session) -> Result<bool, SessionError> {
        match self {
            Condition::Interactable(locator) => session.is_interactable(locator),
            Condition::Invisible(locator) => match session.is_displayed(locator) {
                Ok(displayed) => Ok(!displayed),
                Err(error) if error.is_transient() => Ok(true),
                Err(error) => Err(error),
            },
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Interactable(locator) => write!(f, "{} to be interactable", locator),
            Condition::Invisible(locator) => write!(f, "{} to be invisible", locator),
        }
    }
}

/// Poll `condition` until it holds or `timeout` elapsed. Missing and stale
/// elements count as "not yet".
pub fn until(
    session: &dyn Session,
    condition: &Condition,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<(), Error> {
    let started = Instant::now();
    loop {
        match condition.check(session) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(error) if error.is_transient() => {
                log::debug!("Transient lookup error while waiting {}: {}", condition, error)
            }
            Err(error) => return Err(error.into()),
        }

        if started.elapsed() >= timeout {
            return Err(Error::Timeout(condition.to_string()));
        }
        thread::sleep(poll_interval);
    }
}

pub fn interactable(session: &dyn Session, locator: Locator, timing: &Timing) -> Result<(), Error> {
    until(
        session,
        &Condition::Interactable(locator),
        timing.wait_timeout,
        timing.poll_interval,
    )
}

pub fn invisible(session: &dyn Session, locator: Locator, timing: &Timing) -> Result<(), Error> {
    until(
        session,
        &Condition::Invisible(locator),
        timing.wait_timeout,
        timing.poll_interval,
    )
}
