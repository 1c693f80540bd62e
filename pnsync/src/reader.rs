use std::thread;

use pnsync_core::{listing::RemoteListing, session::Session};

use crate::{error::Error, timing::Timing};

/// Snapshot of the currently displayed remote folder, taken after the
/// settling delay. No retry: callers needing a fresh view call it again.
pub fn snapshot(session: &dyn Session, timing: &Timing) -> Result<RemoteListing, Error> {
    thread::sleep(timing.settle_delay);
    let page_source = session.page_source()?;
    Ok(RemoteListing::from_html(&page_source)?)
}
