use pnsync_core::{page, session::Session};

use crate::{error::Error, retry, timing::Timing, wait};

/// Moves the session between remote folders and keeps track of how deep it
/// is, relative to the folder displayed when the navigator was built.
pub struct Navigator<'a> {
    session: &'a dyn Session,
    timing: Timing,
    stack: Vec<String>,
}

impl<'a> Navigator<'a> {
    pub fn new(session: &'a dyn Session, timing: Timing) -> Self {
        Self {
            session,
            timing,
            stack: vec![],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn path(&self) -> String {
        format!("/{}", self.stack.join("/"))
    }

    pub fn enter(&mut self, name: &str) -> Result<(), Error> {
        let session = self.session;
        let timing = &self.timing;
        let link = page::folder_link(name);
        let origin = session.current_url()?;

        retry::with_reload(session, timing, &format!("Enter folder '{}'", name), || {
            back_to(session, &origin)?;
            wait::interactable(session, link.clone(), timing)?;
            session.click(&link)?;
            wait_folder_loaded(session, timing)
        })?;

        self.stack.push(name.to_string());
        log::debug!("Entered {} (depth {})", self.path(), self.depth());
        Ok(())
    }

    pub fn leave(&mut self) -> Result<(), Error> {
        if self.stack.is_empty() {
            return Err(Error::NavigationUnderflow);
        }

        let session = self.session;
        let timing = &self.timing;
        let link = page::parent_link();
        let origin = session.current_url()?;

        retry::with_reload(session, timing, "Leave folder", || {
            back_to(session, &origin)?;
            wait::interactable(session, link.clone(), timing)?;
            session.click(&link)?;
            wait_folder_loaded(session, timing)
        })?;

        self.stack.pop();
        log::debug!("Back to {} (depth {})", self.path(), self.depth());
        Ok(())
    }
}

/// A click may have been followed before the previous attempt timed out.
/// Restart from the folder the move started from.
fn back_to(session: &dyn Session, origin: &str) -> Result<(), Error> {
    if session.current_url()? != origin {
        log::debug!("Return to {} before retrying", origin);
        session.navigate(origin)?;
    }
    Ok(())
}

/// Folder actions are available once the folder page is fully rendered.
fn wait_folder_loaded(session: &dyn Session, timing: &Timing) -> Result<(), Error> {
    wait::interactable(session, page::create_folder_button(), timing)?;
    wait::interactable(session, page::upload_files_button(), timing)
}
