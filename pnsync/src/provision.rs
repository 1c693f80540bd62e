use pnsync_core::{page, session::Session};

use crate::{error::Error, reader, retry, timing::Timing, wait};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provision {
    Existing,
    Created,
}

/// Make sure the displayed remote folder has a subfolder named `name`.
pub fn ensure_folder(session: &dyn Session, timing: &Timing, name: &str) -> Result<Provision, Error> {
    retry::with_reload(session, timing, &format!("Create folder '{}'", name), || {
        if reader::snapshot(session, timing)?.has_folder(name) {
            log::info!("Folder '{}' already exists. Skipping creation.", name);
            return Ok(Provision::Existing);
        }

        wait::interactable(session, page::create_folder_button(), timing)?;
        session.click(&page::create_folder_button())?;
        wait::interactable(session, page::create_folder_submit(), timing)?;
        session.send_keys(&page::folder_name_input(), name)?;
        session.click(&page::create_folder_submit())?;

        log::info!("Folder '{}' created", name);
        Ok(Provision::Created)
    })
}
