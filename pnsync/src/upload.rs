use std::path::PathBuf;

use pnsync_core::{page, session::Session};

use crate::{error::Error, retry, timing::BATCH_SIZE, timing::Timing, util, wait};

/// Submit `paths` through the upload dialog of the displayed remote folder
/// and wait for the dialog to close. A failed submission is restarted with
/// the whole batch.
pub fn upload_batch(session: &dyn Session, timing: &Timing, paths: &[PathBuf]) -> Result<(), Error> {
    if paths.is_empty() || paths.len() > BATCH_SIZE {
        return Err(Error::InvalidBatch(format!(
            "{} files given, expected 1 to {}",
            paths.len(),
            BATCH_SIZE
        )));
    }
    if let Some(path) = paths.iter().find(|path| !path.is_absolute()) {
        return Err(Error::InvalidBatch(format!(
            "{} is not an absolute path",
            path.display()
        )));
    }

    let files = paths
        .iter()
        .map(|path| util::path_to_string(path))
        .collect::<Result<Vec<String>, Error>>()?
        .join("\n");

    retry::with_reload(
        session,
        timing,
        &format!("Upload batch of {} files", paths.len()),
        || {
            wait::interactable(session, page::upload_files_button(), timing)?;
            session.click(&page::upload_files_button())?;
            wait::interactable(session, page::upload_files_submit(), timing)?;
            session.send_keys(&page::file_field(), &files)?;
            session.click(&page::upload_files_submit())?;
            wait::invisible(session, page::upload_files_modal(), timing)
        },
    )
}
