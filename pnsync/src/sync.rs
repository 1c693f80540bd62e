use std::{fmt::Display, path::Path, path::PathBuf};

use pnsync_core::session::Session;

use crate::{
    error::Error,
    local::LocalDirectory,
    navigation::Navigator,
    provision::{self, Provision},
    reader,
    timing::{Timing, BATCH_SIZE},
    upload, util,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub directories: usize,
    pub uploaded_files: usize,
    pub skipped_files: usize,
    pub batches: usize,
    pub created_folders: usize,
    pub existing_folders: usize,
}

impl Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} directories visited, {} files uploaded in {} batches, {} files already present, {} folders created, {} folders already present",
            self.directories,
            self.uploaded_files,
            self.batches,
            self.skipped_files,
            self.created_folders,
            self.existing_folders
        )
    }
}

/// Mirrors a local tree into the remote folder displayed by the session.
pub struct Synchronizer<'a> {
    session: &'a dyn Session,
    timing: Timing,
    navigator: Navigator<'a>,
    report: SyncReport,
}

impl<'a> Synchronizer<'a> {
    pub fn new(session: &'a dyn Session, timing: Timing) -> Self {
        Self {
            session,
            timing,
            navigator: Navigator::new(session, timing),
            report: SyncReport::default(),
        }
    }

    /// Upload what is missing of `local_path` into the displayed remote
    /// folder, recursively. The session ends on the folder it started from.
    pub fn sync_directory(mut self, local_path: &Path) -> Result<SyncReport, Error> {
        self.sync_level(local_path, 0)?;
        Ok(self.report)
    }

    fn sync_level(&mut self, local_path: &Path, depth: usize) -> Result<(), Error> {
        if self.navigator.depth() != depth {
            return Err(Error::DepthMismatch {
                expected: depth,
                actual: self.navigator.depth(),
            });
        }

        log::info!("Uploading: {}", local_path.display());
        let directory = LocalDirectory::read(local_path)?;
        self.report.directories += 1;

        if !directory.files.is_empty() {
            self.upload_files(directory.files)?;
        }

        for folder in &directory.folders {
            let name = util::file_name(folder)?;
            match provision::ensure_folder(self.session, &self.timing, &name)? {
                Provision::Created => self.report.created_folders += 1,
                Provision::Existing => self.report.existing_folders += 1,
            }
            self.navigator.enter(&name)?;
            self.sync_level(folder, depth + 1)?;
        }

        if depth > 0 {
            self.navigator.leave()?;
        }

        Ok(())
    }

    fn upload_files(&mut self, files: Vec<PathBuf>) -> Result<(), Error> {
        let listing = reader::snapshot(self.session, &self.timing)?;

        let mut skipped = vec![];
        let mut to_upload = vec![];
        for file in files {
            let name = util::file_name(&file)?;
            if listing.has_file(&name) {
                skipped.push(name);
            } else {
                to_upload.push(file);
            }
        }

        if !skipped.is_empty() {
            log::info!(
                "The following files were already present and won't be uploaded again: {}",
                skipped.join(", ")
            );
            self.report.skipped_files += skipped.len();
        }

        for batch in to_upload.chunks(BATCH_SIZE) {
            log::info!("Upload {} files into {}", batch.len(), self.navigator.path());
            upload::upload_batch(self.session, &self.timing, batch)?;
            self.report.batches += 1;
            self.report.uploaded_files += batch.len();
        }

        Ok(())
    }
}
