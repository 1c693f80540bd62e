use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

/// Immediate entries of a local folder, in filesystem enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalDirectory {
    pub files: Vec<PathBuf>,
    pub folders: Vec<PathBuf>,
}

impl LocalDirectory {
    pub fn read(path: &Path) -> Result<Self, Error> {
        let mut directory = Self::default();

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry?;
            let file_type = entry.file_type();
            if file_type.is_file() {
                directory.files.push(entry.into_path());
            } else if file_type.is_dir() {
                directory.folders.push(entry.into_path());
            } else {
                log::debug!("Ignore {} (not a file or a folder)", entry.path().display());
            }
        }

        Ok(directory)
    }
}
