use std::path::Path;

use crate::error::Error;

pub fn path_to_string(path: &Path) -> Result<String, Error> {
    Ok(path
        .to_str()
        .ok_or_else(|| Error::PathEncoding(path.to_path_buf()))?
        .to_string())
}

pub fn file_name(path: &Path) -> Result<String, Error> {
    Ok(path
        .file_name()
        .and_then(|file_name| file_name.to_str())
        .ok_or_else(|| Error::PathEncoding(path.to_path_buf()))?
        .to_string())
}
