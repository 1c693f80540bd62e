use std::{io, path::PathBuf};

use pnsync_core::{listing::ListingError, session::SessionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Timeout while waiting for {0}")]
    Timeout(String),
    #[error("Operation exhausted: {operation} still timing out after {attempts} attempts")]
    OperationExhausted { operation: String, attempts: u32 },
    #[error("Programmatic error : leave folder requested at remote root")]
    NavigationUnderflow,
    #[error("Programmatic error : synchronizer at depth {expected} but session at depth {actual}")]
    DepthMismatch { expected: usize, actual: usize },
    #[error("Invalid upload batch: {0}")]
    InvalidBatch(String),
    #[error("Authentication error: {0}")]
    Authentication(String),
    #[error("Unable to decode file name of {0}")]
    PathEncoding(PathBuf),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),
    #[error("Related file io error : {0}")]
    Io(#[from] io::Error),
    #[error("Directory walk error : {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Failures a page reload followed by a new attempt can fix.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Timeout(_) => true,
            Error::Session(error) => error.is_transient(),
            _ => false,
        }
    }
}
