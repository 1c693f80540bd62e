use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use pnsync_core::{
    config::PartialConfig,
    page::{self, DEFAULT_BASE_URL},
    webdriver::DEFAULT_WEBDRIVER_URL,
};

#[derive(Clone)]
pub struct Context {
    pub project_id: String,
    pub username: String,
    pub password: String,
    pub dataset_dir: PathBuf,
    pub webdriver_url: String,
    pub base_url: String,
    pub headless: bool,
}

impl Context {
    /// Build from layered settings. `password` is only called when no source
    /// gave a password.
    pub fn from_config<F>(config: PartialConfig, password: F) -> Result<Self>
    where
        F: FnOnce() -> Result<String>,
    {
        let project_id = config
            .project_id
            .context("Missing project id (--project-id or [project] id)")?;
        let username = config
            .username
            .context("Missing username (--username or [account] username)")?;
        let dataset_dir = config
            .dataset_dir
            .context("Missing dataset directory (--dataset-dir or [project] dataset_dir)")?;
        let dataset_dir = fs::canonicalize(&dataset_dir).context(format!(
            "Unable to resolve dataset directory '{}'",
            dataset_dir.display()
        ))?;
        if !dataset_dir.is_dir() {
            anyhow::bail!("Dataset path '{}' is not a directory", dataset_dir.display());
        }
        let password = match config.password {
            Some(password) => password,
            None => password()?,
        };

        Ok(Self {
            project_id,
            username,
            password,
            dataset_dir,
            webdriver_url: config
                .webdriver_url
                .unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string()),
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            headless: config.headless.unwrap_or(false),
        })
    }

    pub fn files_url(&self) -> String {
        page::project_files_url(&self.base_url, &self.project_id)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("project_id", &self.project_id)
            .field("username", &self.username)
            .field("dataset_dir", &self.dataset_dir)
            .field("webdriver_url", &self.webdriver_url)
            .field("base_url", &self.base_url)
            .field("headless", &self.headless)
            .finish()
    }
}
