use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ini::Ini;

use crate::utils::strbool;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "pnsync.conf";

/// Run settings as read from one source (config file or command line).
/// Every field is optional; sources are layered with `merge`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialConfig {
    pub project_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub dataset_dir: Option<PathBuf>,
    pub webdriver_url: Option<String>,
    pub base_url: Option<String>,
    pub headless: Option<bool>,
}

impl PartialConfig {
    pub fn from_file(config_file_path: &Path) -> Result<Self> {
        let config_ini = Ini::load_from_file(config_file_path).context(format!(
            "Error when loading config file at '{}'",
            config_file_path.display()
        ))?;
        Ok(Self::from_ini(&config_ini))
    }

    /// Load `pnsync.conf` from `folder` if it exists.
    pub fn from_default_file(folder: &Path) -> Result<Option<Self>> {
        let config_file_path = folder.join(DEFAULT_CONFIG_FILE_NAME);
        if !config_file_path.is_file() {
            return Ok(None);
        }
        log::debug!("Load config from '{}'", config_file_path.display());
        Ok(Some(Self::from_file(&config_file_path)?))
    }

    pub fn from_ini(config_ini: &Ini) -> Self {
        let get = |section: &str, key: &str| -> Option<String> {
            config_ini
                .get_from(Some(section), key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            project_id: get("project", "id"),
            username: get("account", "username"),
            password: get("account", "password"),
            dataset_dir: get("project", "dataset_dir").map(PathBuf::from),
            webdriver_url: get("browser", "webdriver"),
            base_url: get("browser", "base_url"),
            headless: get("browser", "headless").map(|value| strbool(&value)),
        }
    }

    /// Values of `self` win, `other` fills the gaps.
    pub fn merge(self, other: Self) -> Self {
        Self {
            project_id: self.project_id.or(other.project_id),
            username: self.username.or(other.username),
            password: self.password.or(other.password),
            dataset_dir: self.dataset_dir.or(other.dataset_dir),
            webdriver_url: self.webdriver_url.or(other.webdriver_url),
            base_url: self.base_url.or(other.base_url),
            headless: self.headless.or(other.headless),
        }
    }
}
