//! Structural contract of the remote project "files" page.
use crate::{session::Locator, utils::xpath_literal};

pub const DEFAULT_BASE_URL: &str = "https://physionet.org";

pub const CREATE_FOLDER_BUTTON_ID: &str = "create-folder-button";
pub const CREATE_FOLDER_SUBMIT_ID: &str = "create-folder-button-submit";
pub const FOLDER_NAME_INPUT_ID: &str = "id_folder_name";
pub const UPLOAD_FILES_BUTTON_ID: &str = "upload-files-button";
pub const UPLOAD_FILES_SUBMIT_ID: &str = "upload-files-button-submit";
pub const UPLOAD_FILES_MODAL_ID: &str = "upload-files-modal";
pub const FILE_FIELD_ID: &str = "id_file_field";

pub const LOGIN_USERNAME_ID: &str = "id_username";
pub const LOGIN_PASSWORD_ID: &str = "id_password";
pub const LOGIN_REMEMBER_ID: &str = "id_remember";
pub const LOGIN_SUBMIT_ID: &str = "login";

pub const FILES_PANEL_CLASS: &str = "files-panel";
pub const SUBDIR_ROW_CLASS: &str = "subdir";
pub const PARENTDIR_ROW_CLASS: &str = "parentdir";

pub fn project_files_url(base_url: &str, project_id: &str) -> String {
    format!(
        "{}/projects/{}/files/",
        base_url.trim_end_matches('/'),
        project_id
    )
}

pub fn create_folder_button() -> Locator {
    Locator::id(CREATE_FOLDER_BUTTON_ID)
}

pub fn create_folder_submit() -> Locator {
    Locator::id(CREATE_FOLDER_SUBMIT_ID)
}

pub fn folder_name_input() -> Locator {
    Locator::id(FOLDER_NAME_INPUT_ID)
}

pub fn upload_files_button() -> Locator {
    Locator::id(UPLOAD_FILES_BUTTON_ID)
}

pub fn upload_files_submit() -> Locator {
    Locator::id(UPLOAD_FILES_SUBMIT_ID)
}

pub fn upload_files_modal() -> Locator {
    Locator::id(UPLOAD_FILES_MODAL_ID)
}

pub fn file_field() -> Locator {
    Locator::id(FILE_FIELD_ID)
}

pub fn login_username() -> Locator {
    Locator::id(LOGIN_USERNAME_ID)
}

pub fn login_password() -> Locator {
    Locator::id(LOGIN_PASSWORD_ID)
}

pub fn login_remember() -> Locator {
    Locator::id(LOGIN_REMEMBER_ID)
}

pub fn login_submit() -> Locator {
    Locator::id(LOGIN_SUBMIT_ID)
}

/// Link of the "go to parent" row.
pub fn parent_link() -> Locator {
    Locator::XPath(format!(
        "//table[@class=\"{}\"]/tbody/tr[@class=\"{}\"]/td[1]/a",
        FILES_PANEL_CLASS, PARENTDIR_ROW_CLASS
    ))
}

/// Link of the subfolder row named `name`. Text is compared as is, like
/// the listing reads it.
pub fn folder_link(name: &str) -> Locator {
    Locator::XPath(format!(
        "//table[@class=\"{}\"]/tbody/tr[@class=\"{}\"]/td[1]/a[.={}]",
        FILES_PANEL_CLASS,
        SUBDIR_ROW_CLASS,
        xpath_literal(name)
    ))
}
