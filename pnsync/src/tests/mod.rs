use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use pnsync_core::page;
use pnsync_core::session::{Locator, Session, SessionError};
use testdir::testdir;
use uuid::Uuid;

pub const FAKE_BASE_URL: &str = "https://fake.test";
pub const FAKE_PROJECT_ID: &str = "p";
pub const FAKE_ROOT_URL: &str = "https://fake.test/projects/p/files/";

pub fn tmpdir() -> PathBuf {
    let path = testdir!().join(PathBuf::from(Uuid::new_v4().to_string()));
    fs::create_dir_all(&path).unwrap();
    path
}

/// Create `entries` under `root`. Entries ending with `/` are folders.
pub fn ensure_disk(entries: &[&str], root: &Path) {
    for entry in entries {
        let absolute_path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&absolute_path).unwrap();
        } else {
            if let Some(parent) = absolute_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::File::create(&absolute_path).unwrap();
        }
    }
}

#[derive(Debug, Default)]
struct Folder {
    files: BTreeSet<String>,
    folders: BTreeMap<String, Folder>,
}

impl Folder {
    fn collect(&self, prefix: &str, paths: &mut Vec<String>) {
        for file in &self.files {
            paths.push(format!("{}{}", prefix, file));
        }
        for (name, folder) in &self.folders {
            let folder_prefix = format!("{}{}/", prefix, name);
            paths.push(folder_prefix.clone());
            folder.collect(&folder_prefix, paths);
        }
    }
}

#[derive(Debug)]
enum Dialog {
    CreateFolder(String),
    Upload(String),
}

#[derive(Debug, Default)]
struct State {
    root: Folder,
    current: Vec<String>,
    dialog: Option<Dialog>,
    stalled_dialogs: u32,
    stalled_controls: u32,
    created_folders: usize,
    batches: Vec<Vec<String>>,
    enters: usize,
    leaves: usize,
    reloads: usize,
}

impl State {
    fn folder(&self, path: &[String]) -> Option<&Folder> {
        let mut folder = &self.root;
        for name in path {
            folder = folder.folders.get(name)?;
        }
        Some(folder)
    }

    fn folder_mut(&mut self, path: &[String]) -> Option<&mut Folder> {
        let mut folder = &mut self.root;
        for name in path {
            folder = folder.folders.get_mut(name)?;
        }
        Some(folder)
    }

    fn current_folder(&self) -> &Folder {
        self.folder(&self.current)
            .expect("Current folder must exist")
    }

    fn current_folder_mut(&mut self) -> &mut Folder {
        let current = self.current.clone();
        self.folder_mut(&current)
            .expect("Current folder must exist")
    }

    fn folder_link_target(&self, locator: &Locator) -> Option<String> {
        self.current_folder()
            .folders
            .keys()
            .find(|name| *locator == page::folder_link(name))
            .cloned()
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        if self.stalled_dialogs > 0 {
            self.stalled_dialogs -= 1;
            return;
        }
        self.dialog = Some(dialog);
    }

    fn url(&self) -> String {
        if self.current.is_empty() {
            return FAKE_ROOT_URL.to_string();
        }
        format!("{}{}/", FAKE_ROOT_URL, self.current.join("/"))
    }
}

fn missing(locator: &Locator) -> SessionError {
    SessionError::NoSuchElement(locator.to_string())
}

fn owned(path: &[&str]) -> Vec<String> {
    path.iter().map(|name| name.to_string()).collect()
}

/// In memory remote store answering through the files page contract.
#[derive(Debug, Default)]
pub struct FakeRemote {
    state: RefCell<State>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_folder(&self, path: &[&str], name: &str) {
        self.state
            .borrow_mut()
            .folder_mut(&owned(path))
            .expect("Parent folder must exist")
            .folders
            .entry(name.to_string())
            .or_default();
    }

    pub fn add_file(&self, path: &[&str], name: &str) {
        self.state
            .borrow_mut()
            .folder_mut(&owned(path))
            .expect("Parent folder must exist")
            .files
            .insert(name.to_string());
    }

    pub fn files(&self, path: &[&str]) -> Vec<String> {
        self.state
            .borrow()
            .folder(&owned(path))
            .map(|folder| folder.files.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn folders(&self, path: &[&str]) -> Vec<String> {
        self.state
            .borrow()
            .folder(&owned(path))
            .map(|folder| folder.folders.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Every remote path, folders suffixed with `/`, sorted.
    pub fn tree(&self) -> Vec<String> {
        let mut paths = vec![];
        self.state.borrow().root.collect("", &mut paths);
        paths.sort();
        paths
    }

    pub fn current(&self) -> Vec<String> {
        self.state.borrow().current.clone()
    }

    /// Next `count` dialog openings are lost.
    pub fn stall_dialogs(&self, count: u32) {
        self.state.borrow_mut().stalled_dialogs = count;
    }

    /// Next `count` checks of the "create folder" control report it not ready.
    pub fn stall_folder_controls(&self, count: u32) {
        self.state.borrow_mut().stalled_controls = count;
    }

    pub fn created_folders(&self) -> usize {
        self.state.borrow().created_folders
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.state.borrow().batches.clone()
    }

    pub fn uploaded_files(&self) -> usize {
        self.state.borrow().batches.iter().map(Vec::len).sum()
    }

    pub fn enters(&self) -> usize {
        self.state.borrow().enters
    }

    pub fn leaves(&self) -> usize {
        self.state.borrow().leaves
    }

    pub fn reloads(&self) -> usize {
        self.state.borrow().reloads
    }
}

impl Session for FakeRemote {
    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();
        let path = url
            .strip_prefix(FAKE_ROOT_URL)
            .ok_or_else(|| SessionError::Command(format!("Unknown url {}", url)))?
            .split('/')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect::<Vec<String>>();
        if state.folder(&path).is_none() {
            return Err(SessionError::Command(format!("Not found {}", url)));
        }
        state.current = path;
        state.dialog = None;
        Ok(())
    }

    fn current_url(&self) -> Result<String, SessionError> {
        Ok(self.state.borrow().url())
    }

    fn page_source(&self) -> Result<String, SessionError> {
        let state = self.state.borrow();
        let folder = state.current_folder();
        let mut rows = vec![];
        if !state.current.is_empty() {
            rows.push(r#"<tr class="parentdir"><td><a href="../">Parent Directory</a></td></tr>"#.to_string());
        }
        for name in folder.folders.keys() {
            rows.push(format!(
                r#"<tr class="subdir"><td><a href="{0}/">{0}</a></td><td></td></tr>"#,
                name
            ));
        }
        for name in &folder.files {
            rows.push(format!(
                r#"<tr><td><a href="{0}">{0}</a></td><td>1 B</td></tr>"#,
                name
            ));
        }

        Ok(format!(
            r#"<html><body><table class="files-panel"><tbody>{}</tbody></table></body></html>"#,
            rows.join("")
        ))
    }

    fn click(&self, locator: &Locator) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();

        if *locator == page::create_folder_button() {
            state.open_dialog(Dialog::CreateFolder(String::new()));
        } else if *locator == page::upload_files_button() {
            state.open_dialog(Dialog::Upload(String::new()));
        } else if *locator == page::create_folder_submit() {
            let name = match state.dialog.take() {
                Some(Dialog::CreateFolder(name)) => name,
                _ => return Err(missing(locator)),
            };
            let current = state.current_folder_mut();
            if !current.folders.contains_key(&name) {
                current.folders.insert(name, Folder::default());
                state.created_folders += 1;
            }
        } else if *locator == page::upload_files_submit() {
            let files = match state.dialog.take() {
                Some(Dialog::Upload(files)) => files,
                _ => return Err(missing(locator)),
            };
            let paths = files
                .split('\n')
                .map(str::to_string)
                .collect::<Vec<String>>();
            let current = state.current_folder_mut();
            for path in &paths {
                let name = Path::new(path)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| SessionError::Command(format!("Bad path {}", path)))?;
                current.files.insert(name.to_string());
            }
            state.batches.push(paths);
        } else if *locator == page::parent_link() {
            if state.current.pop().is_none() {
                return Err(missing(locator));
            }
            state.leaves += 1;
        } else if let Some(name) = state.folder_link_target(locator) {
            state.current.push(name);
            state.enters += 1;
        } else {
            return Err(missing(locator));
        }

        Ok(())
    }

    fn send_keys(&self, locator: &Locator, text: &str) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();
        match state.dialog.as_mut() {
            Some(Dialog::CreateFolder(name)) if *locator == page::folder_name_input() => {
                name.push_str(text)
            }
            Some(Dialog::Upload(files)) if *locator == page::file_field() => {
                files.push_str(text)
            }
            _ => return Err(missing(locator)),
        }
        Ok(())
    }

    fn is_displayed(&self, locator: &Locator) -> Result<bool, SessionError> {
        let state = self.state.borrow();
        if *locator == page::upload_files_modal() {
            return Ok(matches!(state.dialog, Some(Dialog::Upload(_))));
        }
        drop(state);
        self.is_interactable(locator)
    }

    fn is_interactable(&self, locator: &Locator) -> Result<bool, SessionError> {
        let mut state = self.state.borrow_mut();

        if *locator == page::create_folder_button() {
            if state.stalled_controls > 0 {
                state.stalled_controls -= 1;
                return Ok(false);
            }
            return Ok(true);
        }
        if *locator == page::upload_files_button() {
            return Ok(true);
        }
        if *locator == page::create_folder_submit() {
            return Ok(matches!(state.dialog, Some(Dialog::CreateFolder(_))));
        }
        if *locator == page::upload_files_submit() {
            return Ok(matches!(state.dialog, Some(Dialog::Upload(_))));
        }
        if *locator == page::parent_link() && !state.current.is_empty() {
            return Ok(true);
        }
        if state.folder_link_target(locator).is_some() {
            return Ok(true);
        }

        Err(missing(locator))
    }

    fn reload(&self) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();
        state.reloads += 1;
        state.dialog = None;
        Ok(())
    }
}
