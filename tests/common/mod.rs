#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use docnotes::error::{NotesError, Result};
use docnotes::launcher::Launcher;

/// Write a manifest into `dir`, creating it first.
pub fn write_manifest(dir: &Path, json: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("Failed to create directory");
    let path = dir.join("notes.json");
    fs::write(&path, json).expect("Failed to write manifest");
    path
}

pub const REACT_ONLY: &str = r#"[{"name": "react", "base_url": "https://reactjs.org/docs"}]"#;

pub const REACT_AND_REDUX: &str = r#"[
    {"name": "react", "base_url": "https://reactjs.org/docs"},
    {"name": "redux", "base_url": "https://redux.js.org/docs/"}
]"#;

/// Launcher that records what it was asked to open instead of opening it.
#[derive(Default)]
pub struct RecordingLauncher {
    pub urls: RefCell<Vec<String>>,
    pub edited: RefCell<Vec<PathBuf>>,
    pub fail_editor: bool,
}

impl RecordingLauncher {
    pub fn failing_editor() -> Self {
        Self {
            fail_editor: true,
            ..Default::default()
        }
    }

    pub fn is_untouched(&self) -> bool {
        self.urls.borrow().is_empty() && self.edited.borrow().is_empty()
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&self, url: &str) {
        self.urls.borrow_mut().push(url.to_string());
    }

    fn open_editor(&self, path: &Path) -> Result<()> {
        if self.fail_editor {
            return Err(NotesError::Launch {
                command: "missing-editor".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        self.edited.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
