use std::path::{Path, PathBuf};

use super::Subject;

/// A directory holding a manifest, and the subjects the manifest lists.
///
/// The subject list is never empty; manifests without subjects are rejected
/// while scanning.
#[derive(Debug, Clone)]
pub struct NotesDirectory {
    pub path: PathBuf,
    /// Last segment of `path`, shown in menus.
    pub name: String,
    pub subjects: Vec<Subject>,
}

impl NotesDirectory {
    pub fn new(path: PathBuf, subjects: Vec<Subject>) -> Self {
        let name = display_name(&path);
        Self {
            path,
            name,
            subjects,
        }
    }

    /// Directory that holds this directory's notes files.
    pub fn notes_dir(&self, notes_dir_name: &str) -> PathBuf {
        self.path.join(notes_dir_name)
    }
}

/// Last path segment, or the whole path when there is none (`.`, `/`).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
