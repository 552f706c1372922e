//! Discovery of directories that hold a subject manifest.

use std::fs;
use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

use crate::config::AppConfig;
use crate::error::{NotesError, Result};
use crate::models::{validate_manifest, NotesDirectory, Subject};

/// Walk `root` and collect every directory containing the configured manifest.
///
/// Returns `Ok(None)` when nothing is found. Entries are visited in file-name
/// order within each directory, so numbering in menus is stable between runs.
pub fn find_notes_dirs(root: &Path, config: &AppConfig) -> Result<Option<Vec<NotesDirectory>>> {
    if !root.exists() {
        return Err(NotesError::SearchRootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        tracing::debug!("{} is not a directory", root.display());
        return Ok(None);
    }

    let mut dirs = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_name() == config.manifest_file.as_str())
        // Symlinked directories are not descended into, but a symlinked manifest counts.
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
    {
        let manifest_path = entry.path();
        let Some(directory) = manifest_path.parent() else {
            continue;
        };

        let subjects = load_manifest(manifest_path)?;
        tracing::debug!(
            "Found {} subject(s) in {}",
            subjects.len(),
            manifest_path.display()
        );
        dirs.push(NotesDirectory::new(directory.to_path_buf(), subjects));
    }

    Ok(if dirs.is_empty() { None } else { Some(dirs) })
}

/// Read and validate a single manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<Subject>> {
    let content = fs::read_to_string(path)?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| NotesError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_manifest(&value).map_err(|reason| NotesError::InvalidManifest {
        path: path.to_path_buf(),
        reason,
    })?;

    serde_json::from_value(value).map_err(|source| NotesError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
