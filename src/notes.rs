//! Notes file preparation.

use std::fs;
use std::io;

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{resume_path, NotesDirectory, NotesFile, Subject};

/// Make sure the notes file for `subject` exists and read its resume point.
///
/// A missing file is created from the configured template, with the notes
/// subdirectory created as needed. An existing file is left untouched.
pub fn prepare_notes(
    directory: &NotesDirectory,
    subject: &Subject,
    config: &AppConfig,
) -> Result<NotesFile> {
    let notes_dir = directory.notes_dir(&config.notes_dir);
    fs::create_dir_all(&notes_dir)?;

    let path = notes_dir.join(subject.notes_file_name());

    match fs::read_to_string(&path) {
        Ok(contents) => {
            let resume_path = resume_path(&contents);
            tracing::debug!("Resuming {} at '{}'", path.display(), resume_path);
            Ok(NotesFile {
                path,
                resume_path,
                created: false,
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::write(&path, config.render_template(&subject.name))?;
            tracing::info!("Created {}", path.display());
            Ok(NotesFile {
                path,
                resume_path: String::new(),
                created: true,
            })
        }
        Err(e) => Err(e.into()),
    }
}
