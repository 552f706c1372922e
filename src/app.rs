//! The notes-opening pipeline: scan, choose, prepare, launch.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::Result;
use crate::launcher::Launcher;
use crate::menu::choose_or_single;
use crate::models::{NotesDirectory, Subject};
use crate::notes::prepare_notes;
use crate::scanner::find_notes_dirs;

const DIRECTORY_MENU_HEADER: &str = "CHOOSE NOTES DIRECTORY:";

/// How a run ended, when it ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened {
        notes_path: PathBuf,
        url: String,
        created: bool,
    },
    /// The user quit at one of the menus.
    Cancelled,
    /// No manifest anywhere under the search root.
    NothingFound,
}

pub struct App<'a, L: Launcher> {
    config: &'a AppConfig,
    launcher: L,
}

impl<'a, L: Launcher> App<'a, L> {
    pub fn new(config: &'a AppConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    /// The launcher this app opens notes with.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run the whole pipeline against `root`, reading menu choices from
    /// `input` and writing menus to `output`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        root: &Path,
        input: &mut R,
        output: &mut W,
    ) -> Result<Outcome> {
        let Some(dirs) = find_notes_dirs(root, self.config)? else {
            return Ok(Outcome::NothingFound);
        };

        let Some(directory) = choose_or_single(
            DIRECTORY_MENU_HEADER,
            dirs.as_slice(),
            |d: &NotesDirectory| d.name.as_str(),
            input,
            output,
        )?
        else {
            return Ok(Outcome::Cancelled);
        };

        let subject_header = format!("{} | OPEN NOTES FOR:", directory.name.to_uppercase());
        let Some(subject) = choose_or_single(
            &subject_header,
            directory.subjects.as_slice(),
            |s: &Subject| s.name.as_str(),
            input,
            output,
        )?
        else {
            return Ok(Outcome::Cancelled);
        };

        let notes = prepare_notes(directory, subject, self.config)?;
        let url = subject.doc_url(&notes.resume_path);

        self.launcher.open_url(&url);
        self.launcher.open_editor(&notes.path)?;

        Ok(Outcome::Opened {
            notes_path: notes.path,
            url,
            created: notes.created,
        })
    }
}
