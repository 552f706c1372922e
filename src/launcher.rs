//! Detached launching of the browser and the editor.
//!
//! Both operations return as soon as the external program has been started.
//! Neither waits for it to exit nor looks at its exit status.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{NotesError, Result};

pub trait Launcher {
    /// Open `url` in a new tab of the default browser.
    ///
    /// Failures are logged and swallowed.
    fn open_url(&self, url: &str);

    /// Start the editor on `path`. Fails only if the process cannot be spawned.
    fn open_editor(&self, path: &Path) -> Result<()>;
}

/// Launches through the OS: the registered browser and the configured editor.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    editor: Vec<String>,
}

impl SystemLauncher {
    pub fn new(editor: Vec<String>) -> Self {
        Self { editor }
    }

    /// Build the editor command line, with `path` as the final argument.
    pub fn editor_command(&self, path: &Path) -> Option<Command> {
        let (program, args) = self.editor.split_first()?;
        let mut cmd = Command::new(program);
        cmd.args(args).arg(path).stdin(Stdio::null());
        Some(cmd)
    }
}

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) {
        tracing::info!("Opening {}", url);
        if let Err(e) = open::that_detached(url) {
            tracing::warn!("Failed to open URL {}: {}", url, e);
        }
    }

    fn open_editor(&self, path: &Path) -> Result<()> {
        let command = self.editor.join(" ");
        let mut cmd = self.editor_command(path).ok_or_else(|| NotesError::Launch {
            command: command.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty editor command"),
        })?;

        tracing::info!("Opening {} with `{}`", path.display(), command);
        // The child is dropped without waiting; it outlives this process.
        cmd.spawn()
            .map(drop)
            .map_err(|source| NotesError::Launch { command, source })
    }
}
