//! Runtime configuration.
//!
//! Loaded once at startup from `<config dir>/docnotes/config.json` and passed
//! by reference afterwards. Every field is optional in the file.
//! `DOCNOTES_EDITOR` overrides the editor command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::Deserialize;

const APP_NAME: &str = "docnotes";
const CONFIG_FILE: &str = "config.json";
const EDITOR_ENV: &str = "DOCNOTES_EDITOR";

/// Placeholder in [`AppConfig::template`] replaced by the uppercased subject name.
pub const SUBJECT_PLACEHOLDER: &str = "{subject}";

pub const DEFAULT_TEMPLATE: &str = "# {subject} NOTES\n\n## left off at\n---\n/";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Editor command and its leading arguments. The notes file path is
    /// appended as the last argument.
    pub editor: Vec<String>,
    /// Name of the manifest file searched for.
    pub manifest_file: String,
    /// Subdirectory, next to the manifest, that holds notes files.
    pub notes_dir: String,
    /// Contents of a new notes file. Should end with a `/`-prefixed token.
    pub template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            editor: vec!["code".to_string()],
            manifest_file: "notes.json".to_string(),
            notes_dir: "notes".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the user's config directory, then apply
    /// environment overrides. Falls back to defaults if the file is
    /// unreadable or invalid.
    pub fn load() -> Self {
        let config = match get_config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_editor_override(std::env::var(EDITOR_ENV).ok().as_deref())
    }

    /// Like [`AppConfig::load_from`], but logs and returns the defaults on error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the editor command with a whitespace-separated override.
    /// Blank overrides are ignored.
    pub fn with_editor_override(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            let editor: Vec<String> = value.split_whitespace().map(String::from).collect();
            if !editor.is_empty() {
                self.editor = editor;
            }
        }
        self
    }

    /// Render the notes template for a subject.
    pub fn render_template(&self, subject_name: &str) -> String {
        self.template
            .replace(SUBJECT_PLACEHOLDER, &subject_name.to_uppercase())
    }

    fn validate(&self) -> Result<()> {
        if self.editor.is_empty() || self.editor[0].trim().is_empty() {
            anyhow::bail!("`editor` must name a command");
        }
        if self.manifest_file.trim().is_empty() {
            anyhow::bail!("`manifest_file` must not be empty");
        }
        if self.notes_dir.trim().is_empty() {
            anyhow::bail!("`notes_dir` must not be empty");
        }
        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
