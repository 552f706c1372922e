use std::path::PathBuf;

/// A subject's notes file after it has been prepared for opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesFile {
    pub path: PathBuf,
    /// Documentation sub-path read back from the file's last token.
    /// Empty for a freshly created file.
    pub resume_path: String,
    /// Whether the file was written from the template on this run.
    pub created: bool,
}

/// Extract the resume sub-path from notes file contents.
///
/// The convention is that the last whitespace-delimited token of the file is
/// the last visited documentation path, written with a leading `/`. Leading
/// slashes are stripped; a token without one is returned as-is.
pub fn resume_path(contents: &str) -> String {
    contents
        .split_whitespace()
        .last()
        .map(|token| token.trim_start_matches('/').to_string())
        .unwrap_or_default()
}
