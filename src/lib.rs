//! docnotes: open a subject's markdown notes in an editor next to its
//! documentation in the browser.
//!
//! Directories opt in by holding a `notes.json` manifest listing subjects and
//! their documentation roots. Each subject gets a notes file whose last token
//! remembers where in the documentation the reader left off.

pub mod app;
pub mod config;
pub mod error;
pub mod launcher;
pub mod menu;
pub mod models;
pub mod notes;
pub mod scanner;

pub use app::{App, Outcome};
pub use config::AppConfig;
pub use error::NotesError;
