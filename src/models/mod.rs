//! Domain models for docnotes.
//!
//! # Core Concepts
//!
//! - [`Subject`]: A named topic with a documentation root URL, read from a
//!   directory's manifest.
//! - [`NotesDirectory`]: A directory holding a manifest, together with the
//!   subjects it lists.
//! - [`NotesFile`]: The markdown notes file for one subject, and the
//!   documentation sub-path it remembers.

mod directory;
mod notes_file;
mod subject;

pub use directory::*;
pub use notes_file::*;
pub use subject::*;
