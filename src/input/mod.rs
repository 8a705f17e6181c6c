use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("No text in: {0}")]
    EmptyText(String),
}

/// Narrative text plus where it came from, for the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;

pub use clipboard::load_clipboard;
pub use file::load_file;
