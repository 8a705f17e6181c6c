use super::{LoadError, LoadedText};
use std::path::Path;

/// Read narrative text from a file. Whitespace-only content is rejected so
/// the reveal never starts on an empty sequence.
pub fn load_file(path: &str) -> Result<LoadedText, LoadError> {
    let path_ref = Path::new(path);
    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let text = std::fs::read_to_string(path_ref)?;
    if text.trim().is_empty() {
        return Err(LoadError::EmptyText(path.to_string()));
    }

    Ok(LoadedText {
        text,
        source: path.to_string(),
    })
}
