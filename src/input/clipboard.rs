use super::{LoadError, LoadedText};

/// Pull narrative text from the system clipboard.
pub fn load_clipboard() -> Result<LoadedText, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyText("clipboard".to_string()));
    }

    Ok(LoadedText {
        text,
        source: "clipboard".to_string(),
    })
}
