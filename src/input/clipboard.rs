use super::{LoadError, LoadedPool};
use crate::tagging::split_words;

/// Load a pool from the system clipboard, one token per word.
pub fn load() -> Result<LoadedPool, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    LoadedPool::non_empty(split_words(&text), "clipboard".to_string())
}
