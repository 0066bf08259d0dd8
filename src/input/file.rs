use super::{LoadError, LoadedPool};
use crate::tagging::parse_word_list;
use std::path::Path;
use tracing::info;

/// Load a word list file, one label per line.
pub fn load(path: &str) -> Result<LoadedPool, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let pool = LoadedPool::non_empty(parse_word_list(&content), format!("file:{}", path.display()))?;
    info!(source = %pool.source, words = pool.tokens.len(), "word list loaded");
    Ok(pool)
}
