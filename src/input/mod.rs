use std::path::PathBuf;
use thiserror::Error;

use crate::tagging::Token;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("No words found in {0}")]
    EmptyPool(String),
}

/// A word pool ready to hand to the controller
#[derive(Debug)]
pub struct LoadedPool {
    pub tokens: Vec<Token>,
    pub source: String,
}

impl LoadedPool {
    fn non_empty(tokens: Vec<Token>, source: String) -> Result<Self, LoadError> {
        if tokens.is_empty() {
            return Err(LoadError::EmptyPool(source));
        }
        Ok(Self { tokens, source })
    }
}

/// Pool from inline text such as `--words "the cat sat"`.
pub fn from_text(text: &str) -> Result<LoadedPool, LoadError> {
    LoadedPool::non_empty(crate::tagging::split_words(text), "inline".to_string())
}

pub mod clipboard;
pub mod file;
