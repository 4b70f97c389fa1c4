use thiserror::Error;

use crate::types::{Category, CodeKind};

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("{kind} minification failed: {message}")]
    Minify { kind: CodeKind, message: String },
    #[error("Placeholder {category}#{index} has no stored block ({len} stored)")]
    PlaceholderOutOfRange { category: Category, index: usize, len: usize },
    #[error("{count} placeholder(s) still unresolved after restoration")]
    UnresolvedPlaceholders { count: usize },
    #[error("Unknown markup type: {0}")]
    UnknownDialect(String),
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CompressError {
    /// Wrap an error reported by an external code minifier.
    pub fn minify(kind: CodeKind, err: impl std::fmt::Display) -> Self {
        Self::Minify { kind, message: err.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, CompressError>;
