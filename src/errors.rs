// ABOUTME: Error types for the deck-slides application
// ABOUTME: Covers loading, discovery and watching; segmentation itself never fails

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid content tree: {0}")]
    AstError(#[from] serde_json::Error),

    #[error("Invalid front matter: {0}")]
    MetadataError(String),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Presentation \"{0}\" not found")]
    PresentationNotFound(String),

    #[error("Duplicate slug \"{slug}\" found in multiple folders: {statuses}")]
    DuplicateSlug { slug: String, statuses: String },

    #[error("Watch error: {0}")]
    WatchError(String),
}

impl From<glob::GlobError> for DeckError {
    fn from(err: glob::GlobError) -> Self {
        DeckError::ValidationError(format!("Failed to read glob entry: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
