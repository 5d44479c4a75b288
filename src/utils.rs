// ABOUTME: Utility functions for the deck-slides application
// ABOUTME: Path validation and JSON output helpers

use crate::errors::{DeckError, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        DeckError::ValidationError(format!("Failed to get absolute path for {:?}: {}", path, e))
    })
}

/// Serialize a value as JSON, pretty-printed when asked
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Write a value as JSON to a file, creating parent directories
pub fn write_json_to_file<T: Serialize>(value: &T, output_path: &Path, pretty: bool) -> Result<()> {
    info!("Writing JSON to file: {:?}", output_path);
    ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, to_json(value, pretty)?)?;
    Ok(())
}
