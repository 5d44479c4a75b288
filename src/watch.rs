// ABOUTME: Watch module for monitoring a presentation source and regenerating its deck
// ABOUTME: Re-parses the source on change and rewrites the JSON slide output

use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;

use crate::errors::{DeckError, Result};
use crate::markdown;
use crate::metadata::DEFAULT_THEME;
use crate::parser;
use crate::utils;

/// Configuration for watch mode
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Source file to watch (markdown, or a JSON content tree)
    pub input: PathBuf,

    /// Output JSON deck path
    pub output: PathBuf,

    /// Whether the input is a JSON content tree rather than markdown
    pub ast_input: bool,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,

    pub pretty_json: bool,

    pub default_theme: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            ast_input: false,
            debounce_ms: 500,
            pretty_json: true,
            default_theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Watch the source file and rewrite the deck whenever it changes.
///
/// Blocks until the watcher channel closes.
pub fn watch_presentation(config: &WatchConfig) -> Result<()> {
    utils::validate_file_exists(&config.input)?;
    utils::ensure_parent_directory_exists(&config.output)?;

    // Initial generation
    regenerate(config)?;

    let (tx, rx) = mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| DeckError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    let watch_path = match config.input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let abs_watch_path = utils::get_absolute_path(watch_path)?;
    debug!("Watching absolute path: {:?}", abs_watch_path);

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            DeckError::WatchError(format!(
                "Failed to start watching {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    info!("Watching for changes in {:?}", config.input);
    println!(
        "Watching for changes in {:?} (Press Ctrl+C to stop)",
        config.input
    );

    let input_abs = utils::get_absolute_path(&config.input)?;

    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events
                    .iter()
                    .flat_map(|event| event.paths.iter())
                    .any(|path| is_relevant_path(path, &input_abs));

                if !relevant {
                    continue;
                }
                match regenerate(config) {
                    Ok(count) => info!("Regenerated deck with {} slides", count),
                    Err(e) => error!("Failed to regenerate deck: {}", e),
                }
            }
            Err(errors) => {
                for e in errors {
                    error!("Watch error: {:?}", e);
                }
            }
        }
    }

    Ok(())
}

/// True when `path` is the watched source file
pub fn is_relevant_path(path: &Path, input_abs: &Path) -> bool {
    match utils::get_absolute_path(path) {
        Ok(abs) => abs == input_abs,
        // Editors often replace files, so a vanished path may still be ours
        Err(_) => path.file_name().is_some() && path.file_name() == input_abs.file_name(),
    }
}

/// Parse the source and write the deck, returning the number of slides
pub fn regenerate(config: &WatchConfig) -> Result<usize> {
    info!("Regenerating deck from {:?}", config.input);

    let document = if config.ast_input {
        markdown::read_ast_file(&config.input)?
    } else {
        markdown::read_markdown_file(&config.input)?
    };

    let presentation = parser::parse_document_with_theme(&document, &config.default_theme);
    utils::write_json_to_file(&presentation, &config.output, config.pretty_json)?;

    Ok(presentation.slides.len())
}
