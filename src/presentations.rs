// ABOUTME: Presentation discovery across publication status folders
// ABOUTME: Lists presentations, finds them by slug and loads their decks

use crate::errors::{DeckError, Result};
use crate::markdown;
use crate::node::ParsedDocument;
use glob::glob;
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Publication status, given by the folder a presentation lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Public,
    Draft,
    Private,
    SemiPrivate,
}

impl PublicationStatus {
    pub const ALL: [PublicationStatus; 4] = [
        PublicationStatus::Public,
        PublicationStatus::Draft,
        PublicationStatus::Private,
        PublicationStatus::SemiPrivate,
    ];

    pub fn folder(&self) -> &'static str {
        match self {
            PublicationStatus::Public => "public",
            PublicationStatus::Draft => "draft",
            PublicationStatus::Private => "private",
            PublicationStatus::SemiPrivate => "semi-private",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

/// A presentation file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationFile {
    pub slug: String,
    pub status: PublicationStatus,
    pub path: PathBuf,
}

/// Summary of a presentation as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationListItem {
    pub slug: String,
    pub title: String,
    pub theme: String,
    pub status: PublicationStatus,
    pub filename: String,
}

/// Presentation files in one status folder, sorted by slug.
pub fn list_by_status(base: &Path, status: PublicationStatus) -> Result<Vec<PresentationFile>> {
    let dir = base.join(status.folder());
    if !dir.is_dir() {
        debug!("Status folder {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        let Some(slug) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        files.push(PresentationFile { slug, status, path });
    }

    files.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(files)
}

/// Every presentation across all status folders.
pub fn list_presentations(base: &Path) -> Result<Vec<PresentationFile>> {
    let mut all = Vec::new();
    for status in PublicationStatus::ALL {
        all.extend(list_by_status(base, status)?);
    }
    info!("Found {} presentations in {:?}", all.len(), base);
    Ok(all)
}

/// Find a presentation by slug.
///
/// Fails when the same slug exists in more than one status folder.
pub fn find_presentation(base: &Path, slug: &str) -> Result<Option<PresentationFile>> {
    if slug.is_empty() || slug.contains('/') || slug.contains('\\') || slug.starts_with('.') {
        return Err(DeckError::ValidationError(format!("Invalid slug: {:?}", slug)));
    }

    let mut matches: Vec<PresentationFile> = PublicationStatus::ALL
        .iter()
        .map(|&status| PresentationFile {
            slug: slug.to_string(),
            status,
            path: base.join(status.folder()).join(format!("{}.md", slug)),
        })
        .filter(|file| file.path.is_file())
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => {
            let statuses = matches
                .iter()
                .map(|m| m.status.folder())
                .collect::<Vec<_>>()
                .join(", ");
            Err(DeckError::DuplicateSlug {
                slug: slug.to_string(),
                statuses,
            })
        }
    }
}

/// Find a presentation by slug and parse it.
pub fn load_presentation(base: &Path, slug: &str) -> Result<(PresentationFile, ParsedDocument)> {
    let file = find_presentation(base, slug)?
        .ok_or_else(|| DeckError::PresentationNotFound(slug.to_string()))?;
    let document = markdown::read_markdown_file(&file.path)?;
    Ok((file, document))
}

/// Listing entries with title and theme read from front matter.
///
/// Files that fail to parse are skipped with a warning.
pub fn presentation_list(base: &Path) -> Result<Vec<PresentationListItem>> {
    let mut items = Vec::new();
    for file in list_presentations(base)? {
        let document = match markdown::read_markdown_file(&file.path) {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping {:?}: {}", file.path, e);
                continue;
            }
        };

        items.push(PresentationListItem {
            title: document.data.title_or(&file.slug).to_string(),
            theme: document.data.theme().to_string(),
            status: file.status,
            filename: format!("{}.md", file.slug),
            slug: file.slug,
        });
    }
    Ok(items)
}
