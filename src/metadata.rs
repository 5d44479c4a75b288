// ABOUTME: Presentation metadata read from document front matter
// ABOUTME: Provides defaults and splits `---` delimited YAML headers from the body

use crate::backgrounds::ThemeBackgrounds;
use crate::errors::{DeckError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_THEME: &str = "minimal";
pub const DEFAULT_TRANSITION: &str = "slide";

/// Metadata of a presentation. Keys it does not know are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backgrounds: Option<ThemeBackgrounds>,

    #[serde(default = "default_transition")]
    pub transition: String,

    #[serde(default = "default_center")]
    pub center: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_transition() -> String {
    DEFAULT_TRANSITION.to_string()
}

fn default_center() -> bool {
    true
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: None,
            lang: None,
            theme: None,
            backgrounds: None,
            transition: default_transition(),
            center: default_center(),
            extra: Map::new(),
        }
    }
}

impl Metadata {
    /// Build metadata from a YAML front matter header
    pub fn from_front_matter(header: &str) -> Result<Self> {
        if header.trim().is_empty() {
            debug!("Empty front matter, using default metadata");
            return Ok(Self::default());
        }
        // A header of comments only is a null document
        let metadata: Option<Self> = serde_yaml::from_str(header)
            .map_err(|e| DeckError::MetadataError(e.to_string()))?;
        Ok(metadata.unwrap_or_default())
    }

    /// Theme name, `minimal` when none was given
    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    /// Fill in the theme when the document does not name one
    pub fn or_theme(mut self, theme: &str) -> Self {
        if self.theme.is_none() {
            self.theme = Some(theme.to_string());
        }
        self
    }

    /// Title to display, falling back to the given slug
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }
}

/// Split a leading `---` delimited front matter block from the document.
///
/// Returns the header (without delimiters, if any) and the remaining body.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let rest = match content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return (None, content),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }

    // Unterminated header, treat the whole thing as content
    (None, content)
}
