// ABOUTME: Entry points running segmentation, vertical grouping and assembly
// ABOUTME: Turns a parsed document into an ordered list of slides

use crate::backgrounds::attach_backgrounds;
use crate::metadata::{Metadata, DEFAULT_THEME};
use crate::node::{ParsedDocument, Root};
use crate::segment::segment;
use crate::slide::Slide;
use crate::vertical::group_vertical;
use log::{debug, info};
use serde::Serialize;

/// Slides plus the metadata they were styled with.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation<'a> {
    pub slides: Vec<Slide<'a>>,
    pub metadata: Metadata,
}

/// Split a document body into slides.
///
/// A missing or empty body yields no slides.
pub fn parse_slides(root: Option<&Root>) -> Vec<Slide<'_>> {
    let Some(root) = root.filter(|r| !r.children.is_empty()) else {
        debug!("Document has no body children, producing an empty deck");
        return Vec::new();
    };

    segment(&root.children)
        .into_iter()
        .map(|group| group_vertical(group, None))
        .collect()
}

/// Parse a whole document: slides with backgrounds resolved from its metadata.
pub fn parse_document(document: &ParsedDocument) -> Presentation<'_> {
    parse_document_with_theme(document, DEFAULT_THEME)
}

/// Like [`parse_document`], using `default_theme` when the document names none.
pub fn parse_document_with_theme<'a>(
    document: &'a ParsedDocument,
    default_theme: &str,
) -> Presentation<'a> {
    let metadata = document.data.clone().or_theme(default_theme);
    let slides = attach_backgrounds(parse_slides(document.body.as_ref()), &metadata);

    info!(
        "Parsed {} slides (theme: {})",
        slides.len(),
        metadata.theme()
    );
    Presentation { slides, metadata }
}
