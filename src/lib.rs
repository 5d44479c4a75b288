// ABOUTME: Library module for the deck-slides program.
// ABOUTME: Segments parsed markdown content trees into nested slide decks.

pub mod assemble;
pub mod backgrounds;
pub mod config;
pub mod detect;
pub mod errors;
pub mod markdown;
pub mod metadata;
pub mod node;
pub mod parser;
pub mod presentations;
pub mod segment;
pub mod slide;
pub mod utils;
pub mod vertical;
pub mod watch;

// Reexport common types and functions
pub use assemble::assemble;
pub use backgrounds::{attach_backgrounds, slide_background, ThemeBackgrounds};
pub use config::Config;
pub use detect::{HeadingLevel, Layout};
pub use errors::{DeckError, Result};
pub use markdown::{parse_markdown, read_ast_file, read_markdown_file};
pub use metadata::Metadata;
pub use node::{ContentNode, Element, ParsedDocument, Root, RootFragment};
pub use parser::{parse_document, parse_document_with_theme, parse_slides, Presentation};
pub use presentations::{
    find_presentation, list_presentations, load_presentation, presentation_list,
    PresentationListItem, PublicationStatus,
};
pub use segment::segment;
pub use slide::{Slide, SlideShape};
pub use vertical::group_vertical;
pub use watch::{watch_presentation, WatchConfig};

#[cfg(test)]
mod tests;
