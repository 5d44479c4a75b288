// ABOUTME: Slide deck output model produced by the segmenter
// ABOUTME: Slides borrow their content from the parsed document tree

use crate::detect::{HeadingLevel, Layout};
use crate::node::RootFragment;
use serde::Serialize;

/// One horizontal slide, possibly holding a stack of vertical sub-slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<RootFragment<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<RootFragment<'a>>,

    pub body: RootFragment<'a>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_slides: Option<Vec<Slide<'a>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<HeadingLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// The structural shape of a slide, for consumers that prefer to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideShape {
    /// Heading (and maybe subtitle) split from the body
    Title,
    /// Kept intact because of a layout directive
    Layout(Layout),
    /// Stack of vertical sub-slides
    Vertical,
    /// Body only
    Plain,
}

impl<'a> Slide<'a> {
    /// A slide made of nothing but a body
    pub fn plain(body: RootFragment<'a>, heading_level: Option<HeadingLevel>) -> Self {
        Self {
            body,
            heading_level,
            ..Default::default()
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.vertical_slides.is_some()
    }

    pub fn has_layout(&self) -> bool {
        self.layout.is_some()
    }

    pub fn shape(&self) -> SlideShape {
        if let Some(layout) = self.layout {
            SlideShape::Layout(layout)
        } else if self.vertical_slides.is_some() {
            SlideShape::Vertical
        } else if self.header.is_some() {
            SlideShape::Title
        } else {
            SlideShape::Plain
        }
    }

    /// Vertical sub-slides, empty when the slide is not a vertical stack
    pub fn verticals(&self) -> &[Slide<'a>] {
        self.vertical_slides.as_deref().unwrap_or(&[])
    }
}
