// ABOUTME: Shared detection helpers for slide segmentation
// ABOUTME: Heading levels, layout directives and subtitle paragraphs

use crate::node::{ContentNode, Element};
use log::warn;
use serde::Serialize;
use std::fmt;

/// Level of a heading element, serialized as its tag name (`h1`..`h6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Parse a tag name matching `^h[1-6]$`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    pub fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Canonical layouts a directive can force onto a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Split,
}

/// Directive tags recognized as layout overrides, with their canonical layout.
pub const LAYOUT_DIRECTIVES: &[(&str, Layout)] = &[
    ("SplitSlide", Layout::Split),
    ("split-slide", Layout::Split),
];

impl Layout {
    pub fn from_tag(tag: &str) -> Option<Self> {
        LAYOUT_DIRECTIVES
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, layout)| *layout)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Split => "split",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The heading level of a node, if it is a heading element
pub fn node_heading_level(node: &ContentNode) -> Option<HeadingLevel> {
    node.as_element().and_then(|e| HeadingLevel::from_tag(e.tag()))
}

/// Index of the first heading element among `nodes`
pub fn first_heading_index(nodes: &[ContentNode]) -> Option<usize> {
    nodes.iter().position(|node| node_heading_level(node).is_some())
}

/// Level of the first heading element among `nodes`
pub fn heading_level(nodes: &[ContentNode]) -> Option<HeadingLevel> {
    nodes.iter().find_map(node_heading_level)
}

/// Depth-first, pre-order search for the first element matching `predicate`.
pub fn find_element<'a, P>(nodes: &'a [ContentNode], predicate: &P) -> Option<&'a Element>
where
    P: Fn(&Element) -> bool,
{
    for node in nodes {
        if let ContentNode::Element(element) = node {
            if predicate(element) {
                return Some(element);
            }
            if let Some(found) = find_element(&element.children, predicate) {
                return Some(found);
            }
        }
    }
    None
}

/// Visit every element in document order.
pub fn for_each_element<'a, F>(nodes: &'a [ContentNode], visit: &mut F)
where
    F: FnMut(&'a Element),
{
    for node in nodes {
        if let ContentNode::Element(element) = node {
            visit(element);
            for_each_element(&element.children, visit);
        }
    }
}

/// Layout forced by the first directive found anywhere in `nodes`.
///
/// When several directives are present the first one in document order wins
/// and the others are reported.
pub fn slide_layout(nodes: &[ContentNode]) -> Option<Layout> {
    let first = find_element(nodes, &|e: &Element| Layout::from_tag(e.tag()).is_some())?;

    let mut count = 0usize;
    for_each_element(nodes, &mut |e: &Element| {
        if Layout::from_tag(e.tag()).is_some() {
            count += 1;
        }
    });
    if count > 1 {
        warn!(
            "Slide contains {} layout directives, using the first one ({})",
            count,
            first.tag()
        );
    }

    Layout::from_tag(first.tag())
}

/// A paragraph whose only child is an emphasis element.
pub fn is_italic_paragraph(node: &ContentNode) -> bool {
    match node.as_element() {
        Some(p) if p.is("p") => matches!(p.children(), [only] if only.is_element("em")),
        _ => false,
    }
}
