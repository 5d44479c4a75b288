// ABOUTME: Slide assembler turning a flat node group into one slide
// ABOUTME: Separates heading, subtitle and body unless a layout directive is present

use crate::detect::{self, HeadingLevel};
use crate::node::{ContentNode, RootFragment};
use crate::slide::Slide;
use log::debug;

/// Build a single slide from a flat group of nodes.
///
/// A supplied `level_hint` takes priority over the first heading found in
/// the group.
pub fn assemble(group: &[ContentNode], level_hint: Option<HeadingLevel>) -> Slide<'_> {
    let heading_level = level_hint.or_else(|| detect::heading_level(group));

    if let Some(layout) = detect::slide_layout(group) {
        debug!("Layout directive '{}' keeps the group intact", layout);
        return Slide {
            layout: Some(layout),
            ..Slide::plain(RootFragment::from_slice(group), heading_level)
        };
    }

    let Some(heading_index) = detect::first_heading_index(group) else {
        return Slide::plain(RootFragment::from_slice(group), heading_level);
    };

    let mut body_start = heading_index + 1;
    let subtitle = match group.get(body_start) {
        Some(next) if detect::is_italic_paragraph(next) => {
            body_start += 1;
            Some(RootFragment::new(vec![next]))
        }
        _ => None,
    };

    let body = group[..heading_index]
        .iter()
        .chain(&group[body_start..])
        .collect();

    Slide {
        header: Some(RootFragment::new(vec![&group[heading_index]])),
        subtitle,
        ..Slide::plain(RootFragment::new(body), heading_level)
    }
}
