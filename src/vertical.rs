// ABOUTME: Vertical grouper splitting a slide group on h3 headings
// ABOUTME: Produces either a single slide or a slide with vertical sub-slides

use crate::assemble::assemble;
use crate::detect::{self, HeadingLevel};
use crate::node::{ContentNode, RootFragment};
use crate::slide::Slide;
use log::debug;

/// Split a group into vertical candidates, each `h3` opening a new one.
pub fn vertical_candidates(group: &[ContentNode]) -> Vec<&[ContentNode]> {
    let mut candidates = Vec::new();
    let mut start = 0;

    for (i, node) in group.iter().enumerate() {
        if node.is_element("h3") && i > start {
            candidates.push(&group[start..i]);
            start = i;
        }
    }
    if start < group.len() {
        candidates.push(&group[start..]);
    }

    candidates
}

/// Turn one segmented group into a slide, stacking vertical sub-slides when
/// the group holds more than one `h3` section.
///
/// The parent slide keeps the whole unsplit group as its body, so renderers
/// unaware of vertical slides still see every node.
pub fn group_vertical(group: &[ContentNode], section_level: Option<HeadingLevel>) -> Slide<'_> {
    let candidates = vertical_candidates(group);

    if candidates.len() <= 1 {
        return assemble(group, section_level);
    }

    debug!("Group splits into {} vertical slides", candidates.len());
    let vertical_slides = candidates
        .into_iter()
        .map(|candidate| assemble(candidate, None))
        .collect();

    Slide {
        vertical_slides: Some(vertical_slides),
        ..Slide::plain(
            RootFragment::from_slice(group),
            section_level.or_else(|| detect::heading_level(group)),
        )
    }
}
