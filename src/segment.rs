// ABOUTME: Deck segmenter splitting top-level nodes into slide groups
// ABOUTME: Handles the title section, h2 boundaries and horizontal rules

use crate::node::ContentNode;
use log::debug;

/// Split the top-level nodes of a document into contiguous slide groups.
///
/// The first `h1` opens a title section that only the next `h2` closes.
/// Outside of it every `h2` and `hr` starts a new group. Concatenating the
/// returned slices reproduces `nodes` exactly.
pub fn segment(nodes: &[ContentNode]) -> Vec<&[ContentNode]> {
    let mut groups = Vec::new();
    let mut start = 0;
    let mut found_first_h1 = false;
    let mut in_title_section = false;

    for (i, node) in nodes.iter().enumerate() {
        let is_h1 = node.is_element("h1");
        let is_h2 = node.is_element("h2");
        let is_hr = node.is_element("hr");

        if is_h1 && !found_first_h1 {
            found_first_h1 = true;
            in_title_section = true;
            flush(nodes, &mut start, i, &mut groups);
            continue;
        }

        if is_h2 && in_title_section {
            in_title_section = false;
            flush(nodes, &mut start, i, &mut groups);
        }

        if !in_title_section && (is_h2 || is_hr) {
            flush(nodes, &mut start, i, &mut groups);
        }
    }

    flush(nodes, &mut start, nodes.len(), &mut groups);

    debug!(
        "Segmented {} top-level nodes into {} groups",
        nodes.len(),
        groups.len()
    );
    groups
}

/// Close the group running from `start` up to (not including) `end`.
fn flush<'a>(
    nodes: &'a [ContentNode],
    start: &mut usize,
    end: usize,
    groups: &mut Vec<&'a [ContentNode]>,
) {
    if end > *start {
        groups.push(&nodes[*start..end]);
        *start = end;
    }
}
