use super::*;
use crate::detect::{is_italic_paragraph, slide_layout};
use crate::metadata::split_front_matter;
use crate::vertical::vertical_candidates;

fn el(tag: &str, children: Vec<ContentNode>) -> ContentNode {
    ContentNode::element(tag, children)
}

fn text(value: &str) -> ContentNode {
    ContentNode::text(value)
}

fn heading(tag: &str, title: &str) -> ContentNode {
    el(tag, vec![text(title)])
}

fn para(value: &str) -> ContentNode {
    el("p", vec![text(value)])
}

fn italic(value: &str) -> ContentNode {
    el("p", vec![el("em", vec![text(value)])])
}

fn hr() -> ContentNode {
    el("hr", vec![])
}

fn tags(nodes: &[ContentNode]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| match n.as_element() {
            Some(e) => e.tag().to_string(),
            None => "#text".to_string(),
        })
        .collect()
}

fn fragment_tags(fragment: &RootFragment) -> Vec<String> {
    fragment
        .children
        .iter()
        .map(|n| n.as_element().map(|e| e.tag().to_string()).unwrap_or_default())
        .collect()
}

#[test]
fn test_segment_concatenation_reproduces_input() {
    let nodes = vec![
        para("intro"),
        heading("h1", "Title"),
        italic("sub"),
        heading("h2", "One"),
        para("a"),
        hr(),
        para("b"),
        heading("h3", "Deep"),
        heading("h2", "Two"),
    ];

    let groups = segment(&nodes);
    let rebuilt: Vec<ContentNode> = groups.iter().flat_map(|g| g.iter().cloned()).collect();
    assert_eq!(rebuilt, nodes);
    assert!(groups.iter().all(|g| !g.is_empty()));
}

#[test]
fn test_segment_title_latch() {
    let nodes = vec![
        heading("h1", "Title"),
        heading("h2", "Section"),
        para("a"),
        heading("h1", "Again"),
        para("b"),
    ];

    let groups = segment(&nodes);
    assert_eq!(groups.len(), 2);
    assert_eq!(tags(groups[0]), vec!["h1"]);
    assert_eq!(tags(groups[1]), vec!["h2", "p", "h1", "p"]);
}

#[test]
fn test_segment_boundaries_without_h1() {
    let nodes = vec![heading("h2", "A"), para("a"), hr(), para("b")];

    let groups = segment(&nodes);
    assert_eq!(groups.len(), 2);
    assert_eq!(tags(groups[0]), vec!["h2", "p"]);
    assert_eq!(tags(groups[1]), vec!["hr", "p"]);
}

#[test]
fn test_segment_hr_inside_title_section_is_not_a_boundary() {
    let nodes = vec![heading("h1", "Title"), para("a"), hr(), para("b"), heading("h2", "S")];

    let groups = segment(&nodes);
    assert_eq!(groups.len(), 2);
    assert_eq!(tags(groups[0]), vec!["h1", "p", "hr", "p"]);
    assert_eq!(tags(groups[1]), vec!["h2"]);
}

#[test]
fn test_segment_content_before_first_h1() {
    let nodes = vec![hr(), para("pre"), heading("h1", "Title"), para("t")];

    let groups = segment(&nodes);
    assert_eq!(groups.len(), 2);
    assert_eq!(tags(groups[0]), vec!["hr", "p"]);
    assert_eq!(tags(groups[1]), vec!["h1", "p"]);
}

#[test]
fn test_segment_plain_text_is_one_group() {
    let nodes = vec![para("a"), para("b"), text("loose")];
    let groups = segment(&nodes);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
}

#[test]
fn test_segment_empty_input() {
    assert!(segment(&[]).is_empty());
}

#[test]
fn test_assemble_subtitle_promotion() {
    let group = vec![heading("h2", "Section"), italic("tagline")];
    let slide = assemble(&group, None);

    assert_eq!(slide.header.as_ref().map(fragment_tags), Some(vec!["h2".to_string()]));
    let subtitle = slide.subtitle.as_ref().expect("subtitle should be set");
    assert!(std::ptr::eq(subtitle.children[0], &group[1]));
    assert!(slide.body.is_empty());
    assert_eq!(slide.heading_level, Some(HeadingLevel::H2));
    assert_eq!(slide.shape(), SlideShape::Title);
}

#[test]
fn test_assemble_subtitle_rejection() {
    let group = vec![heading("h2", "Section"), para("plain")];
    let slide = assemble(&group, None);

    assert!(slide.header.is_some());
    assert!(slide.subtitle.is_none());
    assert_eq!(fragment_tags(&slide.body), vec!["p"]);
}

#[test]
fn test_italic_paragraph_requires_sole_em_child() {
    assert!(is_italic_paragraph(&italic("x")));
    assert!(!is_italic_paragraph(&el(
        "p",
        vec![el("em", vec![text("x")]), text(" more")]
    )));
    assert!(!is_italic_paragraph(&el("p", vec![el("strong", vec![text("x")])])));
    assert!(!is_italic_paragraph(&el("div", vec![el("em", vec![text("x")])])));
    assert!(!is_italic_paragraph(&el("p", vec![])));
}

#[test]
fn test_assemble_keeps_content_before_heading() {
    let group = vec![para("before"), heading("h2", "Title"), para("after")];
    let slide = assemble(&group, None);

    let body: Vec<String> = slide.body.children.iter().map(|n| n.text_content()).collect();
    assert_eq!(body, vec!["before", "after"]);
}

#[test]
fn test_assemble_without_heading() {
    let group = vec![para("a"), para("b")];
    let slide = assemble(&group, None);

    assert!(slide.header.is_none());
    assert!(slide.subtitle.is_none());
    assert_eq!(slide.body.len(), 2);
    assert_eq!(slide.heading_level, None);
    assert_eq!(slide.shape(), SlideShape::Plain);
}

#[test]
fn test_assemble_level_hint_takes_priority() {
    let group = vec![heading("h3", "Sub"), para("a")];
    let slide = assemble(&group, Some(HeadingLevel::H2));
    assert_eq!(slide.heading_level, Some(HeadingLevel::H2));
}

#[test]
fn test_layout_override_keeps_group_intact() {
    let group = vec![
        heading("h2", "Split"),
        italic("would be a subtitle"),
        el(
            "div",
            vec![el("split-slide", vec![para("left"), para("right")])],
        ),
    ];
    let slide = assemble(&group, None);

    assert_eq!(slide.layout, Some(Layout::Split));
    assert!(slide.header.is_none());
    assert!(slide.subtitle.is_none());
    assert_eq!(slide.body.len(), group.len());
    for (kept, original) in slide.body.children.iter().zip(&group) {
        assert!(std::ptr::eq(*kept, original));
    }
    assert_eq!(slide.heading_level, Some(HeadingLevel::H2));
    assert_eq!(slide.shape(), SlideShape::Layout(Layout::Split));
}

#[test]
fn test_layout_detection_first_match_in_document_order() {
    let nodes = vec![
        para("text"),
        el("section", vec![el("SplitSlide", vec![])]),
        el("split-slide", vec![]),
    ];
    assert_eq!(slide_layout(&nodes), Some(Layout::Split));
    assert_eq!(slide_layout(&[para("none"), el("Alert", vec![])]), None);
}

#[test]
fn test_vertical_candidates_split_on_h3() {
    let group = vec![
        heading("h2", "Section"),
        para("a"),
        heading("h3", "One"),
        para("b"),
        heading("h3", "Two"),
        para("c"),
    ];
    let candidates = vertical_candidates(&group);
    assert_eq!(candidates.len(), 3);
    assert_eq!(tags(candidates[1]), vec!["h3", "p"]);
}

#[test]
fn test_vertical_grouping_with_two_h3() {
    let group = vec![
        heading("h2", "Section"),
        para("a"),
        heading("h3", "One"),
        para("b"),
        heading("h3", "Two"),
        para("c"),
    ];
    let slide = group_vertical(&group, None);

    assert!(slide.is_vertical());
    assert_eq!(slide.verticals().len(), 3);
    assert_eq!(slide.body.len(), group.len());
    assert!(slide.header.is_none());
    assert_eq!(slide.heading_level, Some(HeadingLevel::H2));
    assert_eq!(slide.verticals()[1].heading_level, Some(HeadingLevel::H3));
    assert_eq!(slide.shape(), SlideShape::Vertical);
}

#[test]
fn test_vertical_grouping_single_candidate_is_direct_assembly() {
    let group = vec![heading("h3", "Only"), para("a")];
    let slide = group_vertical(&group, None);

    assert!(slide.vertical_slides.is_none());
    assert_eq!(slide, assemble(&group, None));
}

#[test]
fn test_vertical_grouping_inherits_section_level() {
    let group = vec![
        heading("h3", "One"),
        para("a"),
        heading("h3", "Two"),
        para("b"),
    ];
    let slide = group_vertical(&group, Some(HeadingLevel::H2));

    assert_eq!(slide.heading_level, Some(HeadingLevel::H2));
    assert!(slide
        .verticals()
        .iter()
        .all(|v| v.heading_level == Some(HeadingLevel::H3)));
}

#[test]
fn test_vertical_grouping_empty_group() {
    let slide = group_vertical(&[], Some(HeadingLevel::H2));
    assert!(slide.body.is_empty());
    assert!(slide.vertical_slides.is_none());
    assert_eq!(slide.heading_level, Some(HeadingLevel::H2));
}

#[test]
fn test_parse_slides_empty_body() {
    assert!(parse_slides(None).is_empty());
    assert!(parse_slides(Some(&Root::default())).is_empty());
}

#[test]
fn test_parse_slides_full_deck() {
    let root = Root::new(vec![
        heading("h1", "Deck"),
        italic("A subtitle"),
        heading("h2", "First"),
        para("content"),
        hr(),
        para("after rule"),
        heading("h2", "Second"),
        heading("h3", "A"),
        para("a"),
        heading("h3", "B"),
        para("b"),
    ]);
    let slides = parse_slides(Some(&root));

    assert_eq!(slides.len(), 4);
    assert_eq!(slides[0].heading_level, Some(HeadingLevel::H1));
    assert!(slides[0].subtitle.is_some());
    assert_eq!(fragment_tags(&slides[1].body), vec!["p"]);
    assert!(slides[2].header.is_none());
    assert_eq!(fragment_tags(&slides[2].body), vec!["hr", "p"]);
    assert_eq!(slides[3].verticals().len(), 3);
}

#[test]
fn test_slide_json_shape() {
    let group = vec![heading("h2", "Hello"), italic("world")];
    let slide = assemble(&group, None);
    let json = serde_json::to_value(&slide).unwrap();

    assert_eq!(json["header"]["type"], "root");
    assert_eq!(json["header"]["children"][0]["tag"], "h2");
    assert_eq!(json["subtitle"]["children"][0]["tag"], "p");
    assert_eq!(json["body"]["children"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["headingLevel"], "h2");
    assert!(json.get("layout").is_none());
    assert!(json.get("verticalSlides").is_none());
}

#[test]
fn test_content_node_deserializes_mdc_json() {
    let json = r#"{
        "data": { "title": "Deck", "theme": "dsfr" },
        "body": {
            "type": "root",
            "children": [
                { "type": "element", "tag": "h1", "props": { "id": "deck" },
                  "children": [ { "type": "text", "value": "Deck" } ] },
                { "type": "element", "tag": "hr" },
                { "type": "comment", "value": "note" },
                { "type": "doctype" }
            ]
        }
    }"#;
    let document: ParsedDocument = serde_json::from_str(json).unwrap();
    let body = document.body.as_ref().unwrap();

    assert_eq!(body.children.len(), 4);
    assert!(body.children[1].children().is_empty());
    assert_eq!(body.children[3], ContentNode::Other);
    assert_eq!(document.data.theme(), "dsfr");
    assert_eq!(document.data.title.as_deref(), Some("Deck"));
}

#[test]
fn test_slide_background_priority() {
    assert_eq!(
        slide_background("dsfr", Some(HeadingLevel::H2), None).as_deref(),
        Some("/backgrounds/slide-bg-contrast.png")
    );
    assert_eq!(slide_background("dsfr", Some(HeadingLevel::H4), None), None);
    assert_eq!(slide_background("minimal", Some(HeadingLevel::H1), None), None);
    assert_eq!(slide_background("unknown", Some(HeadingLevel::H1), None), None);

    let custom = ThemeBackgrounds {
        h1: Some("/custom-h1.png".to_string()),
        default: Some("/custom-default.png".to_string()),
        ..Default::default()
    };
    assert_eq!(
        slide_background("dsfr", Some(HeadingLevel::H1), Some(&custom)).as_deref(),
        Some("/custom-h1.png")
    );
    assert_eq!(
        slide_background("dsfr", Some(HeadingLevel::H2), Some(&custom)).as_deref(),
        Some("/custom-default.png")
    );
    assert_eq!(
        slide_background("dsfr", None, Some(&custom)).as_deref(),
        Some("/custom-default.png")
    );
}

#[test]
fn test_attach_backgrounds_inherits_for_vertical_slides() {
    let group = vec![
        para("lead"),
        heading("h3", "One"),
        para("a"),
        heading("h4", "Two"),
    ];
    let slide = group_vertical(&group, Some(HeadingLevel::H2));
    assert_eq!(slide.verticals().len(), 2);

    let metadata = Metadata {
        theme: Some("dsfr".to_string()),
        ..Default::default()
    };
    let slides = attach_backgrounds(vec![slide], &metadata);

    assert_eq!(
        slides[0].background_image.as_deref(),
        Some("/backgrounds/slide-bg-contrast.png")
    );
    let verticals = slides[0].verticals();
    assert_eq!(
        verticals[0].background_image.as_deref(),
        Some("/backgrounds/slide-bg-contrast.png")
    );
    assert_eq!(
        verticals[1].background_image.as_deref(),
        Some("/backgrounds/slide-bg-subtle.png")
    );
}

#[test]
fn test_split_front_matter() {
    let (header, body) = split_front_matter("---\ntitle: Deck\n---\n# Hello\n");
    assert_eq!(header, Some("title: Deck\n"));
    assert_eq!(body, "# Hello\n");

    let (header, body) = split_front_matter("# No header\n");
    assert_eq!(header, None);
    assert_eq!(body, "# No header\n");

    let (header, _) = split_front_matter("---\ntitle: never closed\n");
    assert_eq!(header, None);
}

#[test]
fn test_front_matter_yaml_scalars_and_comments() {
    let metadata = Metadata::from_front_matter(
        "title: >-\n  My long\n  title\ntheme: dsfr # brand theme\ncenter: false\nlang: fr\n",
    )
    .unwrap();

    assert_eq!(metadata.title.as_deref(), Some("My long title"));
    assert_eq!(metadata.theme(), "dsfr");
    assert_eq!(metadata.lang.as_deref(), Some("fr"));
    assert!(!metadata.center);
    assert_eq!(metadata.transition, "slide");
}

#[test]
fn test_front_matter_nested_values_kept() {
    let metadata = Metadata::from_front_matter(
        "theme: dsfr\nbackgrounds:\n  h2: /bg/two.png\naccessPassword: secret\nmargin: 0.1\nreveal:\n  controls: true\n  keyboard:\n    13: next\n",
    )
    .unwrap();

    assert!(metadata.center);
    assert_eq!(
        metadata.backgrounds.and_then(|b| b.h2).as_deref(),
        Some("/bg/two.png")
    );
    assert_eq!(metadata.extra["accessPassword"], "secret");
    assert_eq!(metadata.extra["margin"], 0.1);
    assert_eq!(metadata.extra["reveal"]["controls"], true);
    assert_eq!(metadata.extra["reveal"]["keyboard"]["13"], "next");
}

#[test]
fn test_front_matter_empty_and_invalid() {
    let metadata = Metadata::from_front_matter("# only a comment\n").unwrap();
    assert_eq!(metadata, Metadata::default());

    let result = Metadata::from_front_matter("title: [unclosed\n");
    assert!(matches!(result, Err(DeckError::MetadataError(_))));

    let result = parse_markdown("---\ncenter: maybe\n---\n# Hi\n");
    assert!(matches!(result, Err(DeckError::MetadataError(_))));
}

#[test]
fn test_markdown_to_slides() {
    let source = "---\ntitle: Demo\ntheme: dsfr\n---\n# Demo deck\n\n*A tagline*\n\n## First\n\nSome text.\n\n---\n\nAfter the rule.\n\n## Second\n\n### A\n\nOne\n\n### B\n\nTwo\n";
    let document = parse_markdown(source).unwrap();
    let presentation = parse_document(&document);

    assert_eq!(presentation.metadata.title.as_deref(), Some("Demo"));
    let slides = &presentation.slides;
    assert_eq!(slides.len(), 4);
    assert!(slides[0].subtitle.is_some());
    assert_eq!(
        slides[0].background_image.as_deref(),
        Some("/backgrounds/slide-bg-default.png")
    );
    assert_eq!(fragment_tags(&slides[2].body), vec!["hr", "p"]);
    assert_eq!(slides[3].verticals().len(), 3);
}

#[test]
fn test_markdown_directive_becomes_layout() {
    let source = "## Split\n\n::split-slide\n\nLeft side\n\nRight side\n\n::\n\n## Next\n";
    let document = parse_markdown(source).unwrap();
    let body = document.body.as_ref().unwrap();

    assert_eq!(tags(&body.children), vec!["h2", "split-slide", "h2"]);
    assert_eq!(body.children[1].children().len(), 2);

    let slides = parse_slides(Some(body));
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].layout, Some(Layout::Split));
    assert!(slides[0].header.is_none());
    assert_eq!(slides[1].layout, None);
}

#[test]
fn test_markdown_compact_directive_becomes_layout() {
    let document = parse_markdown("## Split\n\n::split-slide\nLeft side\n::\n").unwrap();
    let body = document.body.as_ref().unwrap();

    assert_eq!(tags(&body.children), vec!["h2", "split-slide"]);
    assert_eq!(tags(body.children[1].children()), vec!["p"]);
    assert_eq!(body.children[1].text_content(), "Left side");

    let slides = parse_slides(Some(body));
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].layout, Some(Layout::Split));
    assert!(slides[0].header.is_none());
}

#[test]
fn test_markdown_nested_directives_match_colon_depth() {
    let source = "::two-col\n:::col\nA\n:::\n:::col\nB\nstill B\n:::\n::\n\nAfter\n";
    let document = parse_markdown(source).unwrap();
    let body = document.body.as_ref().unwrap();

    assert_eq!(tags(&body.children), vec!["two-col", "p"]);
    let columns = body.children[0].children();
    assert_eq!(tags(columns), vec!["col", "col"]);
    assert_eq!(columns[0].text_content(), "A");
    assert_eq!(columns[1].text_content(), "B\nstill B");
}

#[test]
fn test_markdown_stray_directive_close_ignored() {
    let document = parse_markdown("Intro\n:::\n\n::box\nInside\n").unwrap();
    let body = document.body.as_ref().unwrap();

    assert_eq!(tags(&body.children), vec!["p", "box"]);
    assert_eq!(body.children[1].text_content(), "Inside");
}

#[test]
fn test_markdown_html_component_becomes_layout() {
    let source = "## Split\n\n<SplitSlide>\n\nLeft\n\n</SplitSlide>\n";
    let document = parse_markdown(source).unwrap();
    let slides = parse_slides(document.body.as_ref());

    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].layout, Some(Layout::Split));
}

#[test]
fn test_markdown_emphasis_paragraph_shape() {
    let document = parse_markdown("*only emphasis*\n").unwrap();
    let body = document.body.unwrap();
    assert!(is_italic_paragraph(&body.children[0]));
}
