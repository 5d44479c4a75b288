// ABOUTME: Markdown adapter producing the content tree with comrak
// ABOUTME: Maps comrak nodes onto HTML tag names and folds `::name` directive blocks

use crate::detect::HeadingLevel;
use crate::errors::Result;
use crate::metadata::{split_front_matter, Metadata};
use crate::node::{ContentNode, Element, ParsedDocument, Root};
use crate::utils;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// A converted block, or a directive marker still to be folded.
///
/// Markers carry the closer that ends them: the colon run for `::name`
/// directives, the tag name for HTML components.
enum Block {
    Node(ContentNode),
    Open { name: String, closer: String },
    Close(String),
}

/// A directive element waiting for its closer
struct Frame {
    element: Element,
    closer: String,
}

/// Parse markdown text (with optional front matter) into a document.
pub fn parse_markdown(content: &str) -> Result<ParsedDocument> {
    let (header, body) = split_front_matter(content);
    let data = match header {
        Some(header) => Metadata::from_front_matter(header)?,
        None => Metadata::default(),
    };

    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;

    let arena = Arena::new();
    let root = parse_document(&arena, body, &options);
    let children = convert_children(root);
    debug!("Markdown produced {} top-level nodes", children.len());

    Ok(ParsedDocument {
        data,
        body: Some(Root::new(children)),
    })
}

/// Read and parse a markdown file
pub fn read_markdown_file(path: &Path) -> Result<ParsedDocument> {
    info!("Reading markdown: {:?}", path);
    utils::validate_file_exists(path)?;
    let content = fs::read_to_string(path)?;
    parse_markdown(&content)
}

/// Read a content tree already serialized as MDC JSON
pub fn read_ast_file(path: &Path) -> Result<ParsedDocument> {
    info!("Reading content tree: {:?}", path);
    utils::validate_file_exists(path)?;
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<ContentNode> {
    let mut blocks = Vec::new();
    for child in node.children() {
        convert(child, &mut blocks);
    }
    fold_directives(blocks)
}

fn element<'a>(tag: &str, node: &'a AstNode<'a>) -> ContentNode {
    ContentNode::Element(Element::new(tag, convert_children(node)))
}

fn convert<'a>(node: &'a AstNode<'a>, out: &mut Vec<Block>) {
    let ast = node.data.borrow();
    let converted = match &ast.value {
        NodeValue::Paragraph => {
            paragraph(node, out);
            return;
        }
        NodeValue::Heading(heading) => match HeadingLevel::from_depth(heading.level) {
            Some(level) => element(level.as_tag(), node),
            None => element("p", node),
        },
        NodeValue::ThematicBreak => ContentNode::element("hr", Vec::new()),
        NodeValue::BlockQuote => element("blockquote", node),
        NodeValue::List(list) => match list.list_type {
            ListType::Bullet => element("ul", node),
            ListType::Ordered => element("ol", node),
        },
        NodeValue::Item(_) => element("li", node),
        NodeValue::CodeBlock(code) => {
            let mut inner = Element::new("code", vec![ContentNode::text(code.literal.clone())]);
            if !code.info.is_empty() {
                inner = inner.with_prop("language", code.info.clone());
            }
            ContentNode::element("pre", vec![ContentNode::Element(inner)])
        }
        NodeValue::HtmlBlock(html) => {
            html_block(&html.literal, out);
            return;
        }
        NodeValue::Table(..) => element("table", node),
        NodeValue::TableRow(..) => element("tr", node),
        NodeValue::TableCell => element("td", node),
        NodeValue::Text(text) => ContentNode::text(text.clone()),
        NodeValue::SoftBreak => ContentNode::text("\n"),
        NodeValue::LineBreak => ContentNode::element("br", Vec::new()),
        NodeValue::Code(code) => {
            ContentNode::element("code", vec![ContentNode::text(code.literal.clone())])
        }
        NodeValue::HtmlInline(html) => ContentNode::Raw {
            value: html.clone(),
        },
        NodeValue::Emph => element("em", node),
        NodeValue::Strong => element("strong", node),
        NodeValue::Strikethrough => element("del", node),
        NodeValue::Link(link) => ContentNode::Element(
            Element::new("a", convert_children(node)).with_prop("href", link.url.clone()),
        ),
        NodeValue::Image(link) => ContentNode::Element(
            Element::new("img", Vec::new())
                .with_prop("src", link.url.clone())
                .with_prop("alt", node_text(node)),
        ),
        NodeValue::FrontMatter(_) => return,
        _ => element("div", node),
    };
    out.push(Block::Node(converted));
}

/// Convert a paragraph line by line.
///
/// A line holding only `::name` opens a directive and a line of bare colons
/// closes the innermost directive opened with the same number of colons.
/// The remaining lines are kept together as paragraphs between the markers.
fn paragraph<'a>(node: &'a AstNode<'a>, out: &mut Vec<Block>) {
    let mut lines: Vec<Vec<&'a AstNode<'a>>> = vec![Vec::new()];
    for child in node.children() {
        let soft_break = matches!(child.data.borrow().value, NodeValue::SoftBreak);
        if soft_break {
            lines.push(Vec::new());
        } else if let Some(line) = lines.last_mut() {
            line.push(child);
        }
    }

    let mut pending = Vec::new();
    for line in lines {
        if let Some(marker) = directive_marker(&line) {
            flush_paragraph(&mut pending, out);
            out.push(marker);
            continue;
        }

        if !pending.is_empty() {
            pending.push(ContentNode::text("\n"));
        }
        let mut blocks = Vec::new();
        for child in line {
            convert(child, &mut blocks);
        }
        pending.extend(fold_directives(blocks));
    }
    flush_paragraph(&mut pending, out);
}

fn flush_paragraph(pending: &mut Vec<ContentNode>, out: &mut Vec<Block>) {
    if !pending.is_empty() {
        out.push(Block::Node(ContentNode::element("p", std::mem::take(pending))));
    }
}

fn directive_marker(line: &[&AstNode<'_>]) -> Option<Block> {
    let mut text = String::new();
    for node in line {
        match &node.data.borrow().value {
            NodeValue::Text(value) => text.push_str(value),
            _ => return None,
        }
    }

    let trimmed = text.trim();
    let depth = trimmed.chars().take_while(|&c| c == ':').count();
    if depth < 2 {
        return None;
    }
    let closer = ":".repeat(depth);
    let rest = &trimmed[depth..];
    if rest.trim().is_empty() {
        return Some(Block::Close(closer));
    }

    let name = rest
        .split(|c: char| c.is_whitespace() || c == '{')
        .next()
        .unwrap_or_default();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then(|| Block::Open {
        name: name.to_string(),
        closer,
    })
}

/// Raw HTML opening or closing a custom element becomes a directive marker.
fn html_block(literal: &str, out: &mut Vec<Block>) {
    let trimmed = literal.trim();
    let (first_line, rest) = match trimmed.split_once('\n') {
        Some((first, rest)) => (first.trim(), rest.trim()),
        None => (trimmed, ""),
    };

    let marker = if let Some(name) = first_line
        .strip_prefix("</")
        .and_then(|s| s.strip_suffix('>'))
    {
        let name = name.trim();
        is_custom_tag(name).then(|| Block::Close(name.to_string()))
    } else if let Some(inner) = first_line
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
    {
        let self_closing = inner.ends_with('/');
        let name = inner
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or_default();
        match (is_custom_tag(name), self_closing) {
            (true, true) => Some(Block::Node(ContentNode::element(name, Vec::new()))),
            (true, false) => Some(Block::Open {
                name: name.to_string(),
                closer: name.to_string(),
            }),
            _ => None,
        }
    } else {
        None
    };

    let Some(marker) = marker else {
        out.push(Block::Node(ContentNode::Raw {
            value: literal.to_string(),
        }));
        return;
    };

    let opened = match &marker {
        Block::Open { closer, .. } => Some(closer.clone()),
        _ => None,
    };
    out.push(marker);

    let (inner, closed) = match (rest.rsplit_once('\n'), &opened) {
        (Some((inner, last)), Some(_)) if is_closing_tag(last) => (inner.trim(), true),
        (None, Some(_)) if is_closing_tag(rest) => ("", true),
        _ => (rest, false),
    };
    if !inner.is_empty() {
        out.push(Block::Node(ContentNode::Raw {
            value: inner.to_string(),
        }));
    }
    if let (true, Some(closer)) = (closed, opened) {
        out.push(Block::Close(closer));
    }
}

fn is_closing_tag(line: &str) -> bool {
    line.trim()
        .strip_prefix("</")
        .and_then(|s| s.strip_suffix('>'))
        .map_or(false, |name| is_custom_tag(name.trim()))
}

/// Component tags are either hyphenated or start with an uppercase letter
fn is_custom_tag(name: &str) -> bool {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid
        && (name.contains('-') || name.chars().next().map_or(false, |c| c.is_ascii_uppercase()))
}

/// Nest the nodes between directive markers inside their directive element.
///
/// A closer ends the innermost directive it matches, closing any directive
/// opened inside it along the way.
fn fold_directives(blocks: Vec<Block>) -> Vec<ContentNode> {
    let mut out = Vec::new();
    let mut open: Vec<Frame> = Vec::new();

    fn push(node: ContentNode, open: &mut [Frame], out: &mut Vec<ContentNode>) {
        match open.last_mut() {
            Some(parent) => parent.element.children.push(node),
            None => out.push(node),
        }
    }

    for block in blocks {
        match block {
            Block::Node(node) => push(node, &mut open, &mut out),
            Block::Open { name, closer } => open.push(Frame {
                element: Element::new(name, Vec::new()),
                closer,
            }),
            Block::Close(closer) => {
                if !open.iter().any(|frame| frame.closer == closer) {
                    debug!("Ignoring directive close '{}' without an open directive", closer);
                    continue;
                }
                while let Some(frame) = open.pop() {
                    let matched = frame.closer == closer;
                    if !matched {
                        debug!("Directive '{}' closed by its parent", frame.element.tag);
                    }
                    push(ContentNode::Element(frame.element), &mut open, &mut out);
                    if matched {
                        break;
                    }
                }
            }
        }
    }

    while let Some(frame) = open.pop() {
        debug!("Directive '{}' was never closed", frame.element.tag);
        push(ContentNode::Element(frame.element), &mut open, &mut out);
    }

    out
}

fn node_text<'a>(node: &'a AstNode<'a>) -> String {
    convert_children(node)
        .iter()
        .map(ContentNode::text_content)
        .collect()
}
