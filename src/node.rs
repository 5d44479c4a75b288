// ABOUTME: Content tree model consumed by the slide segmenter
// ABOUTME: Mirrors the MDC JSON AST shape (element, text, comment, raw nodes)

use crate::metadata::Metadata;
use serde::{Deserialize, Serialize, Serializer};
use serde::ser::SerializeStruct;
use serde_json::{Map, Value};

/// A single node of the parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Element(Element),
    Text {
        #[serde(default)]
        value: String,
    },
    Comment {
        #[serde(default)]
        value: String,
    },
    /// Markup the parser passed through without interpreting it
    Raw {
        #[serde(default)]
        value: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>, children: Vec<ContentNode>) -> Self {
        Self {
            tag: tag.into(),
            props: Map::new(),
            children,
        }
    }

    /// Attach a property, builder style
    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[ContentNode] {
        &self.children
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

impl ContentNode {
    pub fn element(tag: impl Into<String>, children: Vec<ContentNode>) -> Self {
        ContentNode::Element(Element::new(tag, children))
    }

    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ContentNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// True when this node is an element with the given tag
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element().map_or(false, |e| e.is(tag))
    }

    /// Children of an element; every other kind of node has none.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and all of its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ContentNode::Text { value } => out.push_str(value),
            ContentNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            _ => {}
        }
    }
}

/// Top-level body of a parsed document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl Root {
    pub fn new(children: Vec<ContentNode>) -> Self {
        Self { children }
    }
}

/// The result of parsing one presentation source: front matter plus body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedDocument {
    #[serde(default)]
    pub data: Metadata,
    #[serde(default)]
    pub body: Option<Root>,
}

/// A thin wrapper around a slice of nodes borrowed from the original tree,
/// rendered the same way as a document root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootFragment<'a> {
    pub children: Vec<&'a ContentNode>,
}

impl<'a> RootFragment<'a> {
    pub fn new(children: Vec<&'a ContentNode>) -> Self {
        Self { children }
    }

    pub fn from_slice(nodes: &'a [ContentNode]) -> Self {
        Self {
            children: nodes.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl Serialize for RootFragment<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RootFragment", 2)?;
        state.serialize_field("type", "root")?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
