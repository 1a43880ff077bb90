//! Markdown documents as flat, navigable node sequences.
//!
//! The markdown is parsed with `pulldown-cmark` and every event becomes one
//! [`Node`]. Opening and closing events stay separate nodes, so a list item
//! or a link is the slice from its open node to the matching close node.
//! [`NodeList`] is such a slice: a whole document, a region, one list item,
//! or one link.
//!
//! # Doc Audit
//! - audited: 2026-10-19
//! - docs: README.md
//! - ignore: false

use anyhow::{Context, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;

use crate::error::CheckError;

pub mod region;

pub use region::Region;

/// What a node represents, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    ListItemOpen,
    ListItemClose,
    LinkOpen { href: String },
    LinkClose,
    HeadingOpen { level: usize },
    HeadingClose,
    /// Plain text, inline code, or a line break rendered as a space.
    Text(String),
    /// Raw HTML, one node per line of an HTML block.
    Html(String),
    Other,
}

/// The payload-free discriminant of a [`NodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    ListItemOpen,
    ListItemClose,
    LinkOpen,
    LinkClose,
    HeadingOpen,
    HeadingClose,
    Text,
    Html,
    Other,
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::ListItemOpen => NodeType::ListItemOpen,
            NodeKind::ListItemClose => NodeType::ListItemClose,
            NodeKind::LinkOpen { .. } => NodeType::LinkOpen,
            NodeKind::LinkClose => NodeType::LinkClose,
            NodeKind::HeadingOpen { .. } => NodeType::HeadingOpen,
            NodeKind::HeadingClose => NodeType::HeadingClose,
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::Html(_) => NodeType::Html,
            NodeKind::Other => NodeType::Other,
        }
    }
}

impl NodeType {
    /// The type that closes this one, if it is an opening type.
    pub fn closing(self) -> Option<NodeType> {
        match self {
            NodeType::ListItemOpen => Some(NodeType::ListItemClose),
            NodeType::LinkOpen => Some(NodeType::LinkClose),
            NodeType::HeadingOpen => Some(NodeType::HeadingClose),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// 1-based line of the markdown source the node starts on.
    pub line: usize,
}

/// A parsed markdown document.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    nodes: Vec<Node>,
}

impl Document {
    /// Parses markdown `content`. `name` is used in error locations.
    pub fn parse(name: impl Into<String>, content: &str) -> Self {
        let line_starts: Vec<usize> = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        let nodes = Parser::new_ext(content, Options::empty())
            .into_offset_iter()
            .map(|(event, range)| Node {
                kind: node_kind(event),
                line: line_starts.partition_point(|&start| start <= range.start),
            })
            .collect();

        Self {
            name: name.into(),
            nodes,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {}", path.display()))?;
        Ok(Self::parse(path.display().to_string(), &content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes of the document.
    pub fn nodes(&self) -> NodeList<'_> {
        NodeList::new(&self.name, &self.nodes)
    }

    /// The nodes inside `region`.
    pub fn region(&self, region: &Region) -> Result<NodeList<'_>, CheckError> {
        region
            .select(self.nodes())
            .ok_or_else(|| CheckError::RegionNotFound {
                document: self.name.clone(),
                region: region.to_string(),
            })
    }
}

fn node_kind(event: Event<'_>) -> NodeKind {
    match event {
        Event::Start(Tag::Item) => NodeKind::ListItemOpen,
        Event::End(TagEnd::Item) => NodeKind::ListItemClose,
        Event::Start(Tag::Link { dest_url, .. }) => NodeKind::LinkOpen {
            href: dest_url.to_string(),
        },
        Event::End(TagEnd::Link) => NodeKind::LinkClose,
        Event::Start(Tag::Heading { level, .. }) => NodeKind::HeadingOpen {
            level: match level {
                pulldown_cmark::HeadingLevel::H1 => 1,
                pulldown_cmark::HeadingLevel::H2 => 2,
                pulldown_cmark::HeadingLevel::H3 => 3,
                pulldown_cmark::HeadingLevel::H4 => 4,
                pulldown_cmark::HeadingLevel::H5 => 5,
                pulldown_cmark::HeadingLevel::H6 => 6,
            },
        },
        Event::End(TagEnd::Heading(_)) => NodeKind::HeadingClose,
        Event::Text(text) | Event::Code(text) => NodeKind::Text(text.to_string()),
        Event::SoftBreak | Event::HardBreak => NodeKind::Text(" ".to_string()),
        Event::Html(html) => NodeKind::Html(html.to_string()),
        _ => NodeKind::Other,
    }
}

/// A borrowed slice of a document's nodes.
#[derive(Debug, Clone, Copy)]
pub struct NodeList<'a> {
    source: &'a str,
    nodes: &'a [Node],
}

impl<'a> NodeList<'a> {
    pub fn new(source: &'a str, nodes: &'a [Node]) -> Self {
        Self { source, nodes }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Node> {
        self.nodes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&'a Node> {
        self.nodes.get(index)
    }

    /// `source:line` of the first node, or just `source` when empty.
    pub fn location(&self) -> String {
        match self.nodes.first() {
            Some(node) => format!("{}:{}", self.source, node.line),
            None => self.source.to_string(),
        }
    }

    /// The nodes in `start..end`, clamped to this list.
    pub fn slice(&self, start: usize, end: usize) -> NodeList<'a> {
        let end = end.min(self.nodes.len());
        let start = start.min(end);
        NodeList::new(self.source, &self.nodes[start..end])
    }

    /// Indices of all nodes of type `node_type`, in document order.
    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = usize> + 'a {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.kind.node_type() == node_type)
            .map(|(index, _)| index)
    }

    /// Index of the first node of type `node_type`.
    pub fn node_of_type(&self, node_type: NodeType) -> Option<usize> {
        self.nodes_of_type(node_type).next()
    }

    /// The opening node at `open` together with everything up to and
    /// including its matching close node.
    ///
    /// For a node that does not open anything this is just the node itself.
    /// An unterminated open node extends to the end of the list.
    pub fn nodes_for(&self, open: usize) -> NodeList<'a> {
        let Some(node) = self.nodes.get(open) else {
            return self.slice(open, open);
        };
        let open_type = node.kind.node_type();
        let Some(close_type) = open_type.closing() else {
            return self.slice(open, open + 1);
        };

        let mut depth = 0usize;
        for (offset, node) in self.nodes[open..].iter().enumerate() {
            let node_type = node.kind.node_type();
            if node_type == open_type {
                depth += 1;
            } else if node_type == close_type {
                depth -= 1;
                if depth == 0 {
                    return self.slice(open, open + offset + 1);
                }
            }
        }
        self.slice(open, self.nodes.len())
    }

    /// Concatenated plain text of all text nodes.
    pub fn text(&self) -> String {
        self.nodes
            .iter()
            .filter_map(|node| match &node.kind {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
