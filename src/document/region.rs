//! Selecting the part of a document that lists the applications.

use regex::Regex;
use std::fmt;

use super::{NodeKind, NodeList, NodeType};

const MARKER_OPEN_PATTERN: &str = r#"(?i)<a\s+(?:[^>]*\s)?type\s*=\s*"([^"]*)"[^>]*>"#;
const MARKER_CLOSE_PATTERN: &str = r"(?i)^\s*</a\s*>\s*$";

/// Where in the document the application list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// HTML anchors around the list:
    ///
    /// ```markdown
    /// <a type="apps">
    ///
    /// - [actionlint](https://github.com/actionlint/actionlint)
    ///
    /// </a>
    /// ```
    ///
    /// The anchors must be separated from the list by blank lines so that
    /// they stay HTML blocks of their own.
    Marker(String),
    /// Everything below the heading with this text, up to the next heading
    /// of the same or a higher level.
    Heading(String),
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Marker(name) => write!(f, "region <a type=\"{}\">", name),
            Region::Heading(title) => write!(f, "section \"{}\"", title),
        }
    }
}

impl Region {
    /// The nodes of this region inside `nodes`, excluding the delimiting
    /// marker or heading nodes.
    pub fn select<'a>(&self, nodes: NodeList<'a>) -> Option<NodeList<'a>> {
        match self {
            Region::Marker(name) => select_marker(nodes, name),
            Region::Heading(title) => select_heading(nodes, title),
        }
    }
}

fn select_marker<'a>(nodes: NodeList<'a>, name: &str) -> Option<NodeList<'a>> {
    let open = Regex::new(MARKER_OPEN_PATTERN).ok()?;
    let close = Regex::new(MARKER_CLOSE_PATTERN).ok()?;

    let start = nodes.iter().position(|node| match &node.kind {
        NodeKind::Html(html) => open
            .captures(html)
            .and_then(|caps| caps.get(1))
            .is_some_and(|m| m.as_str() == name),
        _ => false,
    })?;

    let end = nodes
        .iter()
        .skip(start + 1)
        .position(|node| matches!(&node.kind, NodeKind::Html(html) if close.is_match(html)))?
        + start
        + 1;

    Some(nodes.slice(start + 1, end))
}

fn select_heading<'a>(nodes: NodeList<'a>, title: &str) -> Option<NodeList<'a>> {
    let (heading_start, level, heading_len) = nodes
        .nodes_of_type(NodeType::HeadingOpen)
        .find_map(|index| {
            let level = match nodes.get(index)?.kind {
                NodeKind::HeadingOpen { level } => level,
                _ => return None,
            };
            let heading = nodes.nodes_for(index);
            (heading.text().trim() == title.trim()).then_some((index, level, heading.len()))
        })?;
    let body_start = heading_start + heading_len;

    let body_end = nodes
        .iter()
        .enumerate()
        .skip(body_start)
        .find_map(|(index, node)| match node.kind {
            NodeKind::HeadingOpen { level: next } if next <= level => Some(index),
            _ => None,
        })
        .unwrap_or(nodes.len());

    Some(nodes.slice(body_start, body_end))
}
