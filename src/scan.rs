//! Extracting the documented applications from list items.

use crate::app::App;
use crate::document::{NodeKind, NodeList, NodeType};
use crate::error::CheckError;

/// Trait for navigable documents the scanner can read apps from.
///
/// `Item` and `Link` are handles into the document. Implementations decide
/// what a handle is; [`NodeList`] uses sub-slices of itself.
pub trait DocumentNodes {
    type Item;
    type Link;

    /// All list items, in document order.
    fn list_items(&self) -> Vec<Self::Item>;

    /// The first link inside `item`.
    fn first_link(&self, item: &Self::Item) -> Option<Self::Link>;

    /// The link's visible label.
    fn link_text(&self, link: &Self::Link) -> String;

    /// The link's `href` attribute.
    fn link_href(&self, link: &Self::Link) -> Option<String>;

    /// Human-readable position of `item`, used in error messages.
    fn location(&self, item: &Self::Item) -> String;
}

impl<'a> DocumentNodes for NodeList<'a> {
    type Item = NodeList<'a>;
    type Link = NodeList<'a>;

    fn list_items(&self) -> Vec<NodeList<'a>> {
        self.nodes_of_type(NodeType::ListItemOpen)
            .map(|index| self.nodes_for(index))
            .collect()
    }

    fn first_link(&self, item: &NodeList<'a>) -> Option<NodeList<'a>> {
        item.node_of_type(NodeType::LinkOpen)
            .map(|index| item.nodes_for(index))
    }

    fn link_text(&self, link: &NodeList<'a>) -> String {
        link.text()
    }

    fn link_href(&self, link: &NodeList<'a>) -> Option<String> {
        match link.get(0).map(|node| &node.kind) {
            Some(NodeKind::LinkOpen { href }) => Some(href.clone()),
            _ => None,
        }
    }

    fn location(&self, item: &NodeList<'a>) -> String {
        item.location()
    }
}

/// Reads one app per list item of `document`.
///
/// Every list item must contain a link with a non-empty `href`. The first
/// item that does not fails the whole scan; nothing is skipped.
pub fn scan_documented_apps<D: DocumentNodes + ?Sized>(
    document: &D,
) -> Result<Vec<App>, CheckError> {
    document
        .list_items()
        .iter()
        .map(|item| -> Result<App, CheckError> {
            let link = document
                .first_link(item)
                .ok_or_else(|| CheckError::MissingLink {
                    location: document.location(item),
                })?;
            let name = document.link_text(&link);
            let url = document
                .link_href(&link)
                .filter(|href| !href.is_empty())
                .ok_or_else(|| CheckError::MissingHref {
                    location: document.location(item),
                    text: name.clone(),
                })?;
            Ok(App::new(name, url))
        })
        .collect()
}
