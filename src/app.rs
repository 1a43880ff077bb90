//! The application record compared by the check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One advertised or documented application.
///
/// Two apps are equal iff both fields match exactly. There is no
/// normalization of case, whitespace, or trailing slashes in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    pub url: String,
}

impl App {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Renders the app as a markdown list item: `- [name](url)`
    pub fn to_markdown_item(&self) -> String {
        format!("- [{}]({})", self.name, self.url)
    }
}

/// Formats as `name url`, the same shape the installable list uses.
impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.url)
    }
}
