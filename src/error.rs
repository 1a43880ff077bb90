//! Errors raised by the installable applications check.
//!
//! Every variant is terminal: nothing here is retried or recovered from.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The external command could not be spawned, exited non-zero, or
    /// printed something that is not UTF-8.
    CommandFailed { command: String, reason: String },
    /// The configured region does not exist in the document.
    RegionNotFound { document: String, region: String },
    /// A documented list item contains no link.
    MissingLink { location: String },
    /// A documented link has no `href`.
    MissingHref { location: String, text: String },
    /// A line of command output has no url after the name.
    MalformedLine { line_number: usize, line: String },
    /// The installable and documented lists differ.
    Mismatch { label: String, details: String },
}

impl CheckError {
    /// True for the expected "lists differ" outcome, false for errors that
    /// prevented the comparison from happening at all.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, CheckError::Mismatch { .. })
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::CommandFailed { command, reason } => {
                write!(f, "Command '{}' failed: {}", command, reason)
            }
            CheckError::RegionNotFound { document, region } => {
                write!(f, "{} has no {}", document, region)
            }
            CheckError::MissingLink { location } => {
                write!(f, "List item at {} contains no link", location)
            }
            CheckError::MissingHref { location, text } => {
                write!(f, "Link '{}' at {} has no href", text, location)
            }
            CheckError::MalformedLine { line_number, line } => write!(
                f,
                "Line {} of the installable applications is not 'name url': {:?}",
                line_number, line
            ),
            CheckError::Mismatch { label, details } => write!(
                f,
                "{}: installable applications do not match the documented applications\n\n{}",
                label, details
            ),
        }
    }
}

impl std::error::Error for CheckError {}
