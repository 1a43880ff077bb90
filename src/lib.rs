//! # appdocs - installable applications documentation check
//!
//! Verifies that the applications a command-line tool says it can install
//! match the applications its documentation lists.
//!
//! ## Overview
//!
//! The tool under test prints one `name url` line per installable
//! application. The documentation lists the same applications as a bulleted
//! list of links inside one region of a markdown file. `appdocs` runs the
//! tool, scans the region and requires both lists to be identical, in the
//! same order.
//!
//! ## Modules
//!
//! - [`app`] - the `App` record shared by both sides of the comparison
//! - [`parse`] - parsing the tool's line-oriented output
//! - [`runner`] - invoking the external command
//! - [`document`] - markdown node sequences and region selection
//! - [`scan`] - extracting documented apps from list items
//! - [`check`] - the order-sensitive equality check
//! - [`config`] - `.appdocs.md` configuration
//! - [`error`] - the check's error taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use appdocs::check::AppsCheck;
//! use appdocs::document::{Document, Region};
//! use appdocs::runner::{CommandLine, ProcessRunner};
//!
//! let document = Document::load(std::path::Path::new("README.md")).expect("readable README");
//! let region = document
//!     .region(&Region::Marker("apps".to_string()))
//!     .expect("README has an apps region");
//! let command = CommandLine::new("cargo", ["run", "--", "--apps"]);
//!
//! let check = AppsCheck::default();
//! match check.run(&ProcessRunner, &command, &region) {
//!     Ok(report) => println!("{} apps documented", report.apps.len()),
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```

pub mod app;
pub mod check;
pub mod config;
pub mod document;
pub mod error;
pub mod parse;
pub mod runner;
pub mod scan;
pub mod ui;

pub use app::App;
pub use error::CheckError;

/// Default path constants.
pub mod paths {
    /// Configuration file looked up in the working directory: `.appdocs.md`
    pub const CONFIG_FILE: &str = ".appdocs.md";
    /// Documentation file checked when nothing else is configured: `README.md`
    pub const DOCUMENT_FILE: &str = "README.md";
}
