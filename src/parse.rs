//! Parsing of the installable applications list.
//!
//! The tool under test prints one application per line, the name followed by
//! the url. The name never contains whitespace. Everything after the first
//! run of whitespace is the url, so column-aligned output such as
//!
//! ```text
//! actionlint  https://github.com/actionlint/actionlint
//! gh          https://cli.github.com
//! ```
//!
//! parses the same as single-space separated output. The url is not split
//! further: a url containing spaces is kept verbatim and will show up as a
//! mismatch against the documentation rather than being silently truncated.

use crate::app::App;
use crate::error::CheckError;

/// Parses the complete output of the installable applications command.
///
/// The output is trimmed once as a whole before it is split into lines.
/// Empty output yields an empty list and blank lines between entries are
/// skipped. Line numbers in errors count from the first non-blank line.
pub fn parse_apps(output: &str) -> Result<Vec<App>, CheckError> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(Vec::new());
    }

    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_numbered_line(index + 1, line))
        .collect()
}

/// Parses a single `name url` line.
pub fn parse_line(line: &str) -> Result<App, CheckError> {
    parse_numbered_line(1, line)
}

fn parse_numbered_line(line_number: usize, line: &str) -> Result<App, CheckError> {
    let (name, url) = split_name_url(line).ok_or_else(|| CheckError::MalformedLine {
        line_number,
        line: line.to_string(),
    })?;
    Ok(App::new(name, url))
}

fn split_name_url(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.trim().split_once(char::is_whitespace)?;
    Some((name, rest.trim_start()))
}
