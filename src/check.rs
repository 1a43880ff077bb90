//! The installable applications check.
//!
//! # Doc Audit
//! - audited: 2026-10-19
//! - docs: README.md
//! - ignore: false

use std::collections::HashSet;

use crate::app::App;
use crate::error::CheckError;
use crate::runner::{load_installable_apps, CommandLine, CommandRunner};
use crate::scan::{scan_documented_apps, DocumentNodes};

/// Name the check reports itself under unless configured otherwise.
pub const DEFAULT_LABEL: &str = "verify installable applications";

/// Outcome of a passing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The apps both sides agreed on, in order.
    pub apps: Vec<App>,
}

/// Compares the apps a command advertises with the apps a document lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppsCheck {
    label: String,
}

impl Default for AppsCheck {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl AppsCheck {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Human-readable name of the check. Only used for reporting.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs `command`, scans `document`, and requires both app lists to be
    /// equal including their order.
    pub fn run<R, D>(
        &self,
        runner: &R,
        command: &CommandLine,
        document: &D,
    ) -> Result<CheckReport, CheckError>
    where
        R: CommandRunner + ?Sized,
        D: DocumentNodes + ?Sized,
    {
        let installable = load_installable_apps(runner, command)?;
        let documented = scan_documented_apps(document)?;
        verify(&self.label, &installable, &documented)?;
        Ok(CheckReport { apps: installable })
    }
}

/// Requires `documented` to equal `installable`, element by element.
pub fn verify(label: &str, installable: &[App], documented: &[App]) -> Result<(), CheckError> {
    if installable == documented {
        return Ok(());
    }
    Err(CheckError::Mismatch {
        label: label.to_string(),
        details: describe_mismatch(installable, documented),
    })
}

/// Explains how two app lists differ.
///
/// Lists the apps only one side has, then the first position at which the
/// lists disagree. When both sides hold the same apps that position is the
/// only hint, since the difference is purely in the order.
pub fn describe_mismatch(installable: &[App], documented: &[App]) -> String {
    let installable_set: HashSet<&App> = installable.iter().collect();
    let documented_set: HashSet<&App> = documented.iter().collect();

    let mut lines = vec![format!(
        "installable applications: {}, documented applications: {}",
        installable.len(),
        documented.len()
    )];

    let missing: Vec<&App> = installable
        .iter()
        .filter(|app| !documented_set.contains(app))
        .collect();
    if !missing.is_empty() {
        lines.push(String::new());
        lines.push("missing from the documentation:".to_string());
        lines.extend(missing.iter().map(|app| format!("  - {}", app)));
    }

    let extra: Vec<&App> = documented
        .iter()
        .filter(|app| !installable_set.contains(app))
        .collect();
    if !extra.is_empty() {
        lines.push(String::new());
        lines.push("documented but not installable:".to_string());
        lines.extend(extra.iter().map(|app| format!("  + {}", app)));
    }

    let first_difference = (0..installable.len().max(documented.len()))
        .find(|&index| installable.get(index) != documented.get(index));
    if let Some(index) = first_difference {
        let describe = |app: Option<&App>| match app {
            Some(app) => app.to_string(),
            None => "(end of list)".to_string(),
        };
        lines.push(String::new());
        lines.push(format!("first difference at position {}:", index + 1));
        lines.push(format!("  installable: {}", describe(installable.get(index))));
        lines.push(format!("  documented:  {}", describe(documented.get(index))));
    }

    lines.join("\n")
}
