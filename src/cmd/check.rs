//! Check command: compare installable and documented applications.

use anyhow::Result;
use std::path::Path;

use appdocs::check::AppsCheck;
use appdocs::runner::ProcessRunner;
use appdocs::ui::{self, colors};
use appdocs::CheckError;

use super::{load_sources, Output};
use crate::cli::SourceArgs;

/// Execute the check command
///
/// Exits with status 1 when the lists differ. Other failures are returned
/// as errors and reported by `main`.
pub fn cmd_check(config_path: &Path, args: SourceArgs, output: Output) -> Result<()> {
    let sources = load_sources(config_path, args)?;
    let check = AppsCheck::new(sources.config.label.clone());

    if output.verbose {
        println!("{}", colors::heading(check.label()));
        println!(
            "  {} {}",
            colors::secondary("command:"),
            colors::identifier(&sources.command.to_string())
        );
        println!(
            "  {} {} ({})",
            colors::secondary("document:"),
            colors::identifier(sources.document.name()),
            sources.region
        );
    }

    let region = sources.document.region(&sources.region)?;

    match check.run(&ProcessRunner, &sources.command, &region) {
        Ok(report) => {
            if !output.quiet {
                println!(
                    "{} {}: {} applications documented",
                    ui::pass_icon(),
                    check.label(),
                    report.apps.len()
                );
            }
            Ok(())
        }
        Err(CheckError::Mismatch { label, details }) => {
            eprintln!(
                "{} {}: installable applications do not match {}",
                ui::fail_icon(),
                label,
                colors::identifier(sources.document.name())
            );
            eprintln!();
            eprintln!("{}", ui::colorize_details(&details));
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
