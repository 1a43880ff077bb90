//! List and render commands: print one side of the comparison.

use anyhow::{Context, Result};
use std::path::Path;

use appdocs::config::{Config, Overrides};
use appdocs::runner::{load_installable_apps, CommandLine, ProcessRunner};
use appdocs::scan::scan_documented_apps;

use super::load_sources;
use crate::cli::{ListSource, SourceArgs};

/// Print the installable or documented applications
pub fn cmd_list(
    config_path: &Path,
    args: SourceArgs,
    source: ListSource,
    json: bool,
) -> Result<()> {
    let apps = match source {
        ListSource::Installable => {
            let command = load_command(config_path, args)?;
            load_installable_apps(&ProcessRunner, &command)?
        }
        ListSource::Documented => {
            let sources = load_sources(config_path, args)?;
            let region = sources.document.region(&sources.region)?;
            scan_documented_apps(&region)?
        }
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&apps).context("Failed to serialize applications")?;
        println!("{}", rendered);
    } else {
        for app in &apps {
            println!("{}", app);
        }
    }
    Ok(())
}

/// Print the markdown list matching the installable applications
pub fn cmd_render(config_path: &Path, args: SourceArgs) -> Result<()> {
    let command = load_command(config_path, args)?;
    for app in load_installable_apps(&ProcessRunner, &command)? {
        println!("{}", app.to_markdown_item());
    }
    Ok(())
}

/// Resolve only the command, so printing the installable applications works
/// before the document exists.
fn load_command(config_path: &Path, args: SourceArgs) -> Result<CommandLine> {
    let config = Config::load_or_default(config_path)?.with_overrides(Overrides {
        command: args.command,
        ..Default::default()
    });
    config.command_line()
}
