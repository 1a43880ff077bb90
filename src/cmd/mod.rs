//! Command module structure for appdocs CLI

use anyhow::Result;
use std::path::Path;

use appdocs::config::{Config, Overrides};
use appdocs::document::{Document, Region};
use appdocs::runner::CommandLine;

use crate::cli::SourceArgs;

pub mod check;
pub mod list;
pub mod util;

/// How chatty command output should be.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub quiet: bool,
    pub verbose: bool,
}

/// Everything a command needs to build both application lists.
pub struct Sources {
    pub config: Config,
    pub command: CommandLine,
    pub document: Document,
    pub region: Region,
}

/// Load the configuration file, apply command-line overrides, and read the
/// document.
pub fn load_sources(config_path: &Path, args: SourceArgs) -> Result<Sources> {
    let region = match (args.marker, args.heading) {
        (Some(marker), _) => Some(Region::Marker(marker)),
        (None, Some(heading)) => Some(Region::Heading(heading)),
        (None, None) => None,
    };

    let config = Config::load_or_default(config_path)?.with_overrides(Overrides {
        document: args.document,
        region,
        command: args.command,
    });
    config.validate()?;

    let command = config.command_line()?;
    let region = config.region.to_region()?;
    let document = Document::load(&config.document)?;

    Ok(Sources {
        config,
        command,
        document,
        region,
    })
}
