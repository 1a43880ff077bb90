//! Validation of configuration values.

use anyhow::Result;

use super::{Config, RegionConfig};
use crate::document::Region;
use crate::runner::CommandLine;

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.command_line()?;
        self.region.to_region()?;
        if self.label.trim().is_empty() {
            anyhow::bail!("label must not be empty");
        }
        Ok(())
    }

    /// The configured command as a runnable command line.
    pub fn command_line(&self) -> Result<CommandLine> {
        match CommandLine::from_parts(&self.command) {
            Some(command) if !command.program.trim().is_empty() => Ok(command),
            _ => anyhow::bail!("command must name a program to run"),
        }
    }
}

impl RegionConfig {
    /// Convert to a document region, rejecting ambiguous configurations
    pub fn to_region(&self) -> Result<Region> {
        match (&self.marker, &self.heading) {
            (Some(marker), None) if !marker.trim().is_empty() => {
                Ok(Region::Marker(marker.clone()))
            }
            (None, Some(heading)) if !heading.trim().is_empty() => {
                Ok(Region::Heading(heading.clone()))
            }
            (Some(_), Some(_)) => {
                anyhow::bail!("region.marker and region.heading are mutually exclusive")
            }
            _ => anyhow::bail!("region needs a non-empty marker or heading"),
        }
    }
}
