//! Configuration management for appdocs.
//!
//! Configuration lives in the YAML frontmatter of a markdown file, by
//! default `.appdocs.md` in the working directory:
//!
//! ```markdown
//! ---
//! command: [cargo, run, --, --apps]
//! document: README.md
//! region:
//!   marker: apps
//! label: verify installable applications
//! ---
//!
//! Notes for humans can go here.
//! ```
//!
//! # Doc Audit
//! - audited: 2026-10-19
//! - docs: README.md
//! - ignore: false

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Region;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Program and arguments that print the installable applications
    #[serde(default = "default_command")]
    pub command: Vec<String>,
    /// Markdown file documenting the applications
    #[serde(default = "default_document")]
    pub document: PathBuf,
    #[serde(default)]
    pub region: RegionConfig,
    /// Name the check reports itself under
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: default_command(),
            document: default_document(),
            region: RegionConfig::default(),
            label: default_label(),
        }
    }
}

impl Config {
    /// Load `.appdocs.md` from the working directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Path::new(crate::paths::CONFIG_FILE))
    }

    /// Load the config at `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides. `None` and empty values keep the
    /// configured setting.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(document) = overrides.document {
            self.document = document;
        }
        if let Some(region) = overrides.region {
            self.region = match region {
                Region::Marker(marker) => RegionConfig {
                    marker: Some(marker),
                    heading: None,
                },
                Region::Heading(heading) => RegionConfig {
                    marker: None,
                    heading: Some(heading),
                },
            };
        }
        if !overrides.command.is_empty() {
            self.command = overrides.command;
        }
        self
    }
}

/// Settings given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub document: Option<PathBuf>,
    pub region: Option<Region>,
    pub command: Vec<String>,
}

/// Split `content` into YAML frontmatter (between `---` fences) and body.
fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
