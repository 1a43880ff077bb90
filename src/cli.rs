//! CLI argument definitions for appdocs.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appdocs")]
#[command(version)]
#[command(
    about = "Check that documented applications match the installable ones",
    long_about = None
)]
#[command(
    after_help = "GETTING STARTED:\n    appdocs check              Run the check with .appdocs.md or the defaults\n    appdocs render             Print the list the documentation should contain\n\n    The default command is 'cargo run -- --apps' and the default region is\n    the <a type=\"apps\"> ... </a> block of README.md."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print what the check is doing
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, global = true, value_name = "PATH", default_value = appdocs::paths::CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that the documented applications match the installable ones
    Check(SourceArgs),
    /// Print one of the two application lists
    List {
        /// Which list to print
        #[arg(value_enum)]
        source: ListSource,
        /// Print a JSON array instead of 'name url' lines
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        args: SourceArgs,
    },
    /// Print the markdown list the documentation should contain
    Render(SourceArgs),
    /// Show version information (with --verbose: build details)
    Version,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

/// Where the two lists come from. Overrides the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Markdown file documenting the applications
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,
    /// Use the region between <a type="NAME"> and </a>
    #[arg(long, value_name = "NAME", conflicts_with = "heading")]
    pub marker: Option<String>,
    /// Use the section below the heading with this text
    #[arg(long, value_name = "TEXT")]
    pub heading: Option<String>,
    /// Command printing the installable applications (after --)
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListSource {
    /// Applications printed by the command
    Installable,
    /// Applications listed in the document region
    Documented,
}
