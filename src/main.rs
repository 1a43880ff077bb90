//! CLI entry point for appdocs.
//!
//! # Doc Audit
//! - audited: 2026-10-19
//! - docs: README.md
//! - ignore: false

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = cmd::Output {
        quiet: cli.quiet || appdocs::ui::is_quiet(),
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Check(args) => cmd::check::cmd_check(&cli.config, args, output),
        Commands::List { source, json, args } => {
            cmd::list::cmd_list(&cli.config, args, source, json)
        }
        Commands::Render(args) => cmd::list::cmd_render(&cli.config, args),
        Commands::Version => cmd::util::cmd_version(cli.verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
    }
}
