//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! testport commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `generate`: Generate TypeScript test files from Python dialect tests
//! - `stats`: Print per-dialect portability statistics
//! - `init`: Initialize testport configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Origin Python test directory (overrides config file)
    #[arg(long)]
    pub origin_root: Option<PathBuf>,

    /// Output directory for generated test files (overrides config file)
    #[arg(long)]
    pub out_root: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate only this dialect
    #[arg(long)]
    pub dialect: Option<String>,

    /// Print generated files to stdout instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Restrict statistics to this dialect
    #[arg(long)]
    pub dialect: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate TypeScript test files from Python dialect tests
    Generate(GenerateCommand),
    /// Print per-dialect counts of portable vs needs-manual-port cases
    Stats(StatsCommand),
    /// Initialize a new .testportrc.json configuration file
    Init,
}
