//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dephealth - Workspace dependency health scanner.
#[derive(Debug, Parser)]
#[command(name = "dephealth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to repository root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Cache TTL (e.g. "90s", "5m"; overrides config file)
    #[arg(long, global = true)]
    pub ttl: Option<String>,

    /// Ecosystems to skip (comma-separated)
    #[arg(long, global = true, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the workspace and print the full report (default)
    Scan(ScanArgs),

    /// Print a one-line health status
    Status(StatusArgs),

    /// Print install commands for missing packages
    Commands(CommandsArgs),

    /// List supported ecosystems and which are present
    Ecosystems(EcosystemsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Emit the report as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {}

/// Arguments for the `commands` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommandsArgs {}

/// Arguments for the `ecosystems` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EcosystemsArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
