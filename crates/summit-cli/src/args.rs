use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GoalCommands, SuperCommands};

/// Summit: goals, and super goals built from them
///
/// A super goal tracks progress over a set of child goals. The set is either
/// chosen by hand (static) or derived from a rule over difficulty, tags,
/// status and focus (dynamic). Summit runs as a command-line tool or as an
/// MCP server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "summit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/summit/summit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Summit CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage super goals
    #[command(alias = "s")]
    Super {
        #[command(subcommand)]
        command: SuperCommands,
    },
    /// Start the MCP server
    Serve,
}
