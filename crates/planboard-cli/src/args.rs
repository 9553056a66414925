use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BoardCommands, SectionCommands, TaskCommands};

/// Ordered sections and tasks from the command line
///
/// Each user owns a list of sections, and each section an ordered list of
/// tasks. Positions stay gapless through every create, delete, move and
/// reorder. Running without a command shows your board.
#[derive(Parser)]
#[command(version, about, name = "planboard")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/planboard/planboard.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// ID of the user whose board to operate on
    #[arg(long, global = true, env = "PLANBOARD_USER")]
    pub user: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage sections
    #[command(alias = "s")]
    Section {
        #[command(subcommand)]
        command: SectionCommands,
    },
    /// Manage tasks within sections
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show or rearrange the whole board
    #[command(alias = "b")]
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
}
