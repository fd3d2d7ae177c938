use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DayCommands, PlanCommands, StrategyArg, TaskCommands};

/// Main command-line interface for the Dayplan day planner
///
/// Dayplan packs the tasks of a single day into its free time. Declare
/// when you are available, block out meetings, capture tasks, and
/// generate a timed plan. Plans are versioned per date and can be
/// locked once you commit to one.
#[derive(Parser)]
#[command(version, about, name = "dp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/dayplan/dayplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Placement strategy used when generating plans
    #[arg(long, global = true, value_enum)]
    pub strategy: Option<StrategyArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Dayplan CLI
///
/// The CLI is organized into three main command categories:
/// - `task`: Capture tasks and mark them done
/// - `day`: Declare availability and busy time for a date
/// - `plan`: Generate, show, and lock the day's plan
///
/// Running `dp` with no command lists today's tasks.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage a day's time budget
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Generate and manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
