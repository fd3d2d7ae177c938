//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API with
//! the parameter wrapper pattern: each command gets a clap argument
//! struct that converts into the core parameter type, keeping the core
//! free of CLI framework concerns.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```
//!
//! Dates are optional everywhere and default to today, so the common
//! case (`dp task add "Write report"`) needs no flags at all.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use dayplan_core::{
    params::{AddBusy, AddTask, Day, GeneratePlan, SetAvailability, SetDone},
    time, OperationStatus, PlacementStrategy, Scheduler, SchedulerError, TimeOfDay,
};
use jiff::civil::Date;

use crate::renderer::TerminalRenderer;

/// Resolves an optional date argument, defaulting to today.
fn resolve_date(date: Option<Date>) -> Date {
    date.unwrap_or_else(|| jiff::Zoned::now().date())
}

/// A `HH:MM-HH:MM` span argument.
///
/// Parsed by clap through `FromStr`; the core validates that the start
/// precedes the end.
#[derive(Debug, Clone, Copy)]
pub struct TimeSpan {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl FromStr for TimeSpan {
    type Err = SchedulerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (start, end) = time::parse_span(s)?;
        Ok(Self { start, end })
    }
}

/// Command-line argument representation of the placement strategy
///
/// Used with the global `--strategy` flag and with `plan generate`.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Place each task in the earliest gap that fits
    FirstFit,
    /// Probe forward from a cursor that never moves backwards
    CursorProbe,
}

impl From<StrategyArg> for PlacementStrategy {
    fn from(val: StrategyArg) -> Self {
        match val {
            StrategyArg::FirstFit => PlacementStrategy::FirstFit,
            StrategyArg::CursorProbe => PlacementStrategy::CursorProbe,
        }
    }
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Add a new task to a date
#[derive(Args)]
pub struct AddTaskArgs {
    /// Description of the task
    pub text: String,
    /// Date the task belongs to (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long)]
    pub date: Option<Date>,
    /// Fixed start time (HH:MM); without it the task is placed greedily
    #[arg(long)]
    pub at: Option<TimeOfDay>,
    /// Duration in minutes, defaults to 30
    #[arg(long)]
    pub duration: Option<u16>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            date: resolve_date(val.date),
            fixed_start: val.at,
            duration_min: val.duration,
            text: val.text,
        }
    }
}

/// Arguments for commands scoped to a single date
#[derive(Args)]
pub struct DayArgs {
    /// Date to operate on (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long)]
    pub date: Option<Date>,
}

impl From<DayArgs> for Day {
    fn from(val: DayArgs) -> Self {
        Day {
            date: resolve_date(val.date),
        }
    }
}

/// Arguments identifying a single task
#[derive(Args)]
pub struct TaskIdArgs {
    /// ID of the task
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List a date's tasks
    #[command(aliases = ["l", "ls"])]
    List(DayArgs),
    /// Mark a task as done
    #[command(alias = "d")]
    Done(TaskIdArgs),
    /// Mark a task as not done
    #[command(alias = "u")]
    Undo(TaskIdArgs),
}

/// Declare the availability window for a date
///
/// Replaces any previously declared window. Without a declared window
/// a date falls back to 09:00-21:00.
#[derive(Args)]
pub struct AvailabilityArgs {
    /// Availability window as HH:MM-HH:MM
    pub span: TimeSpan,
    /// Date to declare for (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long)]
    pub date: Option<Date>,
}

impl From<AvailabilityArgs> for SetAvailability {
    fn from(val: AvailabilityArgs) -> Self {
        SetAvailability {
            date: resolve_date(val.date),
            start: val.span.start,
            end: val.span.end,
        }
    }
}

/// Block out a busy interval on a date
///
/// Busy intervals may overlap each other; they are merged when the
/// plan is generated.
#[derive(Args)]
pub struct BusyArgs {
    /// Busy interval as HH:MM-HH:MM
    pub span: TimeSpan,
    /// Date to block out (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long)]
    pub date: Option<Date>,
}

impl From<BusyArgs> for AddBusy {
    fn from(val: BusyArgs) -> Self {
        AddBusy {
            date: resolve_date(val.date),
            start: val.span.start,
            end: val.span.end,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Declare the availability window
    #[command(alias = "a")]
    Availability(AvailabilityArgs),
    /// Block out a busy interval
    #[command(alias = "b")]
    Busy(BusyArgs),
    /// Show the date's time budget
    #[command(alias = "s")]
    Show(DayArgs),
}

/// Generate the next plan version for a date
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Date to plan (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long)]
    pub date: Option<Date>,
    /// Placement strategy for this generation only
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

impl From<GeneratePlanArgs> for GeneratePlan {
    fn from(val: GeneratePlanArgs) -> Self {
        GeneratePlan {
            date: resolve_date(val.date),
            strategy: val.strategy.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new plan version
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Show the latest plan
    #[command(alias = "s")]
    Show(DayArgs),
    /// Lock the latest plan, blocking regeneration
    #[command(alias = "l")]
    Lock(DayArgs),
}

// ============================================================================
// Command handlers
// ============================================================================

/// Command dispatcher holding the scheduler and the output renderer.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_task_command(self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let params = args.into();
                let task = self
                    .scheduler
                    .add_task(&params)
                    .await
                    .context("Failed to add task")?;
                self.renderer
                    .render(&format!("# Task Created\n\n- {task}\n"))
            }
            TaskCommands::List(args) => self.list_tasks(&args.into()).await,
            TaskCommands::Done(args) => self.set_done(args.id, true).await,
            TaskCommands::Undo(args) => self.set_done(args.id, false).await,
        }
    }

    pub async fn handle_day_command(self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Availability(args) => {
                let params = args.into();
                let avail = self
                    .scheduler
                    .set_availability(&params)
                    .await
                    .context("Failed to set availability")?;
                let status = OperationStatus::success(format!(
                    "Availability for {} set to {avail}",
                    avail.date
                ));
                self.renderer.render(&status.to_string())
            }
            DayCommands::Busy(args) => {
                let params = args.into();
                let block = self
                    .scheduler
                    .add_busy(&params)
                    .await
                    .context("Failed to add busy block")?;
                let status = OperationStatus::success(format!(
                    "Blocked out {block} on {}",
                    block.date
                ));
                self.renderer.render(&status.to_string())
            }
            DayCommands::Show(args) => {
                let params: Day = args.into();
                let budget = self
                    .scheduler
                    .day_budget_display(&params)
                    .await
                    .context("Failed to load day budget")?;
                self.renderer
                    .render(&format!("# Day {}\n\n{budget}", params.date))
            }
        }
    }

    pub async fn handle_plan_command(self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let params = args.into();
                let result = self
                    .scheduler
                    .generate_plan_result(&params)
                    .await
                    .context("Failed to generate plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Show(args) => {
                let params: Day = args.into();
                let plan = self
                    .scheduler
                    .show_latest_plan(&params)
                    .await
                    .context("Failed to load plan")?;
                match plan {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.renderer.render(&format!(
                        "No plan exists for {}. Run `dp plan generate` first.\n",
                        params.date
                    )),
                }
            }
            PlanCommands::Lock(args) => {
                let params = args.into();
                let result = self
                    .scheduler
                    .lock_plan_result(&params)
                    .await
                    .context("Failed to lock plan")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    /// Lists a date's tasks. Also the bare-invocation default.
    pub async fn list_tasks(self, params: &Day) -> Result<()> {
        let tasks = self
            .scheduler
            .list_tasks_display(params)
            .await
            .context("Failed to list tasks")?;
        self.renderer
            .render(&format!("# Tasks for {}\n\n{tasks}", params.date))
    }

    async fn set_done(self, id: u64, done: bool) -> Result<()> {
        let task = self
            .scheduler
            .set_done(&SetDone { id, done })
            .await
            .context("Failed to update task")?;
        let verb = if done { "done" } else { "not done" };
        let status = OperationStatus::success(format!("Marked task {} as {verb}", task.id));
        self.renderer.render(&status.to_string())
    }
}
