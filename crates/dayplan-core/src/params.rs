//! Parameter structures for scheduler operations.
//!
//! These are shared parameter structures usable across interfaces
//! (CLI today, others later) without framework-specific derives. The
//! CLI defines its own clap argument structs and converts them into
//! these types, keeping the core free of interface concerns:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params (serde only) ──▶ Scheduler
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{engine::PlacementStrategy, time::TimeOfDay};

/// Parameters for operations scoped to a single date.
///
/// Used for list_tasks, show_plan, lock_plan, and day_overview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Day {
    /// The date to operate on
    pub date: Date,
}

/// Parameters for registering a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    /// The date the task belongs to
    pub date: Date,
    /// Requested start time; tasks without one are placed greedily
    pub fixed_start: Option<TimeOfDay>,
    /// Duration in minutes; absent or zero becomes the 30-minute default
    pub duration_min: Option<u16>,
    /// Free-text description (required)
    pub text: String,
}

/// Parameters for marking a task done or undone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetDone {
    /// The ID of the task to update
    pub id: u64,
    /// New done state
    pub done: bool,
}

/// Parameters for declaring the day's availability window.
///
/// Replaces any previously declared window for the date outright.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetAvailability {
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Parameters for appending a busy interval to a date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddBusy {
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Parameters for generating a plan version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// The date to plan
    pub date: Date,
    /// Placement policy override; defaults to the scheduler's configured
    /// strategy
    #[serde(default)]
    pub strategy: Option<PlacementStrategy>,
}
