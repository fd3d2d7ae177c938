//! The day plan engine.
//!
//! Turns a snapshot of pending tasks, one availability window, and a
//! set of busy intervals into a conflict-free, ordered placement. The
//! engine is pure: it never touches the database and knows nothing
//! about task text, dates, or identity. Persistence and versioning
//! live in [`crate::db`].
//!
//! Two placement policies exist for tasks without a fixed start time,
//! selected via [`PlacementStrategy`]:
//!
//! - [`PlacementStrategy::FirstFit`] (default): fixed tasks are placed
//!   first, then each remaining task goes into the earliest free
//!   window long enough to hold it.
//! - [`PlacementStrategy::CursorProbe`]: tasks are processed in their
//!   delivery order; unfixed tasks are probed forward from a moving
//!   cursor in five-minute steps against the occupied-interval list.
//!
//! In both policies a fixed task is placed at its requested time or
//! not at all, and an unplaceable task is reported as data in the
//! unscheduled list, never as an error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SchedulerError},
    time::TimeOfDay,
};

pub mod intervals;
pub mod placement;


pub use intervals::{free_windows, merge_intervals, Interval, MIN_WINDOW_MIN};
pub use placement::{ProbeCursor, WindowSet, PROBE_QUANTUM_MIN};

/// Placement policy for tasks without a fixed start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementStrategy {
    /// Earliest free window of sufficient length, placed at its start.
    #[default]
    FirstFit,

    /// Stepped probe from a moving cursor against the busy list.
    CursorProbe,
}

impl PlacementStrategy {
    /// Convert to the configuration string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStrategy::FirstFit => "first-fit",
            PlacementStrategy::CursorProbe => "cursor-probe",
        }
    }
}

impl FromStr for PlacementStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-fit" | "firstfit" => Ok(PlacementStrategy::FirstFit),
            "cursor-probe" | "cursorprobe" | "cursor" => Ok(PlacementStrategy::CursorProbe),
            _ => Err(format!("Invalid placement strategy: {s}")),
        }
    }
}

/// One task as seen by the engine.
#[derive(Debug, Clone, Copy)]
pub struct TaskRequest {
    /// Opaque, stable task identity.
    pub id: u64,
    /// Requested start time, if the task is fixed.
    pub fixed_start: Option<TimeOfDay>,
    /// Positive duration in minutes.
    pub duration_min: u16,
}

/// Computed slot for a task within one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub task_id: u64,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Result of one schedule computation.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOutcome {
    /// Successful placements, sorted by start time ascending.
    pub placements: Vec<Placement>,
    /// Ids of tasks that could not be placed, in delivery order.
    pub unscheduled: Vec<u64>,
}

/// Computes a schedule for one day.
///
/// `tasks` must arrive in the store's delivery order (fixed-start
/// tasks first, then by id). `busy` intervals may overlap; they are
/// merged internally where the policy calls for it.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidInput`] for an empty availability
/// window, a busy interval with `start >= end`, or a task with zero
/// duration. Infeasible tasks are not errors.
pub fn build_schedule(
    tasks: &[TaskRequest],
    avail: Interval,
    busy: &[Interval],
    strategy: PlacementStrategy,
) -> Result<ScheduleOutcome> {
    validate_inputs(tasks, avail, busy)?;

    let mut outcome = match strategy {
        PlacementStrategy::FirstFit => first_fit_schedule(tasks, avail, busy),
        PlacementStrategy::CursorProbe => cursor_probe_schedule(tasks, avail, busy),
    };

    outcome
        .placements
        .sort_by_key(|p| (p.start, p.task_id));
    Ok(outcome)
}

fn validate_inputs(tasks: &[TaskRequest], avail: Interval, busy: &[Interval]) -> Result<()> {
    if avail.is_empty() {
        return Err(SchedulerError::invalid_input(
            "availability",
            format!("window start {} must be before end {}", avail.start, avail.end),
        ));
    }
    for b in busy {
        if b.is_empty() {
            return Err(SchedulerError::invalid_input(
                "busy",
                format!("interval start {} must be before end {}", b.start, b.end),
            ));
        }
    }
    for t in tasks {
        if t.duration_min == 0 {
            return Err(SchedulerError::invalid_input(
                "duration_min",
                format!("task {} has zero duration", t.id),
            ));
        }
    }
    Ok(())
}

/// Fixed tasks first against carved free windows, then first-fit for
/// the rest.
fn first_fit_schedule(tasks: &[TaskRequest], avail: Interval, busy: &[Interval]) -> ScheduleOutcome {
    let mut windows = WindowSet::new(free_windows(avail, busy, MIN_WINDOW_MIN), MIN_WINDOW_MIN);
    let mut outcome = ScheduleOutcome::default();

    for t in tasks {
        let Some(start) = t.fixed_start else { continue };
        match windows.place_fixed(start.minutes(), t.duration_min) {
            Some(slot) => outcome.placements.push(placement(t.id, slot)),
            None => outcome.unscheduled.push(t.id),
        }
    }

    for t in tasks.iter().filter(|t| t.fixed_start.is_none()) {
        match windows.place_first_fit(t.duration_min) {
            Some(slot) => outcome.placements.push(placement(t.id, slot)),
            None => outcome.unscheduled.push(t.id),
        }
    }

    // Report unscheduled ids in the original delivery order.
    outcome
        .unscheduled
        .sort_by_key(|id| tasks.iter().position(|t| t.id == *id));
    outcome
}

/// Single pass in delivery order; unfixed tasks probe forward from a
/// moving cursor. Placed slots join the occupied list so the
/// non-overlap invariant holds across fixed and probed placements.
fn cursor_probe_schedule(
    tasks: &[TaskRequest],
    avail: Interval,
    busy: &[Interval],
) -> ScheduleOutcome {
    let mut occupied = busy.to_vec();
    occupied.sort_by_key(|iv| (iv.start, iv.end));

    let mut cursor = ProbeCursor::new(avail);
    let mut outcome = ScheduleOutcome::default();

    for t in tasks {
        let slot = match t.fixed_start {
            Some(start) => cursor.check_fixed(start.minutes(), t.duration_min, &occupied),
            None => cursor.place(t.duration_min, &occupied),
        };
        match slot {
            Some(slot) => {
                placement::insert_sorted(&mut occupied, slot);
                outcome.placements.push(placement(t.id, slot));
            }
            None => outcome.unscheduled.push(t.id),
        }
    }
    outcome
}

fn placement(task_id: u64, slot: Interval) -> Placement {
    // Slots are carved from the availability window, so both bounds
    // are valid times of day.
    Placement {
        task_id,
        start: TimeOfDay::from_minutes_unchecked(slot.start),
        end: TimeOfDay::from_minutes_unchecked(slot.end),
    }
}
