//! Task model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Duration assumed when a task is created without one (or with zero).
pub const DEFAULT_TASK_MINUTES: u16 = 30;

/// A task registered for a specific date.
///
/// The engine treats tasks as read-only input; only the done flag is
/// mutated afterwards, through the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// The date this task belongs to
    pub date: Date,

    /// Requested wall-clock start time, if the task is fixed
    pub fixed_start: Option<TimeOfDay>,

    /// Estimated duration in minutes (always positive)
    pub duration_min: u16,

    /// Free-text description of the task
    pub text: String,

    /// Whether the task has been completed
    pub done: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,
}
