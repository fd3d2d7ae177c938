//! Plan and plan item model definitions.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// One immutable computed schedule version for a date.
///
/// Version numbers per date are strictly increasing starting at 1.
/// Once locked, no further version may be generated for that date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan row
    pub id: u64,

    /// The date this plan schedules
    pub date: Date,

    /// Version number within the date's lineage (1-based)
    pub version: u32,

    /// Whether regeneration is blocked for this date
    pub locked: bool,

    /// Timestamp when this version was generated (UTC)
    pub created_at: Timestamp,

    /// Scheduled items, sorted by start time (eagerly loaded)
    #[serde(default)]
    pub items: Vec<PlanItem>,
}

/// A scheduled slot within one plan version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    /// Unique identifier for the item
    pub id: u64,

    /// ID of the owning plan version
    pub plan_id: u64,

    /// ID of the scheduled task
    pub task_id: u64,

    /// Text of the scheduled task (joined in for display)
    pub task_text: String,

    pub start: TimeOfDay,
    pub end: TimeOfDay,
}
