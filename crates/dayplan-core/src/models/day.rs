//! Availability window and busy interval models.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// The daily span during which tasks may be scheduled.
///
/// At most one exists per date; replacing it is a whole-value
/// overwrite, never a merge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Availability {
    /// The window assumed when the user has not declared one: 09:00 to
    /// 21:00.
    pub fn fallback(date: Date) -> Self {
        Self {
            date,
            start: TimeOfDay::from_minutes_unchecked(9 * 60),
            end: TimeOfDay::from_minutes_unchecked(21 * 60),
        }
    }
}

/// An occupied sub-span of the day, unavailable for placement.
///
/// Busy blocks are append-only and may overlap each other; the engine
/// merges them before computing free windows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusyBlock {
    /// Unique identifier for the busy block
    pub id: u64,

    /// The date this block belongs to
    pub date: Date,

    pub start: TimeOfDay,
    pub end: TimeOfDay,

    /// Timestamp when the block was declared (UTC)
    pub created_at: Timestamp,
}
