//! Data models for tasks, day time-budgets, and plans.
//!
//! These are the core domain models of the day planner. Display
//! implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation logic.
//!
//! A [`Task`] is what the user registers; [`Availability`] and
//! [`BusyBlock`] describe the day's time budget; a [`Plan`] is one
//! immutable computed schedule version for a date, made of
//! [`PlanItem`]s. Regenerating a plan creates a new version rather
//! than mutating the previous one.

pub mod day;
pub mod plan;
pub mod task;


// Re-export all public types at the models level
pub use day::{Availability, BusyBlock};
pub use plan::{Plan, PlanItem};
pub use task::{Task, DEFAULT_TASK_MINUTES};
