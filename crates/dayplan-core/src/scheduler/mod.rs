//! High-level scheduler API for the day planner.
//!
//! The [`Scheduler`] is the central coordinator between interface
//! layers and the database. Each operation opens a database connection
//! on a blocking thread, so the facade itself stays cheap to clone
//! around async code.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers.rs)  │───▶│ (task_ops,      │───▶│   (via db/)     │
//! │                 │    │  day_ops,       │    │  + engine       │
//! │                 │    │  plan_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Formatted output      Business logic        Data + placement
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use dayplan_core::{SchedulerBuilder, params::{AddTask, GeneratePlan}};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("dayplan.db"))
//!     .build()
//!     .await?;
//!
//! let today = date(2026, 8, 24);
//! scheduler
//!     .add_task(&AddTask {
//!         date: today,
//!         fixed_start: None,
//!         duration_min: Some(45),
//!         text: "Write the weekly report".to_string(),
//!     })
//!     .await?;
//!
//! let (plan, unscheduled) = scheduler
//!     .generate_plan(&GeneratePlan { date: today, strategy: None })
//!     .await?;
//! println!("version {} with {} items", plan.version, plan.items.len());
//! assert!(unscheduled.is_empty());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::engine::PlacementStrategy;

// Module declarations
pub mod builder;
pub mod day_ops;
pub mod handlers;
pub mod plan_ops;
pub mod task_ops;


// Re-export the main types
pub use builder::SchedulerBuilder;

/// Main scheduler interface for tasks, day time-budgets, and plans.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) strategy: PlacementStrategy,
}

impl Scheduler {
    /// Creates a new scheduler with the given database path and
    /// default placement strategy.
    pub(crate) fn new(db_path: PathBuf, strategy: PlacementStrategy) -> Self {
        Self { db_path, strategy }
    }

    /// The placement strategy used when a generation request does not
    /// override it.
    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }
}
