//! Core library for the Dayplan day-planner application.
//!
//! This crate provides the business logic for a single-day planner:
//! task capture, per-day time budgets, and versioned plan generation
//! that packs pending tasks into the free windows of a day.
//!
//! # Architecture
//!
//! - **Engine** ([`engine`]): pure interval algebra and placement
//!   strategies, independent of storage
//! - **Database** ([`db`]): SQLite persistence for tasks, budgets, and
//!   plan versions
//! - **Scheduler** ([`scheduler`]): async facade tying the two
//!   together, one operation per request
//! - **Display** ([`display`]): markdown formatting wrappers consumed
//!   by the CLI's terminal renderer
//!
//! # Quick Start
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
//!         text: "Review the quarterly numbers".to_string(),
//!     })
//!     .await?;
//!
//! let (plan, unscheduled) = scheduler
//!     .generate_plan(&GeneratePlan { date: today, strategy: None })
//!     .await?;
//! println!("{plan}");
//! assert!(unscheduled.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod time;

// Re-export commonly used types
pub use db::Database;
pub use display::{DayBudget, GenerateResult, LockResult, OperationStatus, TaskList};
pub use engine::PlacementStrategy;
pub use error::{Result, SchedulerError};
pub use models::{Availability, BusyBlock, Plan, PlanItem, Task};
pub use params::{AddBusy, AddTask, Day, GeneratePlan, SetAvailability, SetDone};
pub use scheduler::{Scheduler, SchedulerBuilder};
pub use time::TimeOfDay;
