//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in
//! [`models`]); this module adds newtype wrappers for collections and
//! operation results so the same data can be formatted differently
//! depending on context. All output is markdown, rendered rich or
//! plain by the CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TaskList, DayBudget)
//! - [`results`]: Operation result types (GenerateResult, LockResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{DayBudget, TaskList};
pub use datetime::LocalDateTime;
pub use results::{GenerateResult, LockResult};
pub use status::OperationStatus;
