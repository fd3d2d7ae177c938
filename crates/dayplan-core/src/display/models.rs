//! Display implementations for domain models.
//!
//! All model formatting lives here, separated from the model
//! definitions. Output is markdown: task lines render as list items
//! with a status icon, plans render with a header, metadata, and the
//! ordered schedule.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    engine::PlacementStrategy,
    models::{Availability, BusyBlock, Plan, PlanItem, Task},
};

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    /// Status icon matching the done flag.
    pub fn icon(&self) -> &'static str {
        if self.done {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "--:--" marks tasks the planner is free to place anywhere.
        match self.fixed_start {
            Some(start) => write!(f, "{} `{}` {} {}", self.icon(), self.id, start, self.text),
            None => write!(f, "{} `{}` --:-- {}", self.icon(), self.id, self.text),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl fmt::Display for BusyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} `{}` {}",
            self.start, self.end, self.task_id, self.task_text
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for {} (v{})", self.date, self.version)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Locked: {}", if self.locked { "yes" } else { "no" })?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "The plan is empty; no tasks were placed.")?;
        } else {
            for item in &self.items {
                writeln!(f, "- {item}")?;
            }
        }

        Ok(())
    }
}
