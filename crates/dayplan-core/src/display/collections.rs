//! Collection wrapper types for list display.

use std::fmt;

use crate::models::{Availability, BusyBlock, Task};

/// Wrapper for a date's task list.
///
/// Renders one markdown list item per task and a friendly message for
/// an empty day.
pub struct TaskList(pub Vec<Task>);

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks for this date.");
        }

        for task in &self.0 {
            writeln!(f, "- {task}")?;
        }
        Ok(())
    }
}

/// Wrapper for a date's time budget: the availability window and the
/// declared busy intervals.
pub struct DayBudget {
    pub availability: Availability,
    pub busy: Vec<BusyBlock>,
}

impl fmt::Display for DayBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Available: {}", self.availability)?;
        if self.busy.is_empty() {
            writeln!(f, "- Busy: none")?;
        } else {
            let spans: Vec<String> = self.busy.iter().map(ToString::to_string).collect();
            writeln!(f, "- Busy: {}", spans.join(", "))?;
        }
        Ok(())
    }
}
