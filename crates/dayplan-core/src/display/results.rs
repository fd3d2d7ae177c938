//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Plan;

/// Wrapper for the outcome of a plan generation.
///
/// Shows the stored plan and, when some tasks did not fit, their ids.
/// Unscheduled tasks are data, not an error, and the ids keep the
/// store's delivery order.
pub struct GenerateResult {
    pub plan: Plan,
    pub unscheduled: Vec<u64>,
}

impl GenerateResult {
    pub fn new(plan: Plan, unscheduled: Vec<u64>) -> Self {
        Self { plan, unscheduled }
    }
}

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated plan version {} for {}",
            self.plan.version, self.plan.date
        )?;
        writeln!(f)?;
        write!(f, "{}", self.plan)?;

        if !self.unscheduled.is_empty() {
            let ids: Vec<String> = self.unscheduled.iter().map(ToString::to_string).collect();
            writeln!(f)?;
            writeln!(f, "Did not fit (task ids): {}", ids.join(", "))?;
        }
        Ok(())
    }
}

/// Wrapper for the outcome of locking a plan.
pub struct LockResult {
    pub plan: Plan,
}

impl fmt::Display for LockResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Locked plan version {} for {}; regeneration is blocked.",
            self.plan.version, self.plan.date
        )
    }
}
