//! Handler operations that return formatted wrapper types for the Scheduler.

use super::Scheduler;
use crate::{
    display::{DayBudget, GenerateResult, LockResult, TaskList},
    error::Result,
    models::Plan,
    params::{Day, GeneratePlan},
};

impl Scheduler {
    /// Handle listing a date's tasks for display.
    ///
    /// Tasks come back in placement order: fixed tasks first by start
    /// time, then unfixed tasks by creation order.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use dayplan_core::{params::Day, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let params = Day { date: jiff::civil::date(2026, 3, 14) };
    /// let tasks = scheduler.list_tasks_display(&params).await?;
    /// println!("{tasks}");
    /// # Result::<(), dayplan_core::SchedulerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_tasks_display(&self, params: &Day) -> Result<TaskList> {
        let tasks = self.list_tasks(params).await?;
        Ok(TaskList(tasks))
    }

    /// Handle showing a date's time budget: the availability window
    /// (the default window when none was set) and its busy blocks.
    pub async fn day_budget_display(&self, params: &Day) -> Result<DayBudget> {
        let (availability, busy) = self.day_budget(params).await?;
        Ok(DayBudget { availability, busy })
    }

    /// Handle generating a plan, returning the stored plan together
    /// with the ids of tasks that did not fit.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use dayplan_core::{params::GeneratePlan, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let params = GeneratePlan {
    ///     date: jiff::civil::date(2026, 3, 14),
    ///     strategy: None,
    /// };
    /// let result = scheduler.generate_plan_result(&params).await?;
    /// println!("{result}");
    /// # Result::<(), dayplan_core::SchedulerError>::Ok(())
    /// # };
    /// ```
    pub async fn generate_plan_result(&self, params: &GeneratePlan) -> Result<GenerateResult> {
        let (plan, unscheduled) = self.generate_plan(params).await?;
        Ok(GenerateResult::new(plan, unscheduled))
    }

    /// Handle showing the latest plan version for a date, or None when
    /// the date has no plan yet.
    pub async fn show_latest_plan(&self, params: &Day) -> Result<Option<Plan>> {
        self.show_plan(params).await
    }

    /// Handle locking the latest plan version for a date with a
    /// confirmation message.
    pub async fn lock_plan_result(&self, params: &Day) -> Result<LockResult> {
        let plan = self.lock_plan(params).await?;
        Ok(LockResult { plan })
    }
}
