//! Plan operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::Plan,
    params::{Day, GeneratePlan},
};

impl Scheduler {
    /// Generates the next plan version for a date.
    ///
    /// Returns the stored plan and the ids of tasks that did not fit.
    /// Fails with `PlanLocked` when the date's plan is locked; an
    /// unplaceable task is never an error.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<(Plan, Vec<u64>)> {
        let db_path = self.db_path.clone();
        let date = params.date;
        let strategy = params.strategy.unwrap_or(self.strategy);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.generate_plan(date, strategy)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves the latest plan version for a date, if one exists.
    pub async fn show_plan(&self, params: &Day) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let date = params.date;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_latest_plan(date)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Locks the date's latest plan version, blocking regeneration.
    /// Fails with `PlanNotFound` when no plan exists for the date.
    pub async fn lock_plan(&self, params: &Day) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let date = params.date;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.lock_plan(date)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
