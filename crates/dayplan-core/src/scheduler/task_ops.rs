//! Task operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::Task,
    params::{AddTask, Day, SetDone},
};

impl Scheduler {
    /// Registers a new task for a date. An absent or zero duration
    /// becomes the 30-minute default.
    pub async fn add_task(&self, params: &AddTask) -> Result<Task> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_task(
                params.date,
                params.fixed_start,
                params.duration_min,
                &params.text,
            )
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all tasks for a date, fixed-start tasks first.
    pub async fn list_tasks(&self, params: &Day) -> Result<Vec<Task>> {
        let db_path = self.db_path.clone();
        let date = params.date;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_tasks(date)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a task done or undone and returns the updated task.
    pub async fn set_done(&self, params: &SetDone) -> Result<Task> {
        let db_path = self.db_path.clone();
        let SetDone { id, done } = *params;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_done(id, done)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
