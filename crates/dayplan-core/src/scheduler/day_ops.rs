//! Availability and busy interval operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{Availability, BusyBlock},
    params::{AddBusy, Day, SetAvailability},
};

impl Scheduler {
    /// Declares the availability window for a date, replacing any
    /// previous declaration.
    pub async fn set_availability(&self, params: &SetAvailability) -> Result<Availability> {
        let db_path = self.db_path.clone();
        let SetAvailability { date, start, end } = *params;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_availability(date, start, end)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Appends a busy interval to a date.
    pub async fn add_busy(&self, params: &AddBusy) -> Result<BusyBlock> {
        let db_path = self.db_path.clone();
        let AddBusy { date, start, end } = *params;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_busy(date, start, end)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the declared (or fallback) availability and the busy
    /// blocks for a date.
    pub async fn day_budget(&self, params: &Day) -> Result<(Availability, Vec<BusyBlock>)> {
        let db_path = self.db_path.clone();
        let date = params.date;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let avail = db
                .get_availability(date)?
                .unwrap_or_else(|| Availability::fallback(date));
            let busy = db.get_busy(date)?;
            Ok((avail, busy))
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
