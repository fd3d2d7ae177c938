//! Builder for creating and configuring Scheduler instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    engine::PlacementStrategy,
    error::{Result, SchedulerError},
};

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone, Default)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    strategy: PlacementStrategy,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/dayplan/dayplan.db` or
    /// `~/.local/share/dayplan/dayplan.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the placement strategy used for plan generation when a
    /// request does not override it. Defaults to first-fit.
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds the configured scheduler instance.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::FileSystem` if the database path is invalid
    /// Returns `SchedulerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Scheduler> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SchedulerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), SchedulerError>(())
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Scheduler::new(db_path, self.strategy))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("dayplan")
            .place_data_file("dayplan.db")
            .map_err(|e| SchedulerError::XdgDirectory(e.to_string()))
    }
}
