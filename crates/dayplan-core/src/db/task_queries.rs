//! Task CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Task, DEFAULT_TASK_MINUTES},
    time::TimeOfDay,
};

// SQL queries as const strings
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (date, fixed_start, duration_min, text, done, created_at) VALUES (?1, ?2, ?3, ?4, 0, ?5)";
const TASK_COLUMNS: &str = "id, date, fixed_start, duration_min, text, done, created_at";
const SELECT_TASK_SQL: &str =
    "SELECT id, date, fixed_start, duration_min, text, done, created_at FROM tasks WHERE id = ?1";
const UPDATE_TASK_DONE_SQL: &str = "UPDATE tasks SET done = ?1 WHERE id = ?2";

// Fixed-start tasks sort before unfixed ones, then by requested time,
// then by id. This is also the engine's delivery order.
const TASK_ORDER_CLAUSE: &str = "ORDER BY fixed_start IS NULL, fixed_start ASC, id ASC";

/// Builds a Task from a row selected with [`TASK_COLUMNS`].
pub(super) fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let date: Date = row.get::<_, String>(1)?.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
    })?;

    let fixed_start = row
        .get::<_, Option<String>>(2)?
        .map(|s| {
            s.parse::<TimeOfDay>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })
        })
        .transpose()?;

    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        date,
        fixed_start,
        duration_min: row.get::<_, i64>(3)? as u16,
        text: row.get(4)?,
        done: row.get(5)?,
        created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
    })
}

/// Queries a date's tasks in delivery order, optionally pending only.
pub(super) fn query_tasks(conn: &Connection, date: Date, pending_only: bool) -> Result<Vec<Task>> {
    let filter = if pending_only { " AND done = 0" } else { "" };
    let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE date = ?1{filter} {TASK_ORDER_CLAUSE}");

    let mut stmt = conn
        .prepare(&sql)
        .db_context("Failed to prepare task query")?;

    let tasks = stmt
        .query_map(params![date.to_string()], build_task_from_row)
        .db_context("Failed to query tasks")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch tasks");
    tasks
}

impl super::Database {
    /// Creates a new task for a date.
    ///
    /// An absent or zero duration becomes [`DEFAULT_TASK_MINUTES`];
    /// the engine never sees a non-positive duration from the store.
    pub fn add_task(
        &mut self,
        date: Date,
        fixed_start: Option<TimeOfDay>,
        duration_min: Option<u16>,
        text: &str,
    ) -> Result<Task> {
        if text.trim().is_empty() {
            return Err(SchedulerError::invalid_input(
                "text",
                "task description must not be empty",
            ));
        }

        let duration = match duration_min {
            Some(0) | None => DEFAULT_TASK_MINUTES,
            Some(d) => d,
        };

        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_TASK_SQL,
                params![
                    date.to_string(),
                    fixed_start.map(|t| t.to_string()),
                    i64::from(duration),
                    text,
                    &now_str
                ],
            )
            .db_context("Failed to insert task")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Task {
            id,
            date,
            fixed_start,
            duration_min: duration,
            text: text.into(),
            done: false,
            created_at: now,
        })
    }

    /// Lists all tasks for a date, done or not, in delivery order.
    pub fn get_tasks(&self, date: Date) -> Result<Vec<Task>> {
        query_tasks(&self.connection, date, false)
    }

    /// Lists the pending (not done) tasks for a date in delivery order.
    pub fn get_pending_tasks(&self, date: Date) -> Result<Vec<Task>> {
        query_tasks(&self.connection, date, true)
    }

    /// Sets the done flag on a task and returns the updated row.
    pub fn set_done(&mut self, id: u64, done: bool) -> Result<Task> {
        let rows_affected = self
            .connection
            .execute(UPDATE_TASK_DONE_SQL, params![done, id as i64])
            .db_context("Failed to update task")?;

        if rows_affected == 0 {
            return Err(SchedulerError::TaskNotFound { id });
        }

        self.connection
            .query_row(SELECT_TASK_SQL, params![id as i64], build_task_from_row)
            .optional()
            .db_context("Failed to query updated task")?
            .ok_or(SchedulerError::TaskNotFound { id })
    }
}
