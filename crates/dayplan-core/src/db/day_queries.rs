//! Availability and busy interval queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Availability, BusyBlock},
    time::TimeOfDay,
};

// Availability is replaced whole per date; an explicit upsert rather
// than insert-then-ignore-conflict.
const UPSERT_AVAILABILITY_SQL: &str = "INSERT INTO availability (date, start_time, end_time) VALUES (?1, ?2, ?3) ON CONFLICT(date) DO UPDATE SET start_time = excluded.start_time, end_time = excluded.end_time";
const SELECT_AVAILABILITY_SQL: &str =
    "SELECT date, start_time, end_time FROM availability WHERE date = ?1";
const INSERT_BUSY_SQL: &str = "INSERT INTO busy_blocks (date, start_time, end_time, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_BUSY_SQL: &str = "SELECT id, date, start_time, end_time, created_at FROM busy_blocks WHERE date = ?1 ORDER BY start_time ASC, id ASC";

fn parse_time_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<TimeOfDay> {
    row.get::<_, String>(idx)?.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

fn parse_date_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })
}

fn validate_span(field: &str, start: TimeOfDay, end: TimeOfDay) -> Result<()> {
    if start >= end {
        return Err(SchedulerError::invalid_input(
            field,
            format!("start {start} must be before end {end}"),
        ));
    }
    Ok(())
}

/// Queries a date's availability window, if declared.
pub(super) fn query_availability(conn: &Connection, date: Date) -> Result<Option<Availability>> {
    conn.query_row(SELECT_AVAILABILITY_SQL, params![date.to_string()], |row| {
        Ok(Availability {
            date: parse_date_column(row, 0)?,
            start: parse_time_column(row, 1)?,
            end: parse_time_column(row, 2)?,
        })
    })
    .optional()
    .db_context("Failed to query availability")
}

/// Queries a date's busy blocks sorted by start time.
pub(super) fn query_busy(conn: &Connection, date: Date) -> Result<Vec<BusyBlock>> {
    let mut stmt = conn
        .prepare(SELECT_BUSY_SQL)
        .db_context("Failed to prepare busy query")?;

    let blocks = stmt.query_map(params![date.to_string()], |row| {
        Ok(BusyBlock {
            id: row.get::<_, i64>(0)? as u64,
            date: parse_date_column(row, 1)?,
            start: parse_time_column(row, 2)?,
            end: parse_time_column(row, 3)?,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
        })
    })
    .db_context("Failed to query busy blocks")?
    .collect::<std::result::Result<Vec<_>, _>>()
    .db_context("Failed to fetch busy blocks");
    blocks
}

impl super::Database {
    /// Declares the availability window for a date, replacing any
    /// previous one outright.
    pub fn set_availability(
        &mut self,
        date: Date,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Availability> {
        validate_span("availability", start, end)?;

        self.connection
            .execute(
                UPSERT_AVAILABILITY_SQL,
                params![date.to_string(), start.to_string(), end.to_string()],
            )
            .db_context("Failed to upsert availability")?;

        Ok(Availability { date, start, end })
    }

    /// Returns the declared availability for a date, if any.
    pub fn get_availability(&self, date: Date) -> Result<Option<Availability>> {
        query_availability(&self.connection, date)
    }

    /// Appends a busy interval to a date. Overlap with existing blocks
    /// is allowed; merging happens at plan time.
    pub fn add_busy(&mut self, date: Date, start: TimeOfDay, end: TimeOfDay) -> Result<BusyBlock> {
        validate_span("busy", start, end)?;

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_BUSY_SQL,
                params![
                    date.to_string(),
                    start.to_string(),
                    end.to_string(),
                    now.to_string()
                ],
            )
            .db_context("Failed to insert busy block")?;

        Ok(BusyBlock {
            id: self.connection.last_insert_rowid() as u64,
            date,
            start,
            end,
            created_at: now,
        })
    }

    /// Returns the busy blocks for a date sorted by start time.
    pub fn get_busy(&self, date: Date) -> Result<Vec<BusyBlock>> {
        query_busy(&self.connection, date)
    }
}
