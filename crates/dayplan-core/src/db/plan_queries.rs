//! Plan generation, retrieval, and locking.
//!
//! Generation is the orchestrator's write path: the pending-task,
//! availability, and busy snapshot is read and the new version's rows
//! are written inside a single IMMEDIATE transaction, so concurrent
//! generations for the same database serialize and a version row can
//! never appear without its items (or vice versa).

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension, TransactionBehavior};

use crate::{
    engine::{self, Interval, PlacementStrategy, TaskRequest},
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{Availability, Plan, PlanItem},
};

use super::{day_queries, task_queries};

// SQL queries as const strings
const SELECT_LATEST_PLAN_SQL: &str = "SELECT id, date, version, locked, created_at FROM plans WHERE date = ?1 ORDER BY version DESC LIMIT 1";
const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (date, version, locked, created_at) VALUES (?1, ?2, 0, ?3)";
const INSERT_ITEM_SQL: &str = "INSERT INTO plan_items (plan_id, task_id, start_time, end_time) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ITEMS_SQL: &str = "SELECT plan_items.id, plan_items.plan_id, plan_items.task_id, tasks.text, plan_items.start_time, plan_items.end_time FROM plan_items JOIN tasks ON tasks.id = plan_items.task_id WHERE plan_items.plan_id = ?1 ORDER BY plan_items.start_time ASC";
const LOCK_PLAN_SQL: &str = "UPDATE plans SET locked = 1 WHERE id = ?1";

/// Builds a Plan (without items) from a plans-table row.
fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        date: row.get::<_, String>(1)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
        })?,
        version: row.get::<_, i64>(2)? as u32,
        locked: row.get(3)?,
        created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
        items: Vec::new(),
    })
}

fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlanItem> {
    let parse_time = |idx: usize, s: String| {
        s.parse().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
        })
    };
    Ok(PlanItem {
        id: row.get::<_, i64>(0)? as u64,
        plan_id: row.get::<_, i64>(1)? as u64,
        task_id: row.get::<_, i64>(2)? as u64,
        task_text: row.get(3)?,
        start: parse_time(4, row.get::<_, String>(4)?)?,
        end: parse_time(5, row.get::<_, String>(5)?)?,
    })
}

fn query_latest_plan(conn: &Connection, date: Date) -> Result<Option<Plan>> {
    conn.query_row(
        SELECT_LATEST_PLAN_SQL,
        params![date.to_string()],
        build_plan_from_row,
    )
    .optional()
    .db_context("Failed to query latest plan")
}

fn query_items(conn: &Connection, plan_id: u64) -> Result<Vec<PlanItem>> {
    let mut stmt = conn
        .prepare(SELECT_ITEMS_SQL)
        .db_context("Failed to prepare plan item query")?;

    let items = stmt
        .query_map(params![plan_id as i64], build_item_from_row)
        .db_context("Failed to query plan items")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch plan items");
    items
}

impl super::Database {
    /// Generates the next plan version for a date.
    ///
    /// Reads the pending-task, availability, and busy snapshot, runs
    /// the engine, and persists the new version and its items
    /// atomically. Returns the stored plan together with the ids of
    /// tasks that did not fit.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::PlanLocked`] when the date's latest
    /// version is locked; nothing is written in that case.
    pub fn generate_plan(
        &mut self,
        date: Date,
        strategy: PlacementStrategy,
    ) -> Result<(Plan, Vec<u64>)> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let previous = query_latest_plan(&tx, date)?;
        if previous.as_ref().is_some_and(|p| p.locked) {
            return Err(SchedulerError::PlanLocked { date });
        }
        let next_version = previous.map_or(1, |p| p.version + 1);

        // Snapshot read: everything the engine sees comes from this
        // transaction.
        let tasks = task_queries::query_tasks(&tx, date, true)?;
        let avail = day_queries::query_availability(&tx, date)?
            .unwrap_or_else(|| Availability::fallback(date));
        let busy = day_queries::query_busy(&tx, date)?;

        let requests: Vec<TaskRequest> = tasks
            .iter()
            .map(|t| TaskRequest {
                id: t.id,
                fixed_start: t.fixed_start,
                duration_min: t.duration_min,
            })
            .collect();
        let busy_intervals: Vec<Interval> = busy
            .iter()
            .map(|b| Interval::from_times(b.start, b.end))
            .collect();

        let outcome = engine::build_schedule(
            &requests,
            Interval::from_times(avail.start, avail.end),
            &busy_intervals,
            strategy,
        )?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_PLAN_SQL,
            params![date.to_string(), i64::from(next_version), now.to_string()],
        )
        .db_context("Failed to insert plan")?;
        let plan_id = tx.last_insert_rowid() as u64;

        let mut items = Vec::with_capacity(outcome.placements.len());
        for p in &outcome.placements {
            tx.execute(
                INSERT_ITEM_SQL,
                params![
                    plan_id as i64,
                    p.task_id as i64,
                    p.start.to_string(),
                    p.end.to_string()
                ],
            )
            .db_context("Failed to insert plan item")?;

            let task_text = tasks
                .iter()
                .find(|t| t.id == p.task_id)
                .map(|t| t.text.clone())
                .unwrap_or_default();
            items.push(PlanItem {
                id: tx.last_insert_rowid() as u64,
                plan_id,
                task_id: p.task_id,
                task_text,
                start: p.start,
                end: p.end,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        let plan = Plan {
            id: plan_id,
            date,
            version: next_version,
            locked: false,
            created_at: now,
            items,
        };
        Ok((plan, outcome.unscheduled))
    }

    /// Retrieves the latest plan version for a date with its items
    /// eagerly loaded, or `None` when no plan has been generated.
    pub fn get_latest_plan(&self, date: Date) -> Result<Option<Plan>> {
        let mut plan = query_latest_plan(&self.connection, date)?;
        if let Some(ref mut plan) = plan {
            plan.items = query_items(&self.connection, plan.id)?;
        }
        Ok(plan)
    }

    /// Locks the date's latest plan version, blocking regeneration.
    /// Locking an already-locked plan is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::PlanNotFound`] when no plan exists
    /// for the date.
    pub fn lock_plan(&mut self, date: Date) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut plan) = query_latest_plan(&tx, date)? else {
            return Err(SchedulerError::PlanNotFound { date });
        };

        if !plan.locked {
            tx.execute(LOCK_PLAN_SQL, params![plan.id as i64])
                .db_context("Failed to lock plan")?;
            plan.locked = true;
        }

        plan.items = query_items(&tx, plan.id)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(plan)
    }
}
