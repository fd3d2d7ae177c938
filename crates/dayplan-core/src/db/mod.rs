//! Database operations and SQLite management for the day planner.
//!
//! This module provides the low-level store for tasks, availability,
//! busy intervals, and plan versions. It handles the SQLite
//! connection, schema management, and the query interfaces the
//! scheduler facade builds on. Plan generation runs here so that the
//! snapshot read and the version write share one transaction.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod day_queries;
pub mod migrations;
pub mod plan_queries;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
