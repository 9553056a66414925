//! Database operations and SQLite management for sections and tasks.
//!
//! This module owns the SQLite connection, schema setup, and the query
//! modules for each entity. All ranking arithmetic lives in [`ranks`]; the
//! query modules call into it from inside their own transactions so that the
//! read of the current ordering and the write of the new one can never be
//! interleaved with another writer.

use std::{path::Path, time::Duration};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result};

pub mod board_queries;
pub mod migrations;
pub mod ranks;
pub mod section_queries;
pub mod task_queries;

/// How long a connection waits for another writer before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Creates a new database connection that waits up to `busy_timeout`
    /// for concurrent writers, and initializes the schema.
    pub fn with_busy_timeout<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(busy_timeout)
            .db_context("Failed to set busy timeout")?;
        // Readers must not block writers working on other scopes.
        connection
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
            .db_context("Failed to enable WAL journal mode")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Begins a write transaction that takes the database write lock up
    /// front, so read-then-write sequences serialize with other writers.
    pub(crate) fn begin_write(&mut self) -> Result<Transaction<'_>> {
        self.connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")
    }

    /// Begins a read-only snapshot for multi-statement reads.
    pub(crate) fn begin_read(&self) -> Result<Transaction<'_>> {
        self.connection
            .unchecked_transaction()
            .db_context("Failed to begin read transaction")
    }
}
