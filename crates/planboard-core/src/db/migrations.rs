//! Database schema initialization.

use log::debug;
use rusqlite::TransactionBehavior;

use crate::error::{DatabaseResultExt, Result};

/// Schema version recorded in `PRAGMA user_version` once applied.
const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    ///
    /// Every connection enables foreign keys (task rows cascade with their
    /// section). The schema itself is applied only while `user_version` is
    /// behind, inside a write transaction, so connections opened concurrently
    /// against a fresh file apply it exactly once.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        self.connection
            .execute_batch("PRAGMA foreign_keys = ON")
            .db_context("Failed to enable foreign keys")?;

        if self.schema_version()? >= SCHEMA_VERSION {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin schema transaction")?;

        let version: i64 = tx
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version < SCHEMA_VERSION {
            debug!("Applying schema version {SCHEMA_VERSION} (found {version})");
            let schema_sql = include_str!("../../assets/schema.sql");
            tx.execute_batch(schema_sql)
                .db_context("Failed to initialize database schema")?;
            tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .db_context("Failed to record schema version")?;
        }

        tx.commit().db_context("Failed to commit schema")?;
        Ok(())
    }

    fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
