//! High-level async API for managing sections and tasks.
//!
//! The [`Planner`] is the entry point for every interface. Each operation
//! runs on a blocking worker thread with its own SQLite connection, so many
//! operations can be in flight at once while SQLite serializes the writers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display       │───▶│ (section_ops,   │───▶│   (via db/)     │
//! │   wrappers)     │    │  task_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`section_ops`]: Section creation, listing, renaming, deletion, ordering
//! - [`task_ops`]: Task creation, updates, deletion, moves, ordering
//! - [`board_ops`]: Whole-board reads and batch reorders
//! - [`handlers`]: The same operations returning display wrappers
//!
//! Every operation takes the acting `user_id` as its first argument. Sections
//! and tasks owned by other users are reported exactly like missing ones.
//!
//! # Examples
//!
//! ```rust
//! use planboard_core::{
//!     params::{CreateSection, CreateTask},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("board.db")))
//!     .build()
//!     .await?;
//!
//! let today = planner
//!     .create_section(7, &CreateSection { title: "Today".to_string() })
//!     .await?;
//! let task = planner
//!     .create_task(
//!         7,
//!         &CreateTask {
//!             section_id: today.id,
//!             title: "Walk dog".to_string(),
//!             content: None,
//!         },
//!     )
//!     .await?;
//! assert_eq!(task.rank, 1);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

use tokio::task;

use crate::{
    db::Database,
    error::{BoardError, Result},
};

pub mod board_ops;
pub mod builder;
pub mod handlers;
pub mod section_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for managing sections and tasks.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) busy_timeout: Duration,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf, busy_timeout: Duration) -> Self {
        Self {
            db_path,
            busy_timeout,
        }
    }

    /// Path of the SQLite database file this planner operates on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let busy_timeout = self.busy_timeout;

        task::spawn_blocking(move || {
            let mut db = Database::with_busy_timeout(&db_path, busy_timeout)?;
            op(&mut db)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
