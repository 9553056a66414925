//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::{Database, DEFAULT_BUSY_TIMEOUT},
    error::{BoardError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    busy_timeout: Duration,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/planboard/planboard.db` or
    /// `~/.local/share/planboard/planboard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how long each operation waits for a concurrent writer before
    /// failing with a database error. Defaults to five seconds.
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Builds the configured planner instance, creating the database file
    /// and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `BoardError::XdgDirectory` if no default location is available
    /// Returns `BoardError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let init_path = db_path.clone();
        let busy_timeout = self.busy_timeout;
        task::spawn_blocking(move || {
            Database::with_busy_timeout(&init_path, busy_timeout).map(|_| ())
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Using database at {}", db_path.display());

        Ok(Planner::new(db_path, busy_timeout))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("planboard")
            .place_data_file("planboard.db")
            .map_err(|e| BoardError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
