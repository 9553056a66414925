//! Error types for the planboard library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::RankScope;

/// Kind of entity named in a [`BoardError::NotFoundOrForbidden`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Section,
    Task,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Section => write!(f, "Section"),
            Entity::Task => write!(f, "Task"),
        }
    }
}

/// Comprehensive error type for all planboard operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The entity does not exist or belongs to another user. The two causes
    /// are reported identically so callers cannot probe for foreign ids.
    #[error("{entity} with ID {id} not found")]
    NotFoundOrForbidden { entity: Entity, id: u64 },
    /// The primary mutation committed but re-ranking the scope failed.
    /// Ranks in `scope` may be sparse until it is compacted again.
    #[error("Removed, but failed to re-rank {scope}: {source}")]
    ReorderFailed {
        scope: RankScope,
        #[source]
        source: Box<BoardError>,
    },
    /// A full reorder payload was incomplete, duplicated ids, or named ids
    /// outside the scope. Nothing was written.
    #[error("Reorder rejected: {reason}")]
    ConflictOnBatch { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BoardError {
        BoardError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for a missing or foreign section.
    pub fn section_not_found(id: u64) -> Self {
        Self::NotFoundOrForbidden {
            entity: Entity::Section,
            id,
        }
    }

    /// Shorthand for a missing or foreign task.
    pub fn task_not_found(id: u64) -> Self {
        Self::NotFoundOrForbidden {
            entity: Entity::Task,
            id,
        }
    }

    /// Creates a batch conflict error.
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::ConflictOnBatch {
            reason: reason.into(),
        }
    }

    /// Whether the error means the mutation committed but ranks may be
    /// sparse. Such scopes are repaired by compacting them again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ReorderFailed { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BoardError::database(message).with_source(e))
    }
}

/// Result type alias for planboard operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_or_forbidden_hides_cause() {
        let err = BoardError::section_not_found(42);
        assert_eq!(err.to_string(), "Section with ID 42 not found");

        let err = BoardError::task_not_found(7);
        assert_eq!(err.to_string(), "Task with ID 7 not found");
    }

    #[test]
    fn test_reorder_failed_is_recoverable() {
        let err = BoardError::ReorderFailed {
            scope: RankScope::Tasks { section_id: 3 },
            source: Box::new(BoardError::conflict("boom")),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("tasks of section 3"));
        assert!(!BoardError::conflict("x").is_recoverable());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = BoardError::invalid_input("title").with_reason("must not be empty");
        match err {
            BoardError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert_eq!(reason, "must not be empty");
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }
}
