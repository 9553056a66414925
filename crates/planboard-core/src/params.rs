//! Parameter structures for planboard operations
//!
//! These structures are shared by every interface (the CLI today, an HTTP
//! layer tomorrow) and carry no framework-specific derives beyond serde.
//! Interface layers wrap them with their own argument types and convert via
//! `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (user_id, &P)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The acting user is never part of a parameter struct. Every planner
//! operation takes it as an explicit first argument so an owner field in a
//! request body can never be mistaken for authorization.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSection {
    /// Title of the section (required, non-blank)
    pub title: String,
}

/// Parameters for renaming a section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameSection {
    /// Section to rename
    pub id: u64,
    /// New title (required, non-blank)
    pub title: String,
}

/// Parameters for creating a task at the end of a section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Section that will hold the task
    pub section_id: u64,
    /// Title of the task (required, non-blank)
    pub title: String,
    /// Optional body text
    #[serde(default)]
    pub content: Option<String>,
}

/// Parameters for a partial task update.
///
/// Only supplied fields change. The task's rank is never touched by an
/// update; use [`MoveTask`] for that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// Updated title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Updated body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Updated completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl UpdateTask {
    /// Validate the update and return the normalized title, if any.
    ///
    /// # Errors
    ///
    /// * `BoardError::InvalidInput` - When a supplied title is blank
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planboard_core::params::UpdateTask;
    ///
    /// let params = UpdateTask {
    ///     id: 1,
    ///     title: Some("  Walk dog ".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(params.validate()?, Some("Walk dog".to_string()));
    ///
    /// let blank = UpdateTask {
    ///     id: 1,
    ///     title: Some("   ".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(blank.validate().is_err());
    /// # planboard_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<Option<String>> {
        self.title
            .as_deref()
            .map(|title| validate_title("title", title))
            .transpose()
    }
}

/// Parameters for moving a task to a position in a (possibly different)
/// section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveTask {
    /// Task to move
    pub id: u64,
    /// Section that will hold the task afterwards
    pub dest_section_id: u64,
    /// 1-based position in the destination section
    pub dest_rank: u32,
}

/// Authoritative ordering of all of a user's sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderSections {
    /// Every section the user owns, in the desired order
    pub section_ids: Vec<u64>,
}

/// Authoritative ordering of all tasks in one section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderTasks {
    /// Section whose tasks are reordered
    pub section_id: u64,
    /// Every task in the section, in the desired order
    pub task_ids: Vec<u64>,
}

/// One task's placement inside a [`SectionLayout`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskPlacement {
    /// Task being placed
    pub task_id: u64,
    /// Section the task should end up in. When present it must match the
    /// enclosing section; the grouping in the payload is the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_section_id: Option<u64>,
}

/// One section and its complete task list inside a [`ReorderBoard`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionLayout {
    /// Section being placed
    pub section_id: u64,
    /// Tasks of this section after the reorder, in order
    #[serde(default)]
    pub tasks: Vec<TaskPlacement>,
}

/// Complete desired arrangement of a user's board, typically the result of a
/// drag-and-drop action. This is a full-state replace, not a patch: every
/// section the user owns and every task inside them must be listed exactly
/// once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ReorderBoard {
    pub sections: Vec<SectionLayout>,
}

impl ReorderBoard {
    /// Parse a board payload from its JSON array form.
    ///
    /// ```rust
    /// use planboard_core::params::ReorderBoard;
    ///
    /// let board = ReorderBoard::from_json(
    ///     r#"[{"section_id": 2, "tasks": [{"task_id": 5}, {"task_id": 4, "dest_section_id": 2}]},
    ///         {"section_id": 1}]"#,
    /// )?;
    /// assert_eq!(board.sections.len(), 2);
    /// assert_eq!(board.sections[0].tasks[1].dest_section_id, Some(2));
    /// assert!(board.sections[1].tasks.is_empty());
    /// # planboard_core::Result::<()>::Ok(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the payload for problems that need no database access:
    /// duplicated ids and tasks whose destination disagrees with their
    /// grouping.
    ///
    /// # Errors
    ///
    /// * `BoardError::ConflictOnBatch` - On any duplicate or mismatch
    pub fn validate(&self) -> Result<()> {
        let mut seen_sections = HashSet::new();
        let mut seen_tasks = HashSet::new();

        for layout in &self.sections {
            if !seen_sections.insert(layout.section_id) {
                return Err(BoardError::conflict(format!(
                    "section {} is listed more than once",
                    layout.section_id
                )));
            }

            for placement in &layout.tasks {
                if !seen_tasks.insert(placement.task_id) {
                    return Err(BoardError::conflict(format!(
                        "task {} is listed more than once",
                        placement.task_id
                    )));
                }
                if let Some(dest) = placement.dest_section_id {
                    if dest != layout.section_id {
                        return Err(BoardError::conflict(format!(
                            "task {} is listed under section {} but targets section {dest}",
                            placement.task_id, layout.section_id
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Number of tasks named across all sections.
    pub fn task_count(&self) -> usize {
        self.sections.iter().map(|s| s.tasks.len()).sum()
    }
}

/// Reject blank titles and trim surrounding whitespace.
pub(crate) fn validate_title(field: &str, title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardError::invalid_input(field).with_reason("Title must not be empty"));
    }
    Ok(trimmed.to_string())
}
