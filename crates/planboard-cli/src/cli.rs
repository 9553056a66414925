//! Command-line argument wrappers for core parameters.
//!
//! Each clap argument struct converts into the matching
//! `planboard_core::params` type via `From`, keeping clap attributes out of
//! the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand};
use planboard_core::params::{
    CreateSection, CreateTask, Id, MoveTask, RenameSection, ReorderSections, ReorderTasks,
    UpdateTask,
};

/// Create a new section at the end of your board
#[derive(Args)]
pub struct CreateSectionArgs {
    /// Title of the section
    pub title: String,
}

impl From<CreateSectionArgs> for CreateSection {
    fn from(val: CreateSectionArgs) -> Self {
        CreateSection { title: val.title }
    }
}

/// Identify a section by ID
#[derive(Args)]
pub struct SectionIdArgs {
    #[arg(help = "Unique identifier of the section")]
    pub id: u64,
}

impl From<SectionIdArgs> for Id {
    fn from(val: SectionIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Rename a section without changing its position
#[derive(Args)]
pub struct RenameSectionArgs {
    #[arg(help = "Unique identifier of the section to rename")]
    pub id: u64,
    /// New title of the section
    pub title: String,
}

impl From<RenameSectionArgs> for RenameSection {
    fn from(val: RenameSectionArgs) -> Self {
        RenameSection {
            id: val.id,
            title: val.title,
        }
    }
}

/// Set the order of all your sections
///
/// Every section you own must be listed exactly once; the first ID gets
/// position 1.
#[derive(Args)]
pub struct ReorderSectionsArgs {
    #[arg(
        required = true,
        value_delimiter = ',',
        help = "Section IDs in their new order (space or comma separated)"
    )]
    pub section_ids: Vec<u64>,
}

impl From<ReorderSectionsArgs> for ReorderSections {
    fn from(val: ReorderSectionsArgs) -> Self {
        ReorderSections {
            section_ids: val.section_ids,
        }
    }
}

#[derive(Subcommand)]
pub enum SectionCommands {
    /// Create a new section
    #[command(alias = "c")]
    Create(CreateSectionArgs),
    /// List your sections with task counts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a section and its tasks
    #[command(alias = "s")]
    Show(SectionIdArgs),
    /// Rename a section
    #[command(alias = "r")]
    Rename(RenameSectionArgs),
    /// Delete a section and all of its tasks
    #[command(aliases = ["d", "rm"])]
    Delete(SectionIdArgs),
    /// Set the order of all sections
    #[command(alias = "o")]
    Reorder(ReorderSectionsArgs),
    /// Close any gaps in section positions
    Compact,
}

/// Add a task to the end of a section
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "Unique identifier of the section to add the task to")]
    pub section_id: u64,
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Optional body text for the task")]
    pub content: Option<String>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            section_id: val.section_id,
            title: val.title,
            content: val.content,
        }
    }
}

/// Identify a task by ID
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a task's title, content or completion
///
/// Only the supplied fields change. The task keeps its position; use
/// `task move` to change that.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    #[arg(short, long, help = "Updated title for the task")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated body text for the task")]
    pub content: Option<String>,
    #[arg(long, conflicts_with = "todo", help = "Mark the task as done")]
    pub done: bool,
    #[arg(long, help = "Mark the task as not done")]
    pub todo: bool,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        let is_completed = match (val.done, val.todo) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        UpdateTask {
            id: val.id,
            title: val.title,
            content: val.content,
            is_completed,
        }
    }
}

/// Move a task to a position in the same or another section
#[derive(Args)]
pub struct MoveTaskArgs {
    #[arg(help = "Unique identifier of the task to move")]
    pub id: u64,
    #[arg(help = "Section that will hold the task")]
    pub section_id: u64,
    #[arg(help = "1-based position in that section")]
    pub position: u32,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            id: val.id,
            dest_section_id: val.section_id,
            dest_rank: val.position,
        }
    }
}

/// Set the order of all tasks in a section
#[derive(Args)]
pub struct ReorderTasksArgs {
    #[arg(help = "Unique identifier of the section")]
    pub section_id: u64,
    #[arg(
        required = true,
        value_delimiter = ',',
        help = "Task IDs in their new order (space or comma separated)"
    )]
    pub task_ids: Vec<u64>,
}

impl From<ReorderTasksArgs> for ReorderTasks {
    fn from(val: ReorderTasksArgs) -> Self {
        ReorderTasks {
            section_id: val.section_id,
            task_ids: val.task_ids,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a section
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Show a task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// List the tasks of a section
    #[command(aliases = ["l", "ls"])]
    List(SectionIdArgs),
    /// Update a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(TaskIdArgs),
    /// Move a task
    #[command(alias = "m")]
    Move(MoveTaskArgs),
    /// Set the order of all tasks in a section
    #[command(alias = "o")]
    Reorder(ReorderTasksArgs),
    /// Close any gaps in a section's task positions
    Compact(SectionIdArgs),
}

/// Apply a complete board arrangement from JSON
///
/// The payload is an array of `{"section_id": N, "tasks": [{"task_id": M}]}`
/// objects listing every section and every task you own.
#[derive(Args)]
pub struct ApplyBoardArgs {
    #[arg(help = "JSON file to read, or '-' for standard input")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show all sections with their tasks
    #[command(alias = "s")]
    Show,
    /// Apply a complete board arrangement
    #[command(alias = "a")]
    Apply(ApplyBoardArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_args(done: bool, todo: bool) -> UpdateTaskArgs {
        UpdateTaskArgs {
            id: 3,
            title: None,
            content: None,
            done,
            todo,
        }
    }

    #[test]
    fn test_update_args_completion_flags() {
        assert_eq!(UpdateTask::from(update_args(true, false)).is_completed, Some(true));
        assert_eq!(UpdateTask::from(update_args(false, true)).is_completed, Some(false));
        assert_eq!(UpdateTask::from(update_args(false, false)).is_completed, None);
    }

    #[test]
    fn test_move_args_map_position_to_rank() {
        let params = MoveTask::from(MoveTaskArgs {
            id: 4,
            section_id: 2,
            position: 1,
        });
        assert_eq!(params.id, 4);
        assert_eq!(params.dest_section_id, 2);
        assert_eq!(params.dest_rank, 1);
    }
}
