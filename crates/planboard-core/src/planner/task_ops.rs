//! Task operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{Task, UpdateTaskRequest},
    params::{CreateTask, Id, MoveTask, ReorderTasks, UpdateTask},
};

impl Planner {
    /// Creates a task at the end of one of the user's sections.
    pub async fn create_task(&self, user_id: u64, params: &CreateTask) -> Result<Task> {
        let section_id = params.section_id;
        let title = params.title.clone();
        let content = params.content.clone();

        self.with_database(move |db| {
            db.create_task(user_id, section_id, &title, content.as_deref())
        })
        .await
    }

    /// Retrieves one of the user's tasks.
    pub async fn get_task(&self, user_id: u64, params: &Id) -> Result<Task> {
        let task_id = params.id;
        self.with_database(move |db| db.get_task(user_id, task_id))
            .await
    }

    /// Lists the tasks of one of the user's sections in rank order.
    pub async fn list_tasks(&self, user_id: u64, params: &Id) -> Result<Vec<Task>> {
        let section_id = params.id;
        self.with_database(move |db| db.list_tasks(user_id, section_id))
            .await
    }

    /// Applies a partial update to one of the user's tasks.
    pub async fn update_task(&self, user_id: u64, params: &UpdateTask) -> Result<Task> {
        let task_id = params.id;
        let request = UpdateTaskRequest::try_from(params.clone())?;

        self.with_database(move |db| db.update_task(user_id, task_id, request))
            .await
    }

    /// Deletes one of the user's tasks and re-ranks its section.
    ///
    /// A `BoardError::ReorderFailed` result means the task is gone but the
    /// section's ranks may have a gap; [`Planner::compact_tasks`] repairs it.
    pub async fn delete_task(&self, user_id: u64, params: &Id) -> Result<()> {
        let task_id = params.id;
        self.with_database(move |db| db.delete_task(user_id, task_id))
            .await
    }

    /// Moves one of the user's tasks to a position in the same or another
    /// of the user's sections.
    pub async fn move_task(&self, user_id: u64, params: &MoveTask) -> Result<Task> {
        let task_id = params.id;
        let dest_section_id = params.dest_section_id;
        let dest_rank = params.dest_rank;

        self.with_database(move |db| db.move_task(user_id, task_id, dest_section_id, dest_rank))
            .await
    }

    /// Replaces the order of all tasks in one of the user's sections.
    pub async fn reorder_tasks(&self, user_id: u64, params: &ReorderTasks) -> Result<()> {
        let section_id = params.section_id;
        let task_ids = params.task_ids.clone();

        self.with_database(move |db| db.reorder_tasks(user_id, section_id, &task_ids))
            .await
    }

    /// Re-compacts the task ranks of one section, returning how many
    /// changed.
    pub async fn compact_tasks(&self, user_id: u64, params: &Id) -> Result<usize> {
        let section_id = params.id;
        self.with_database(move |db| db.compact_tasks(user_id, section_id))
            .await
    }
}
