//! Planner operations that return display wrapper types.
//!
//! Interfaces call these instead of the raw operations when they print the
//! outcome; the wrappers carry the markdown formatting.

use super::Planner;
use crate::{
    display::{
        Board, CreateResult, DeleteResult, OperationStatus, SectionSummaries, Tasks, UpdateResult,
    },
    error::Result,
    models::{Section, Task},
    params::{
        CreateSection, CreateTask, Id, MoveTask, RenameSection, ReorderBoard, ReorderSections,
        ReorderTasks, UpdateTask,
    },
};

impl Planner {
    /// Handle creating a section.
    pub async fn create_section_result(
        &self,
        user_id: u64,
        params: &CreateSection,
    ) -> Result<CreateResult<Section>> {
        Ok(CreateResult::new(self.create_section(user_id, params).await?))
    }

    /// Handle listing the user's sections with progress counts.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use planboard_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let sections = planner.list_sections_summary(7).await?;
    /// println!("{sections}");
    /// # Result::<(), planboard_core::BoardError>::Ok(())
    /// # };
    /// ```
    pub async fn list_sections_summary(&self, user_id: u64) -> Result<SectionSummaries> {
        Ok(SectionSummaries(self.list_sections(user_id).await?))
    }

    /// Handle renaming a section, recording the old title as the change.
    pub async fn rename_section_result(
        &self,
        user_id: u64,
        params: &RenameSection,
    ) -> Result<UpdateResult<Section>> {
        let before = self.get_section(user_id, &Id { id: params.id }).await?;
        let mut section = self.rename_section(user_id, params).await?;
        section.tasks = before.tasks;

        let changes = if before.title == section.title {
            Vec::new()
        } else {
            vec![format!("Renamed from '{}'", before.title)]
        };
        Ok(UpdateResult::with_changes(section, changes))
    }

    /// Handle deleting a section.
    ///
    /// Fetches the section first so the confirmation can name it and count
    /// the tasks removed with it.
    pub async fn delete_section_result(
        &self,
        user_id: u64,
        params: &Id,
    ) -> Result<DeleteResult<Section>> {
        let section = self.get_section(user_id, params).await?;
        self.delete_section(user_id, params).await?;
        Ok(DeleteResult::new(section))
    }

    /// Handle replacing the order of the user's sections.
    pub async fn reorder_sections_result(
        &self,
        user_id: u64,
        params: &ReorderSections,
    ) -> Result<OperationStatus> {
        self.reorder_sections(user_id, params).await?;
        Ok(OperationStatus::success(format!(
            "Reordered {} section(s)",
            params.section_ids.len()
        )))
    }

    /// Handle re-compacting the user's section ranks.
    pub async fn compact_sections_result(&self, user_id: u64) -> Result<OperationStatus> {
        let changed = self.compact_sections(user_id).await?;
        Ok(OperationStatus::success(format!(
            "Re-ranked {changed} section(s)"
        )))
    }

    /// Handle creating a task.
    pub async fn create_task_result(
        &self,
        user_id: u64,
        params: &CreateTask,
    ) -> Result<CreateResult<Task>> {
        Ok(CreateResult::new(self.create_task(user_id, params).await?))
    }

    /// Handle listing a section's tasks.
    pub async fn list_tasks_result(&self, user_id: u64, params: &Id) -> Result<Tasks> {
        Ok(Tasks(self.list_tasks(user_id, params).await?))
    }

    /// Handle a partial task update, describing each supplied field as a
    /// change.
    pub async fn update_task_result(
        &self,
        user_id: u64,
        params: &UpdateTask,
    ) -> Result<UpdateResult<Task>> {
        let task = self.update_task(user_id, params).await?;

        let mut changes = Vec::new();
        if params.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if params.content.is_some() {
            changes.push("Updated content".to_string());
        }
        match params.is_completed {
            Some(true) => changes.push("Marked as done".to_string()),
            Some(false) => changes.push("Marked as todo".to_string()),
            None => {}
        }

        Ok(UpdateResult::with_changes(task, changes))
    }

    /// Handle deleting a task.
    pub async fn delete_task_result(
        &self,
        user_id: u64,
        params: &Id,
    ) -> Result<DeleteResult<Task>> {
        let task = self.get_task(user_id, params).await?;
        self.delete_task(user_id, params).await?;
        Ok(DeleteResult::new(task))
    }

    /// Handle moving a task, describing where it came from.
    pub async fn move_task_result(
        &self,
        user_id: u64,
        params: &MoveTask,
    ) -> Result<UpdateResult<Task>> {
        let before = self.get_task(user_id, &Id { id: params.id }).await?;
        let task = self.move_task(user_id, params).await?;

        let changes = if before.section_id == task.section_id && before.rank == task.rank {
            Vec::new()
        } else {
            vec![format!(
                "Moved from section {} position {} to section {} position {}",
                before.section_id, before.rank, task.section_id, task.rank
            )]
        };
        Ok(UpdateResult::with_changes(task, changes))
    }

    /// Handle replacing the order of a section's tasks.
    pub async fn reorder_tasks_result(
        &self,
        user_id: u64,
        params: &ReorderTasks,
    ) -> Result<OperationStatus> {
        self.reorder_tasks(user_id, params).await?;
        Ok(OperationStatus::success(format!(
            "Reordered {} task(s) in section {}",
            params.task_ids.len(),
            params.section_id
        )))
    }

    /// Handle re-compacting a section's task ranks.
    pub async fn compact_tasks_result(&self, user_id: u64, params: &Id) -> Result<OperationStatus> {
        let changed = self.compact_tasks(user_id, params).await?;
        Ok(OperationStatus::success(format!(
            "Re-ranked {changed} task(s) in section {}",
            params.id
        )))
    }

    /// Handle showing the user's whole board.
    pub async fn show_board(&self, user_id: u64) -> Result<Board> {
        Ok(Board(self.get_board(user_id).await?))
    }

    /// Handle applying a board payload and return the resulting board.
    pub async fn reorder_board_result(&self, user_id: u64, board: &ReorderBoard) -> Result<Board> {
        self.reorder_board(user_id, board).await?;
        self.show_board(user_id).await
    }
}
