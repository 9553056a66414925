//! Whole-board operations for the Planner.

use super::Planner;
use crate::{error::Result, models::Section, params::ReorderBoard};

impl Planner {
    /// Returns all of the user's sections with their tasks, both in rank
    /// order.
    pub async fn get_board(&self, user_id: u64) -> Result<Vec<Section>> {
        self.with_database(move |db| db.get_board(user_id)).await
    }

    /// Applies a complete drag-and-drop arrangement of the user's board in
    /// one transaction.
    ///
    /// # Errors
    ///
    /// * `BoardError::NotFoundOrForbidden` - A listed section or task is
    ///   missing or belongs to someone else
    /// * `BoardError::ConflictOnBatch` - The payload omits or repeats a
    ///   section or task, or a task's `dest_section_id` disagrees with the
    ///   section it is listed under
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use planboard_core::{params::ReorderBoard, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let board = ReorderBoard::from_json(
    ///     r#"[{"section_id": 2, "tasks": [{"task_id": 9}]}, {"section_id": 1}]"#,
    /// )?;
    /// planner.reorder_board(7, &board).await?;
    /// # Result::<(), planboard_core::BoardError>::Ok(())
    /// # };
    /// ```
    pub async fn reorder_board(&self, user_id: u64, board: &ReorderBoard) -> Result<()> {
        let board = board.clone();
        self.with_database(move |db| db.apply_board(user_id, &board))
            .await
    }
}
