//! Whole-board reads and the batch reorder.

use std::collections::{HashMap, HashSet};

use log::debug;
use rusqlite::params;

use super::{
    ranks,
    section_queries::{owned_section, TOUCH_SECTION_SQL},
};
use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    models::{RankScope, Section},
    params::ReorderBoard,
};

const SELECT_USER_SECTIONS_SQL: &str = "SELECT id, user_id, title, sort_order, created_at, updated_at FROM sections WHERE user_id = ?1 ORDER BY sort_order, id";
const SELECT_USER_TASK_IDS_SQL: &str = "SELECT t.id, t.section_id FROM tasks t JOIN sections s ON s.id = t.section_id WHERE s.user_id = ?1";
const PLACE_TASK_SQL: &str =
    "UPDATE tasks SET section_id = ?1, sort_order = ?2, updated_at = ?3 WHERE id = ?4";

impl super::Database {
    /// Returns all of the user's sections in rank order, each with its tasks
    /// in rank order.
    pub fn get_board(&self, user_id: u64) -> Result<Vec<Section>> {
        let tx = self.begin_read()?;

        let mut stmt = tx
            .prepare(SELECT_USER_SECTIONS_SQL)
            .db_context("Failed to prepare query")?;
        let mut sections = stmt
            .query_map(params![user_id as i64], Self::build_section_from_row)
            .db_context("Failed to query sections")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch sections")?;

        for section in &mut sections {
            section.tasks = Self::tasks_in_section(&tx, section.id)?;
        }

        Ok(sections)
    }

    /// Applies a complete board arrangement in one transaction.
    ///
    /// Section ranks follow the payload order and each task lands in the
    /// section it is listed under, ranked by its position there. The payload
    /// must name every section the user owns and every task inside them,
    /// each exactly once.
    ///
    /// # Errors
    ///
    /// * `BoardError::NotFoundOrForbidden` - A listed section or task is
    ///   missing or belongs to another user
    /// * `BoardError::ConflictOnBatch` - Duplicates, omissions, or a task
    ///   whose `dest_section_id` disagrees with its grouping
    ///
    /// Nothing is written when any error is returned.
    pub fn apply_board(&mut self, user_id: u64, board: &ReorderBoard) -> Result<()> {
        board.validate()?;

        let tx = self.begin_write()?;

        for layout in &board.sections {
            owned_section(&tx, user_id, layout.section_id)?;
        }

        let section_order: Vec<u64> = board.sections.iter().map(|s| s.section_id).collect();
        let owned_sections: HashSet<u64> =
            ranks::members(&tx, RankScope::Sections { user_id })?
                .into_iter()
                .map(|(id, _)| id)
                .collect();
        if section_order.len() != owned_sections.len() {
            return Err(BoardError::conflict(format!(
                "{} of {} sections listed; every section must be included",
                section_order.len(),
                owned_sections.len()
            )));
        }

        let mut stmt = tx
            .prepare(SELECT_USER_TASK_IDS_SQL)
            .db_context("Failed to prepare query")?;
        let current_tasks: HashMap<u64, u64> = stmt
            .query_map(params![user_id as i64], |row| {
                Ok((row.get::<_, i64>(0)? as u64, row.get::<_, i64>(1)? as u64))
            })
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<HashMap<_, _>, _>>()
            .db_context("Failed to fetch tasks")?;
        drop(stmt);

        for layout in &board.sections {
            for placement in &layout.tasks {
                if !current_tasks.contains_key(&placement.task_id) {
                    return Err(BoardError::task_not_found(placement.task_id));
                }
            }
        }
        if board.task_count() != current_tasks.len() {
            return Err(BoardError::conflict(format!(
                "{} of {} tasks listed; every task must be included",
                board.task_count(),
                current_tasks.len()
            )));
        }

        ranks::apply_full_order(&tx, RankScope::Sections { user_id }, &section_order)?;

        for section_id in &section_order {
            ranks::negate(
                &tx,
                RankScope::Tasks {
                    section_id: *section_id,
                },
            )?;
        }

        let now_str = jiff::Timestamp::now().to_string();
        let mut moved = 0usize;
        for layout in &board.sections {
            for (position, placement) in layout.tasks.iter().enumerate() {
                if current_tasks.get(&placement.task_id) != Some(&layout.section_id) {
                    moved += 1;
                }
                tx.execute(
                    PLACE_TASK_SQL,
                    params![
                        layout.section_id as i64,
                        position as i64 + 1,
                        &now_str,
                        placement.task_id as i64
                    ],
                )
                .db_context("Failed to place task")?;
            }
            tx.execute(TOUCH_SECTION_SQL, params![&now_str, layout.section_id as i64])
                .db_context("Failed to update section timestamp")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Applied board for user {user_id}: {} sections, {} tasks, {moved} moved",
            section_order.len(),
            current_tasks.len()
        );

        Ok(())
    }
}
