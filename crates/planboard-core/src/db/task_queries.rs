//! Task CRUD operations, moves and queries.
//!
//! Tasks have no owner column of their own. Every lookup joins the holding
//! section and filters on its `user_id`, so ownership always follows the
//! section a task currently sits in.

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};

use super::{
    ranks,
    section_queries::{compact_in_savepoint, owned_section, timestamp_at, TOUCH_SECTION_SQL},
};
use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    models::{RankScope, Task, UpdateTaskRequest},
    params::validate_title,
};

const TASK_COLUMNS: &str = "t.id, t.section_id, s.user_id, t.title, t.content, t.is_completed, t.sort_order, t.created_at, t.updated_at";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (section_id, title, content, is_completed, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, 0, ?4, ?5, ?6)";
const UPDATE_TASK_SQL: &str =
    "UPDATE tasks SET title = ?1, content = ?2, is_completed = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const PARK_TASK_SQL: &str = "UPDATE tasks SET sort_order = 0 WHERE id = ?1";
const PLACE_TASK_SQL: &str =
    "UPDATE tasks SET section_id = ?1, sort_order = ?2, updated_at = ?3 WHERE id = ?4";

impl super::Database {
    /// Helper function to construct a Task from a row of `TASK_COLUMNS`.
    pub(super) fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get::<_, i64>(0)? as u64,
            section_id: row.get::<_, i64>(1)? as u64,
            owner_user_id: row.get::<_, i64>(2)? as u64,
            title: row.get(3)?,
            content: row.get(4)?,
            is_completed: row.get(5)?,
            rank: row.get::<_, i64>(6)? as u32,
            created_at: timestamp_at(row, 7)?,
            updated_at: timestamp_at(row, 8)?,
        })
    }

    /// Tasks of one section in rank order. Performs no ownership check.
    pub(super) fn tasks_in_section(conn: &Connection, section_id: u64) -> Result<Vec<Task>> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks t JOIN sections s ON s.id = t.section_id \
             WHERE t.section_id = ?1 ORDER BY t.sort_order, t.id"
        );
        let mut stmt = conn.prepare(&sql).db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![section_id as i64], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }

    /// Fetches a task only if its holding section belongs to `user_id`.
    pub(super) fn owned_task(conn: &Connection, user_id: u64, task_id: u64) -> Result<Task> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks t JOIN sections s ON s.id = t.section_id \
             WHERE t.id = ?1 AND s.user_id = ?2"
        );
        conn.query_row(
            &sql,
            params![task_id as i64, user_id as i64],
            Self::build_task_from_row,
        )
        .optional()
        .db_context("Failed to query task")?
        .ok_or_else(|| BoardError::task_not_found(task_id))
    }

    /// Creates a task at the end of one of the user's sections.
    pub fn create_task(
        &mut self,
        user_id: u64,
        section_id: u64,
        title: &str,
        content: Option<&str>,
    ) -> Result<Task> {
        let title = validate_title("title", title)?;
        let content = content.unwrap_or_default().to_string();
        let scope = RankScope::Tasks { section_id };

        let tx = self.begin_write()?;

        owned_section(&tx, user_id, section_id)?;

        let rank = ranks::next_rank(&tx, scope)?;
        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TASK_SQL,
            params![section_id as i64, &title, &content, rank as i64, &now_str, &now_str],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(TOUCH_SECTION_SQL, params![&now_str, section_id as i64])
            .db_context("Failed to update section timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created task {id} in section {section_id} at rank {rank}");

        Ok(Task {
            id,
            section_id,
            owner_user_id: user_id,
            title,
            content,
            is_completed: false,
            rank,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves one of the user's tasks.
    pub fn get_task(&self, user_id: u64, task_id: u64) -> Result<Task> {
        Self::owned_task(&self.connection, user_id, task_id)
    }

    /// Lists the tasks of one of the user's sections in rank order.
    pub fn list_tasks(&self, user_id: u64, section_id: u64) -> Result<Vec<Task>> {
        let tx = self.begin_read()?;
        owned_section(&tx, user_id, section_id)?;
        Self::tasks_in_section(&tx, section_id)
    }

    /// Updates the supplied fields of one of the user's tasks. The rank is
    /// never changed here.
    pub fn update_task(
        &mut self,
        user_id: u64,
        task_id: u64,
        request: UpdateTaskRequest,
    ) -> Result<Task> {
        let title = request
            .title
            .as_deref()
            .map(|title| validate_title("title", title))
            .transpose()?;

        let tx = self.begin_write()?;

        let mut task = Self::owned_task(&tx, user_id, task_id)?;

        if request.is_empty() {
            return Ok(task);
        }

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(content) = request.content {
            task.content = content;
        }
        if let Some(is_completed) = request.is_completed {
            task.is_completed = is_completed;
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            UPDATE_TASK_SQL,
            params![
                &task.title,
                &task.content,
                task.is_completed,
                &now_str,
                task_id as i64
            ],
        )
        .db_context("Failed to update task")?;

        tx.execute(TOUCH_SECTION_SQL, params![&now_str, task.section_id as i64])
            .db_context("Failed to update section timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        task.updated_at = now;
        Ok(task)
    }

    /// Deletes one of the user's tasks and re-ranks the rest of its section.
    ///
    /// # Errors
    ///
    /// * `BoardError::NotFoundOrForbidden` - Nothing was deleted
    /// * `BoardError::ReorderFailed` - The task is gone but its section's
    ///   ranks could not be compacted; see
    ///   [`compact_tasks`](Self::compact_tasks)
    pub fn delete_task(&mut self, user_id: u64, task_id: u64) -> Result<()> {
        let mut tx = self.begin_write()?;

        let task = Self::owned_task(&tx, user_id, task_id)?;
        let scope = RankScope::Tasks {
            section_id: task.section_id,
        };

        tx.execute(DELETE_TASK_SQL, params![task_id as i64])
            .db_context("Failed to delete task")?;

        tx.execute(
            TOUCH_SECTION_SQL,
            params![Timestamp::now().to_string(), task.section_id as i64],
        )
        .db_context("Failed to update section timestamp")?;

        let compacted = compact_in_savepoint(&mut tx, scope);

        tx.commit().db_context("Failed to commit transaction")?;

        match compacted {
            Ok(changed) => {
                debug!("Deleted task {task_id}; re-ranked {changed} of {scope}");
                Ok(())
            }
            Err(source) => {
                warn!("Deleted task {task_id} but failed to re-rank {scope}: {source}");
                Err(BoardError::ReorderFailed {
                    scope,
                    source: Box::new(source),
                })
            }
        }
    }

    /// Moves one of the user's tasks to `dest_rank` (1-based) in
    /// `dest_section_id`, which may be the section it is already in.
    ///
    /// The source section is closed up behind the task and the destination
    /// opened up in front of it within one transaction, so both scopes stay
    /// dense whatever happens.
    ///
    /// # Errors
    ///
    /// * `BoardError::NotFoundOrForbidden` - Task or destination section is
    ///   missing or foreign
    /// * `BoardError::InvalidInput` - `dest_rank` is outside
    ///   `1..=count + 1` (cross-section) or `1..=count` (same section)
    pub fn move_task(
        &mut self,
        user_id: u64,
        task_id: u64,
        dest_section_id: u64,
        dest_rank: u32,
    ) -> Result<Task> {
        let tx = self.begin_write()?;

        let task = Self::owned_task(&tx, user_id, task_id)?;
        owned_section(&tx, user_id, dest_section_id)?;

        let source = RankScope::Tasks {
            section_id: task.section_id,
        };
        let dest = RankScope::Tasks {
            section_id: dest_section_id,
        };
        let same_section = source == dest;

        let dest_count = ranks::count(&tx, dest)?;
        let max_rank = if same_section {
            dest_count
        } else {
            dest_count + 1
        };
        if dest_rank == 0 || dest_rank > max_rank {
            return Err(BoardError::invalid_input("dest_rank").with_reason(format!(
                "Position {dest_rank} is outside 1..={max_rank} for section {dest_section_id}"
            )));
        }

        if same_section && dest_rank == task.rank {
            return Ok(task);
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(PARK_TASK_SQL, params![task_id as i64])
            .db_context("Failed to detach task")?;
        ranks::close_gap(&tx, source, task.rank)?;
        ranks::open_gap(&tx, dest, dest_rank)?;
        tx.execute(
            PLACE_TASK_SQL,
            params![
                dest_section_id as i64,
                dest_rank as i64,
                &now_str,
                task_id as i64
            ],
        )
        .db_context("Failed to place task")?;

        for section_id in [task.section_id, dest_section_id] {
            tx.execute(TOUCH_SECTION_SQL, params![&now_str, section_id as i64])
                .db_context("Failed to update section timestamp")?;
        }

        let moved = Self::owned_task(&tx, user_id, task_id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Moved task {task_id} from {}:{} to {dest_section_id}:{dest_rank}",
            task.section_id, task.rank
        );

        Ok(moved)
    }

    /// Rewrites the task ranks of one of the user's sections from a complete
    /// ordering.
    pub fn reorder_tasks(&mut self, user_id: u64, section_id: u64, task_ids: &[u64]) -> Result<()> {
        let tx = self.begin_write()?;
        owned_section(&tx, user_id, section_id)?;
        ranks::apply_full_order(&tx, RankScope::Tasks { section_id }, task_ids)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Re-compacts the task ranks of one of the user's sections. Returns the
    /// number of tasks whose rank changed; `0` when already dense.
    pub fn compact_tasks(&mut self, user_id: u64, section_id: u64) -> Result<usize> {
        let tx = self.begin_write()?;
        owned_section(&tx, user_id, section_id)?;
        let changed = ranks::compact(&tx, RankScope::Tasks { section_id })?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(changed)
    }
}
