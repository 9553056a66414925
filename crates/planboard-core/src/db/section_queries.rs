//! Section CRUD operations and queries.

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, types::Type, Connection, OptionalExtension, Transaction};

use super::ranks;
use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    models::{RankScope, Section, SectionSummary},
    params::validate_title,
};

const INSERT_SECTION_SQL: &str = "INSERT INTO sections (user_id, title, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_OWNED_SECTION_SQL: &str = "SELECT id, user_id, title, sort_order, created_at, updated_at FROM sections WHERE id = ?1 AND user_id = ?2";
const SELECT_SECTION_SUMMARIES_SQL: &str = "SELECT id, user_id, title, sort_order, created_at, updated_at, total_tasks, completed_tasks FROM section_summaries WHERE user_id = ?1 ORDER BY sort_order, id";
const UPDATE_SECTION_TITLE_SQL: &str =
    "UPDATE sections SET title = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4";
const DELETE_SECTION_SQL: &str = "DELETE FROM sections WHERE id = ?1 AND user_id = ?2";
pub(super) const TOUCH_SECTION_SQL: &str = "UPDATE sections SET updated_at = ?1 WHERE id = ?2";

/// Parses a stored RFC 3339 timestamp column.
pub(super) fn timestamp_at(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Fetches a section only if `user_id` owns it.
///
/// Missing and foreign sections produce the same error.
pub(super) fn owned_section(conn: &Connection, user_id: u64, section_id: u64) -> Result<Section> {
    conn.query_row(
        SELECT_OWNED_SECTION_SQL,
        params![section_id as i64, user_id as i64],
        super::Database::build_section_from_row,
    )
    .optional()
    .db_context("Failed to query section")?
    .ok_or_else(|| BoardError::section_not_found(section_id))
}

impl super::Database {
    /// Helper function to construct a Section (without tasks) from a row.
    pub(super) fn build_section_from_row(row: &rusqlite::Row) -> rusqlite::Result<Section> {
        Ok(Section {
            id: row.get::<_, i64>(0)? as u64,
            owner_user_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            rank: row.get::<_, i64>(3)? as u32,
            created_at: timestamp_at(row, 4)?,
            updated_at: timestamp_at(row, 5)?,
            tasks: Vec::new(),
        })
    }

    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<SectionSummary> {
        Ok(SectionSummary {
            id: row.get::<_, i64>(0)? as u64,
            owner_user_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            rank: row.get::<_, i64>(3)? as u32,
            created_at: timestamp_at(row, 4)?,
            updated_at: timestamp_at(row, 5)?,
            total_tasks: row.get::<_, i64>(6)? as u32,
            completed_tasks: row.get::<_, i64>(7)? as u32,
        })
    }

    /// Creates a section at the end of the user's ordering.
    pub fn create_section(&mut self, user_id: u64, title: &str) -> Result<Section> {
        let title = validate_title("title", title)?;
        let scope = RankScope::Sections { user_id };

        let tx = self.begin_write()?;

        let rank = ranks::next_rank(&tx, scope)?;
        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_SECTION_SQL,
            params![user_id as i64, &title, rank as i64, &now_str, &now_str],
        )
        .db_context("Failed to insert section")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created section {id} for user {user_id} at rank {rank}");

        Ok(Section {
            id,
            owner_user_id: user_id,
            title,
            rank,
            created_at: now,
            updated_at: now,
            tasks: Vec::new(),
        })
    }

    /// Lists the user's sections in rank order, with task counts.
    pub fn list_sections(&self, user_id: u64) -> Result<Vec<SectionSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SECTION_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let sections = stmt
            .query_map(params![user_id as i64], Self::build_summary_from_row)
            .db_context("Failed to query sections")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch sections")?;

        Ok(sections)
    }

    /// Retrieves one of the user's sections with its tasks eagerly loaded.
    pub fn get_section(&self, user_id: u64, section_id: u64) -> Result<Section> {
        let tx = self.begin_read()?;
        let mut section = owned_section(&tx, user_id, section_id)?;
        section.tasks = Self::tasks_in_section(&tx, section_id)?;
        Ok(section)
    }

    /// Renames one of the user's sections.
    pub fn rename_section(
        &mut self,
        user_id: u64,
        section_id: u64,
        title: &str,
    ) -> Result<Section> {
        let title = validate_title("title", title)?;

        let tx = self.begin_write()?;

        let mut section = owned_section(&tx, user_id, section_id)?;
        let now = Timestamp::now();

        tx.execute(
            UPDATE_SECTION_TITLE_SQL,
            params![&title, now.to_string(), section_id as i64, user_id as i64],
        )
        .db_context("Failed to update section")?;

        tx.commit().db_context("Failed to commit transaction")?;

        section.title = title;
        section.updated_at = now;
        Ok(section)
    }

    /// Deletes one of the user's sections (its tasks cascade) and re-ranks
    /// the remaining sections.
    ///
    /// # Errors
    ///
    /// * `BoardError::NotFoundOrForbidden` - Nothing was deleted
    /// * `BoardError::ReorderFailed` - The section is gone but the user's
    ///   section ranks could not be compacted; see
    ///   [`compact_sections`](Self::compact_sections)
    pub fn delete_section(&mut self, user_id: u64, section_id: u64) -> Result<()> {
        let scope = RankScope::Sections { user_id };
        let mut tx = self.begin_write()?;

        owned_section(&tx, user_id, section_id)?;

        tx.execute(DELETE_SECTION_SQL, params![section_id as i64, user_id as i64])
            .db_context("Failed to delete section")?;

        let compacted = compact_in_savepoint(&mut tx, scope);

        tx.commit().db_context("Failed to commit transaction")?;

        match compacted {
            Ok(changed) => {
                debug!("Deleted section {section_id}; re-ranked {changed} of {scope}");
                Ok(())
            }
            Err(source) => {
                warn!("Deleted section {section_id} but failed to re-rank {scope}: {source}");
                Err(BoardError::ReorderFailed {
                    scope,
                    source: Box::new(source),
                })
            }
        }
    }

    /// Rewrites the user's section ranks from a complete ordering.
    pub fn reorder_sections(&mut self, user_id: u64, section_ids: &[u64]) -> Result<()> {
        let tx = self.begin_write()?;
        ranks::apply_full_order(&tx, RankScope::Sections { user_id }, section_ids)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Re-compacts the user's section ranks. Returns the number of sections
    /// whose rank changed; `0` when already dense.
    pub fn compact_sections(&mut self, user_id: u64) -> Result<usize> {
        let tx = self.begin_write()?;
        let changed = ranks::compact(&tx, RankScope::Sections { user_id })?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(changed)
    }
}

/// Runs scope compaction inside a savepoint of `tx`.
///
/// On failure the savepoint is rolled back and the error is returned, while
/// `tx` itself stays usable so the preceding delete can still commit.
pub(super) fn compact_in_savepoint(tx: &mut Transaction<'_>, scope: RankScope) -> Result<usize> {
    let savepoint = tx.savepoint().db_context("Failed to open savepoint")?;
    let changed = ranks::compact(&savepoint, scope)?;
    savepoint
        .commit()
        .db_context("Failed to release savepoint")?;
    Ok(changed)
}
