//! Dense per-scope ranking primitives.
//!
//! Every function here reads or rewrites the `sort_order` column of one
//! [`RankScope`]. None of them opens a transaction: callers run them inside
//! an `IMMEDIATE` transaction (or a savepoint of one) together with the
//! insert, delete or move they belong to, so no other writer can observe or
//! interleave with a half-applied ranking.
//!
//! Both tables carry a unique index on `(scope key, sort_order)`. Rewrites
//! that shift several rows therefore go through negative values first: a
//! negated rank cannot collide with a live one, and negated ranks stay
//! distinct among themselves.

use std::collections::HashSet;

use rusqlite::{params, Connection};

use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    models::RankScope,
};

/// Returns `max(rank) + 1` for the scope, or `1` when it is empty.
pub fn next_rank(conn: &Connection, scope: RankScope) -> Result<u32> {
    let sql = format!(
        "SELECT COALESCE(MAX(sort_order), 0) + 1 FROM {} WHERE {} = ?1",
        scope.table(),
        scope.key_column()
    );
    let next: i64 = conn
        .query_row(&sql, params![scope.key()], |row| row.get(0))
        .db_context("Failed to get next rank")?;
    Ok(next as u32)
}

/// Number of members in the scope.
pub fn count(conn: &Connection, scope: RankScope) -> Result<u32> {
    let sql = format!(
        "SELECT COUNT(*) FROM {} WHERE {} = ?1",
        scope.table(),
        scope.key_column()
    );
    let count: i64 = conn
        .query_row(&sql, params![scope.key()], |row| row.get(0))
        .db_context("Failed to count scope members")?;
    Ok(count as u32)
}

/// Member ids and ranks, ascending by rank (ties by id).
pub fn members(conn: &Connection, scope: RankScope) -> Result<Vec<(u64, i64)>> {
    let sql = format!(
        "SELECT id, sort_order FROM {} WHERE {} = ?1 ORDER BY sort_order, id",
        scope.table(),
        scope.key_column()
    );
    let mut stmt = conn.prepare(&sql).db_context("Failed to prepare rank query")?;
    let rows = stmt
        .query_map(params![scope.key()], |row| {
            Ok((row.get::<_, i64>(0)? as u64, row.get::<_, i64>(1)?))
        })
        .db_context("Failed to query ranks")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch ranks")?;
    Ok(rows)
}

/// Renumbers the scope to `1..=count`, preserving relative order.
///
/// Returns how many rows changed; a dense scope yields `0` and is left
/// untouched, which makes repeated calls harmless.
pub fn compact(conn: &Connection, scope: RankScope) -> Result<usize> {
    let members = members(conn, scope)?;
    let sql = format!("UPDATE {} SET sort_order = ?1 WHERE id = ?2", scope.table());
    let mut stmt = conn.prepare(&sql).db_context("Failed to prepare compaction")?;

    // Walking upward never collides: the p-th smallest positive rank is at
    // least p, and every later row holds a strictly larger rank.
    let mut changed = 0;
    for (position, (id, rank)) in members.iter().enumerate() {
        let target = position as i64 + 1;
        if *rank != target {
            stmt.execute(params![target, *id as i64])
                .db_context("Failed to renumber rank")?;
            changed += 1;
        }
    }

    Ok(changed)
}

/// Rewrites the scope so that `ordered_ids[i]` gets rank `i + 1`.
///
/// The list must name every member exactly once and nothing else; otherwise
/// the call fails with `ConflictOnBatch` before writing anything.
pub fn apply_full_order(conn: &Connection, scope: RankScope, ordered_ids: &[u64]) -> Result<()> {
    let current: HashSet<u64> = members(conn, scope)?
        .into_iter()
        .map(|(id, _)| id)
        .collect();

    let mut seen = HashSet::with_capacity(ordered_ids.len());
    for id in ordered_ids {
        if !seen.insert(*id) {
            return Err(BoardError::conflict(format!(
                "id {id} is listed more than once for {scope}"
            )));
        }
        if !current.contains(id) {
            return Err(BoardError::conflict(format!(
                "id {id} does not belong to {scope}"
            )));
        }
    }

    if let Some(missing) = current.iter().filter(|id| !seen.contains(id)).min() {
        return Err(BoardError::conflict(format!(
            "id {missing} of {scope} is missing from the ordering"
        )));
    }

    negate(conn, scope)?;
    for (position, id) in ordered_ids.iter().enumerate() {
        set_rank(conn, scope, *id, position as u32 + 1)?;
    }

    Ok(())
}

/// Shifts every member with rank `>= at` up by one, leaving `at` free.
pub fn open_gap(conn: &Connection, scope: RankScope, at: u32) -> Result<()> {
    let shift = format!(
        "UPDATE {} SET sort_order = -(sort_order + 1) WHERE {} = ?1 AND sort_order >= ?2",
        scope.table(),
        scope.key_column()
    );
    conn.execute(&shift, params![scope.key(), at as i64])
        .db_context("Failed to open rank gap")?;
    restore_negated(conn, scope)
}

/// Shifts every member with rank `> after` down by one, closing the hole
/// left at `after`.
pub fn close_gap(conn: &Connection, scope: RankScope, after: u32) -> Result<()> {
    let shift = format!(
        "UPDATE {} SET sort_order = -(sort_order - 1) WHERE {} = ?1 AND sort_order > ?2",
        scope.table(),
        scope.key_column()
    );
    conn.execute(&shift, params![scope.key(), after as i64])
        .db_context("Failed to close rank gap")?;
    restore_negated(conn, scope)
}

/// Moves every live rank of the scope into negative space.
pub fn negate(conn: &Connection, scope: RankScope) -> Result<()> {
    let sql = format!(
        "UPDATE {} SET sort_order = -sort_order WHERE {} = ?1 AND sort_order > 0",
        scope.table(),
        scope.key_column()
    );
    conn.execute(&sql, params![scope.key()])
        .db_context("Failed to clear ranks")?;
    Ok(())
}

/// Sets one member's rank. The caller guarantees the slot is free.
pub fn set_rank(conn: &Connection, scope: RankScope, id: u64, rank: u32) -> Result<()> {
    let sql = format!(
        "UPDATE {} SET sort_order = ?1 WHERE id = ?2 AND {} = ?3",
        scope.table(),
        scope.key_column()
    );
    conn.execute(&sql, params![rank as i64, id as i64, scope.key()])
        .db_context("Failed to set rank")?;
    Ok(())
}

fn restore_negated(conn: &Connection, scope: RankScope) -> Result<()> {
    let sql = format!(
        "UPDATE {} SET sort_order = -sort_order WHERE {} = ?1 AND sort_order < 0",
        scope.table(),
        scope.key_column()
    );
    conn.execute(&sql, params![scope.key()])
        .db_context("Failed to restore ranks")?;
    Ok(())
}
