//! Rank scopes: the grouping keys within which ranks must be dense.

use std::fmt;

/// A group of rows whose `sort_order` values must always be exactly
/// `1..=count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankScope {
    /// All sections owned by one user
    Sections { user_id: u64 },
    /// All tasks currently inside one section
    Tasks { section_id: u64 },
}

impl RankScope {
    /// Table holding the ranked rows.
    pub(crate) fn table(&self) -> &'static str {
        match self {
            RankScope::Sections { .. } => "sections",
            RankScope::Tasks { .. } => "tasks",
        }
    }

    /// Column holding the scope key.
    pub(crate) fn key_column(&self) -> &'static str {
        match self {
            RankScope::Sections { .. } => "user_id",
            RankScope::Tasks { .. } => "section_id",
        }
    }

    /// The scope key as stored in SQLite.
    pub(crate) fn key(&self) -> i64 {
        match self {
            RankScope::Sections { user_id } => *user_id as i64,
            RankScope::Tasks { section_id } => *section_id as i64,
        }
    }
}

impl fmt::Display for RankScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankScope::Sections { user_id } => write!(f, "sections of user {user_id}"),
            RankScope::Tasks { section_id } => write!(f, "tasks of section {section_id}"),
        }
    }
}
