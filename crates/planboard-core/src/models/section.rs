//! Section model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// A user-owned, ranked group of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Unique identifier for the section
    pub id: u64,

    /// User who owns the section
    pub owner_user_id: u64,

    /// Title of the section
    pub title: String,

    /// 1-based position among the owner's sections
    pub rank: u32,

    /// Timestamp when the section was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the section was last modified (UTC)
    pub updated_at: Timestamp,

    /// Tasks in rank order (lazy-loaded by default)
    #[serde(default)]
    pub tasks: Vec<Task>,
}
