//! Section summary model for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Lightweight section row with task counts, used for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionSummary {
    pub id: u64,
    pub owner_user_id: u64,
    pub title: String,
    pub rank: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub total_tasks: u32,
    pub completed_tasks: u32,
}
