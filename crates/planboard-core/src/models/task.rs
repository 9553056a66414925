//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A ranked item inside a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the section currently holding the task
    pub section_id: u64,

    /// Owner of the holding section. Derived on read, never stored on the
    /// task row.
    pub owner_user_id: u64,

    /// Brief title of the task
    pub title: String,

    /// Free-form body text
    #[serde(default)]
    pub content: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub is_completed: bool,

    /// 1-based position within the section
    pub rank: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Completion state with a consistent icon for display.
    ///
    /// ```rust
    /// # use planboard_core::models::Task;
    /// # use jiff::Timestamp;
    /// # let mut task = Task {
    /// #     id: 1, section_id: 1, owner_user_id: 1, title: "t".into(),
    /// #     content: String::new(), is_completed: false, rank: 1,
    /// #     created_at: Timestamp::now(), updated_at: Timestamp::now(),
    /// # };
    /// assert_eq!(task.status_icon(), "○ Todo");
    /// task.is_completed = true;
    /// assert_eq!(task.status_icon(), "✓ Done");
    /// ```
    pub fn status_icon(&self) -> &'static str {
        if self.is_completed {
            "✓ Done"
        } else {
            "○ Todo"
        }
    }
}
