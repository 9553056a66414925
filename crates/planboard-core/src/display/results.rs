//! Result wrapper types for displaying operation outcomes.
//!
//! These wrap the resource returned by a create, update or delete and add a
//! one-line confirmation above its normal rendering.

use std::fmt;

use crate::models::{Section, Task};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use planboard_core::{display::CreateResult, models::Section};
///
/// let section = Section {
///     id: 1,
///     owner_user_id: 7,
///     title: "Today".to_string(),
///     rank: 1,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     tasks: vec![],
/// };
///
/// let output = format!("{}", CreateResult::new(section));
/// assert!(output.contains("Created section with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Section> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created section with ID: {} at position {}",
            self.resource.id, self.resource.rank
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created task with ID: {} in section {}",
            self.resource.id, self.resource.section_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Section> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated section with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Section> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tasks = self.resource.tasks.len();
        if tasks > 0 {
            writeln!(
                f,
                "Deleted section '{}' (ID: {}) and its {tasks} task(s)",
                self.resource.title, self.resource.id
            )
        } else {
            writeln!(
                f,
                "Deleted section '{}' (ID: {})",
                self.resource.title, self.resource.id
            )
        }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn task() -> Task {
        Task {
            id: 4,
            section_id: 2,
            owner_user_id: 7,
            title: "Walk dog".to_string(),
            content: "Around the block".to_string(),
            is_completed: false,
            rank: 1,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(task(), vec!["Marked as done".to_string()]);
        let output = format!("{result}");
        assert!(output.starts_with("Updated task with ID: 4"));
        assert!(output.contains("Changes made:\n- Marked as done"));
        assert!(output.contains("Around the block"));
    }

    #[test]
    fn test_delete_section_mentions_cascaded_tasks() {
        let section = Section {
            id: 2,
            owner_user_id: 7,
            title: "Today".to_string(),
            rank: 1,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
            tasks: vec![task()],
        };
        assert_eq!(
            format!("{}", DeleteResult::new(section)),
            "Deleted section 'Today' (ID: 2) and its 1 task(s)\n"
        );
        assert_eq!(
            format!("{}", DeleteResult::new(task())),
            "Deleted task 'Walk dog' (ID: 4)\n"
        );
    }
}
