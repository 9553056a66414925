//! Collection wrapper types for displaying groups of sections and tasks.
//!
//! Each wrapper formats its members with their own `Display` impls and
//! prints a short notice when the collection is empty.

use std::{fmt, ops::Index};

use crate::models::{Section, SectionSummary, Task};

/// Newtype wrapper for displaying a user's section listing.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use planboard_core::{display::SectionSummaries, models::SectionSummary};
///
/// let summary = SectionSummary {
///     id: 1,
///     owner_user_id: 7,
///     title: "Today".to_string(),
///     rank: 1,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     total_tasks: 3,
///     completed_tasks: 1,
/// };
///
/// let output = format!("{}", SectionSummaries(vec![summary]));
/// assert!(output.contains("Today"));
/// assert!(output.contains("(1/3)"));
/// ```
pub struct SectionSummaries(pub Vec<SectionSummary>);

impl SectionSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sections in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the section summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionSummary> {
        self.0.iter()
    }
}

impl Index<usize> for SectionSummaries {
    type Output = SectionSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SectionSummaries {
    type Item = &'a SectionSummary;
    type IntoIter = std::slice::Iter<'a, SectionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SectionSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No sections found.")
        } else {
            for section in &self.0 {
                write!(f, "{section}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the tasks of one section.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

/// A user's whole board: sections in rank order, each with its tasks.
///
/// Unlike a standalone [`Section`], sections on a board render as second
/// level headers with a compact task checklist.
pub struct Board(pub Vec<Section>);

impl Board {
    /// Check if the board has no sections.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sections on the board.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the sections.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.0.iter()
    }

    /// Total number of tasks across all sections.
    pub fn task_count(&self) -> usize {
        self.0.iter().map(|s| s.tasks.len()).sum()
    }
}

impl Index<usize> for Board {
    type Output = Section;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No sections found.");
        }

        for section in &self.0 {
            writeln!(f, "## {}. {} (ID: {})", section.rank, section.title, section.id)?;
            writeln!(f)?;
            if section.tasks.is_empty() {
                writeln!(f, "_empty_")?;
            }
            for task in &section.tasks {
                let mark = if task.is_completed { "x" } else { " " };
                writeln!(f, "- [{mark}] {}. {} (ID: {})", task.rank, task.title, task.id)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn ts() -> Timestamp {
        Timestamp::from_second(1640995200).unwrap() // 2022-01-01 00:00:00 UTC
    }

    fn task(id: u64, rank: u32, title: &str, done: bool) -> Task {
        Task {
            id,
            section_id: 1,
            owner_user_id: 7,
            title: title.to_string(),
            content: String::new(),
            is_completed: done,
            rank,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn section(id: u64, rank: u32, title: &str, tasks: Vec<Task>) -> Section {
        Section {
            id,
            owner_user_id: 7,
            title: title.to_string(),
            rank,
            created_at: ts(),
            updated_at: ts(),
            tasks,
        }
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(format!("{}", SectionSummaries(vec![])), "No sections found.\n");
        assert_eq!(format!("{}", Tasks(vec![])), "No tasks found.\n");
        assert_eq!(format!("{}", Board(vec![])), "No sections found.\n");
    }

    #[test]
    fn test_tasks_display_in_given_order() {
        let tasks = Tasks(vec![task(5, 1, "Walk dog", false), task(2, 2, "Buy milk", true)]);
        let output = format!("{tasks}");

        let walk = output.find("Walk dog").unwrap();
        let milk = output.find("Buy milk").unwrap();
        assert!(walk < milk);
        assert!(output.contains("○ Todo"));
        assert!(output.contains("✓ Done"));
    }

    #[test]
    fn test_board_display_checklist() {
        let board = Board(vec![
            section(1, 1, "Today", vec![task(3, 1, "Walk dog", true)]),
            section(2, 2, "Later", vec![]),
        ]);
        let output = format!("{board}");

        assert!(output.contains("## 1. Today (ID: 1)"));
        assert!(output.contains("- [x] 1. Walk dog (ID: 3)"));
        assert!(output.contains("## 2. Later (ID: 2)"));
        assert!(output.contains("_empty_"));
        assert_eq!(board.task_count(), 1);
    }
}
