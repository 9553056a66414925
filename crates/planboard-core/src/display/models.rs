//! Display implementations for sections, tasks and section summaries.
//!
//! Output is markdown. A section renders as a top-level header followed by
//! its tasks; a task renders as a third-level header so it nests cleanly
//! under a section or a board.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Section, SectionSummary, Task};

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Position: {}", self.rank)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this section.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.rank,
            self.title,
            self.status_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- ID: {} (section {})", self.id, self.section_id)?;
        writeln!(f)?;

        if !self.content.is_empty() {
            writeln!(f, "{}", self.content)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(
            f,
            "## {}. {} (ID: {}){progress}",
            self.rank, self.title, self.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        Ok(())
    }
}
