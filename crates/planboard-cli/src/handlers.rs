//! Command dispatch: runs planner operations for one user and renders the
//! results.

use std::{
    fmt::Display,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::warn;
use planboard_core::{params::ReorderBoard, BoardError, Planner, RankScope};

use crate::{
    cli::{BoardCommands, SectionCommands, TaskCommands},
    renderer::TerminalRenderer,
};

/// Command handler bound to one planner, renderer and acting user.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    user_id: u64,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, user_id: u64) -> Self {
        Self {
            planner,
            renderer,
            user_id,
        }
    }

    fn print(&self, output: &impl Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }

    pub async fn handle_section_command(&self, command: SectionCommands) -> Result<()> {
        let user = self.user_id;
        let planner = &self.planner;

        match command {
            SectionCommands::Create(args) => {
                let result = planner
                    .create_section_result(user, &args.into())
                    .await
                    .context("Failed to create section")?;
                self.print(&result)
            }
            SectionCommands::List => {
                let sections = planner
                    .list_sections_summary(user)
                    .await
                    .context("Failed to list sections")?;
                self.print(&sections)
            }
            SectionCommands::Show(args) => {
                let section = planner
                    .get_section(user, &args.into())
                    .await
                    .context("Failed to show section")?;
                self.print(&section)
            }
            SectionCommands::Rename(args) => {
                let result = planner
                    .rename_section_result(user, &args.into())
                    .await
                    .context("Failed to rename section")?;
                self.print(&result)
            }
            SectionCommands::Delete(args) => {
                let result = planner
                    .delete_section_result(user, &args.into())
                    .await
                    .map_err(with_recovery_hint)
                    .context("Failed to delete section")?;
                self.print(&result)
            }
            SectionCommands::Reorder(args) => {
                let status = planner
                    .reorder_sections_result(user, &args.into())
                    .await
                    .context("Failed to reorder sections")?;
                self.print(&status)
            }
            SectionCommands::Compact => {
                let status = planner
                    .compact_sections_result(user)
                    .await
                    .context("Failed to compact sections")?;
                self.print(&status)
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let user = self.user_id;
        let planner = &self.planner;

        match command {
            TaskCommands::Add(args) => {
                let result = planner
                    .create_task_result(user, &args.into())
                    .await
                    .context("Failed to add task")?;
                self.print(&result)
            }
            TaskCommands::Show(args) => {
                let task = planner
                    .get_task(user, &args.into())
                    .await
                    .context("Failed to show task")?;
                self.print(&task)
            }
            TaskCommands::List(args) => {
                let tasks = planner
                    .list_tasks_result(user, &args.into())
                    .await
                    .context("Failed to list tasks")?;
                self.print(&tasks)
            }
            TaskCommands::Update(args) => {
                let result = planner
                    .update_task_result(user, &args.into())
                    .await
                    .context("Failed to update task")?;
                self.print(&result)
            }
            TaskCommands::Delete(args) => {
                let result = planner
                    .delete_task_result(user, &args.into())
                    .await
                    .map_err(with_recovery_hint)
                    .context("Failed to delete task")?;
                self.print(&result)
            }
            TaskCommands::Move(args) => {
                let result = planner
                    .move_task_result(user, &args.into())
                    .await
                    .context("Failed to move task")?;
                self.print(&result)
            }
            TaskCommands::Reorder(args) => {
                let status = planner
                    .reorder_tasks_result(user, &args.into())
                    .await
                    .context("Failed to reorder tasks")?;
                self.print(&status)
            }
            TaskCommands::Compact(args) => {
                let status = planner
                    .compact_tasks_result(user, &args.into())
                    .await
                    .context("Failed to compact tasks")?;
                self.print(&status)
            }
        }
    }

    pub async fn handle_board_command(&self, command: BoardCommands) -> Result<()> {
        match command {
            BoardCommands::Show => self.show_board().await,
            BoardCommands::Apply(args) => {
                let json = read_payload(&args.file)?;
                let board = ReorderBoard::from_json(&json).context("Invalid board payload")?;
                let result = self
                    .planner
                    .reorder_board_result(self.user_id, &board)
                    .await
                    .context("Failed to apply board")?;
                self.print(&result)
            }
        }
    }

    pub async fn show_board(&self) -> Result<()> {
        let board = self
            .planner
            .show_board(self.user_id)
            .await
            .context("Failed to show board")?;
        self.print(&board)
    }
}

/// Reads a payload from a file, or from stdin when the path is `-`.
fn read_payload(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read board payload from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board payload from {}", path.display()))
    }
}

/// Attaches the repair command to errors that leave ranks sparse.
fn with_recovery_hint(err: BoardError) -> anyhow::Error {
    let hint = match &err {
        BoardError::ReorderFailed {
            scope: RankScope::Sections { .. },
            ..
        } => "run `planboard section compact` to repair positions".to_string(),
        BoardError::ReorderFailed {
            scope: RankScope::Tasks { section_id },
            ..
        } => format!("run `planboard task compact {section_id}` to repair positions"),
        _ => return err.into(),
    };
    warn!("{err}");
    anyhow::Error::new(err).context(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_hint_names_compact_command() {
        let err = with_recovery_hint(BoardError::ReorderFailed {
            scope: RankScope::Tasks { section_id: 4 },
            source: Box::new(BoardError::conflict("blocked")),
        });
        assert_eq!(
            err.to_string(),
            "run `planboard task compact 4` to repair positions"
        );

        let plain = with_recovery_hint(BoardError::section_not_found(9));
        assert_eq!(plain.to_string(), "Section with ID 9 not found");
    }
}
