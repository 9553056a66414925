//! Core library for Planboard: per-user ordered sections holding ordered
//! tasks.
//!
//! Every section has a `rank` among its owner's sections and every task a
//! `rank` within its section. Ranks are kept dense (`1..=count`) through
//! creation, deletion, moves and batch reorders, each of which runs as a
//! single SQLite transaction.
//!
//! # Layers
//!
//! - [`planner`]: async facade; every operation takes the acting `user_id`
//! - [`db`]: SQLite persistence and the ranking primitives in [`db::ranks`]
//! - [`models`] and [`params`]: data and request types
//! - [`display`]: markdown formatting for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use planboard_core::{
//!     params::{CreateSection, CreateTask, Id, MoveTask},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("planboard.db")))
//!     .build()
//!     .await?;
//!
//! let user = 7;
//! let today = planner
//!     .create_section(user, &CreateSection { title: "Today".to_string() })
//!     .await?;
//! let later = planner
//!     .create_section(user, &CreateSection { title: "Later".to_string() })
//!     .await?;
//! let task = planner
//!     .create_task(
//!         user,
//!         &CreateTask {
//!             section_id: today.id,
//!             title: "Walk dog".to_string(),
//!             content: None,
//!         },
//!     )
//!     .await?;
//!
//! planner
//!     .move_task(
//!         user,
//!         &MoveTask {
//!             id: task.id,
//!             dest_section_id: later.id,
//!             dest_rank: 1,
//!         },
//!     )
//!     .await?;
//!
//! let board = planner.show_board(user).await?;
//! println!("{board}");
//! assert!(planner.list_tasks(user, &Id { id: today.id }).await?.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Board, CreateResult, DeleteResult, LocalDateTime, OperationStatus, SectionSummaries, Tasks,
    UpdateResult,
};
pub use error::{BoardError, Entity, Result};
pub use models::{RankScope, Section, SectionSummary, Task, UpdateTaskRequest};
pub use params::{
    CreateSection, CreateTask, Id, MoveTask, RenameSection, ReorderBoard, ReorderSections,
    ReorderTasks, SectionLayout, TaskPlacement, UpdateTask,
};
pub use planner::{Planner, PlannerBuilder};
