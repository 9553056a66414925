//! Data models for sections and tasks.
//!
//! Display implementations live in [`crate::display::models`], keeping the
//! data structures free of presentation logic.
//!
//! Every section and task carries a `rank`: its 1-based position inside its
//! [`RankScope`]. The database layer keeps each scope dense, so the ranks of
//! a user's sections (or of one section's tasks) are always exactly
//! `1..=count`.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use planboard_core::models::{Section, Task};
//!
//! let task = Task {
//!     id: 3,
//!     section_id: 1,
//!     owner_user_id: 7,
//!     title: "Walk dog".to_string(),
//!     content: String::new(),
//!     is_completed: false,
//!     rank: 1,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//! let section = Section {
//!     id: 1,
//!     owner_user_id: 7,
//!     title: "Today".to_string(),
//!     rank: 1,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     tasks: vec![task],
//! };
//! println!("{}", section); // Markdown header with the nested task list
//! ```

pub mod requests;
pub mod scope;
pub mod section;
pub mod summary;
pub mod task;


pub use requests::UpdateTaskRequest;
pub use scope::RankScope;
pub use section::Section;
pub use summary::SectionSummary;
pub use task::Task;
