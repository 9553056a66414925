//! Markdown display wrappers for sections, tasks and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]). Collections
//! and operation outcomes get newtype wrappers so every interface prints the
//! same markdown, which the CLI then renders for the terminal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (Section, Task) │───▶│ (Board, Tasks,  │───▶│    Output       │
//! │                 │    │  CreateResult)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `SectionSummaries`, `Tasks`, `Board`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime`
//!
//! # Examples
//!
//! ```rust
//! use planboard_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Re-ranked 2 tasks in section 4");
//! assert_eq!(status.to_string(), "Success: Re-ranked 2 tasks in section 4\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Board, SectionSummaries, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
