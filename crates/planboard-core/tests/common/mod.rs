#![allow(dead_code)]

use planboard_core::{Database, Planner, PlannerBuilder, Section, Task};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

pub fn add_section(db: &mut Database, user_id: u64, title: &str) -> Section {
    db.create_section(user_id, title)
        .expect("Failed to create section")
}

pub fn add_task(db: &mut Database, user_id: u64, section_id: u64, title: &str) -> Task {
    db.create_task(user_id, section_id, title, None)
        .expect("Failed to create task")
}

/// `(title, rank)` of every task in a section, in rank order.
pub fn task_layout(db: &Database, user_id: u64, section_id: u64) -> Vec<(String, u32)> {
    db.list_tasks(user_id, section_id)
        .expect("Failed to list tasks")
        .into_iter()
        .map(|t| (t.title, t.rank))
        .collect()
}

/// `(title, rank)` of every section of a user, in rank order.
pub fn section_layout(db: &Database, user_id: u64) -> Vec<(String, u32)> {
    db.list_sections(user_id)
        .expect("Failed to list sections")
        .into_iter()
        .map(|s| (s.title, s.rank))
        .collect()
}

pub fn pairs(items: &[(&str, u32)]) -> Vec<(String, u32)> {
    items.iter().map(|(t, r)| (t.to_string(), *r)).collect()
}
