//! Tests for the planner module.

use std::time::Duration;

use tempfile::TempDir;

use super::*;
use crate::params::{
    CreateSection, CreateTask, Id, MoveTask, RenameSection, ReorderSections, UpdateTask,
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

async fn section(planner: &Planner, user_id: u64, title: &str) -> crate::models::Section {
    planner
        .create_section(
            user_id,
            &CreateSection {
                title: title.to_string(),
            },
        )
        .await
        .expect("Failed to create section")
}

async fn task(
    planner: &Planner,
    user_id: u64,
    section_id: u64,
    title: &str,
) -> crate::models::Task {
    planner
        .create_task(
            user_id,
            &CreateTask {
                section_id,
                title: title.to_string(),
                content: None,
            },
        )
        .await
        .expect("Failed to create task")
}

#[tokio::test]
async fn test_builder_creates_database_in_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("a").join("b").join("board.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_busy_timeout(Duration::from_millis(250))
        .build()
        .await
        .expect("Failed to create planner");

    assert!(db_path.exists());
    assert_eq!(planner.database_path(), db_path.as_path());
    assert_eq!(planner.busy_timeout, Duration::from_millis(250));
}

#[tokio::test]
async fn test_list_sections_summary_counts_tasks() {
    let (_temp_dir, planner) = create_test_planner().await;

    let today = section(&planner, 7, "Today").await;
    section(&planner, 7, "Later").await;
    let walk = task(&planner, 7, today.id, "Walk dog").await;
    task(&planner, 7, today.id, "Buy milk").await;

    planner
        .update_task(
            7,
            &UpdateTask {
                id: walk.id,
                is_completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let summaries = planner.list_sections_summary(7).await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].title, "Today");
    assert_eq!(summaries[0].total_tasks, 2);
    assert_eq!(summaries[0].completed_tasks, 1);
    assert_eq!(summaries[1].title, "Later");
    assert_eq!(summaries[1].total_tasks, 0);

    // Other users see nothing
    assert!(planner.list_sections_summary(8).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rename_section_result_records_old_title() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = section(&planner, 7, "Today").await;

    let result = planner
        .rename_section_result(
            7,
            &RenameSection {
                id: today.id,
                title: "  This week ".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(result.resource.title, "This week");
    assert_eq!(result.resource.rank, 1);
    assert_eq!(result.changes, vec!["Renamed from 'Today'".to_string()]);
}

#[tokio::test]
async fn test_update_task_result_describes_changes() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = section(&planner, 7, "Today").await;
    let walk = task(&planner, 7, today.id, "Walk dog").await;

    let result = planner
        .update_task_result(
            7,
            &UpdateTask {
                id: walk.id,
                content: Some("Twice".to_string()),
                is_completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.resource.content, "Twice");
    assert!(result.resource.is_completed);
    assert_eq!(result.resource.rank, walk.rank);
    assert_eq!(
        result.changes,
        vec!["Updated content".to_string(), "Marked as done".to_string()]
    );
}

#[tokio::test]
async fn test_update_task_rejects_blank_title_before_touching_database() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = section(&planner, 7, "Today").await;
    let walk = task(&planner, 7, today.id, "Walk dog").await;

    let err = planner
        .update_task(
            7,
            &UpdateTask {
                id: walk.id,
                title: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BoardError::InvalidInput { .. }));

    let unchanged = planner.get_task(7, &Id { id: walk.id }).await.unwrap();
    assert_eq!(unchanged.title, "Walk dog");
}

#[tokio::test]
async fn test_delete_section_result_counts_cascaded_tasks() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = section(&planner, 7, "Today").await;
    let later = section(&planner, 7, "Later").await;
    task(&planner, 7, today.id, "Walk dog").await;
    task(&planner, 7, today.id, "Buy milk").await;

    let result = planner
        .delete_section_result(7, &Id { id: today.id })
        .await
        .unwrap();
    assert_eq!(result.resource.tasks.len(), 2);

    let remaining = planner.list_sections(7).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, later.id);
    assert_eq!(remaining[0].rank, 1);
}

#[tokio::test]
async fn test_move_task_result_describes_origin() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = section(&planner, 7, "Today").await;
    let later = section(&planner, 7, "Later").await;
    let walk = task(&planner, 7, today.id, "Walk dog").await;

    let result = planner
        .move_task_result(
            7,
            &MoveTask {
                id: walk.id,
                dest_section_id: later.id,
                dest_rank: 1,
            },
        )
        .await
        .unwrap();

    assert_eq!(result.resource.section_id, later.id);
    assert_eq!(
        result.changes,
        vec![format!(
            "Moved from section {} position 1 to section {} position 1",
            today.id, later.id
        )]
    );
}

#[tokio::test]
async fn test_reorder_sections_result_and_board() {
    let (_temp_dir, planner) = create_test_planner().await;
    let a = section(&planner, 7, "A").await;
    let b = section(&planner, 7, "B").await;
    let c = section(&planner, 7, "C").await;

    let status = planner
        .reorder_sections_result(
            7,
            &ReorderSections {
                section_ids: vec![c.id, a.id, b.id],
            },
        )
        .await
        .unwrap();
    assert_eq!(status.message, "Reordered 3 section(s)");

    let board = planner.show_board(7).await.unwrap();
    let titles: Vec<_> = board.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
    let ranks: Vec<_> = board.iter().map(|s| s.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_compact_results_on_dense_scopes() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = section(&planner, 7, "Today").await;
    task(&planner, 7, today.id, "Walk dog").await;

    let status = planner.compact_sections_result(7).await.unwrap();
    assert_eq!(status.message, "Re-ranked 0 section(s)");

    let status = planner
        .compact_tasks_result(7, &Id { id: today.id })
        .await
        .unwrap();
    assert_eq!(
        status.message,
        format!("Re-ranked 0 task(s) in section {}", today.id)
    );
}
