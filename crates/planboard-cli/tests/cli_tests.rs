use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command for `user` against the given database, without colors
fn planboard_cmd(db_path: &std::path::Path, user: u64) -> Command {
    let mut cmd = Command::cargo_bin("planboard").expect("Failed to find planboard binary");
    cmd.env_remove("PLANBOARD_USER")
        .arg("--no-color")
        .args(["--database-file", db_path.to_str().unwrap()])
        .args(["--user", &user.to_string()]);
    cmd
}

#[test]
fn test_cli_requires_user() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    Command::cargo_bin("planboard")
        .unwrap()
        .env_remove("PLANBOARD_USER")
        .args(["--no-color", "--database-file", db_path.to_str().unwrap()])
        .args(["section", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user given"));
}

#[test]
fn test_cli_user_from_environment() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    Command::cargo_bin("planboard")
        .unwrap()
        .env("PLANBOARD_USER", "7")
        .args(["--no-color", "--database-file", db_path.to_str().unwrap()])
        .args(["section", "create", "Today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created section with ID: 1"));
}

#[test]
fn test_cli_default_command_shows_empty_board() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    planboard_cmd(&db_path, 7)
        .assert()
        .success()
        .stdout(predicate::str::contains("No sections found."));
}

#[test]
fn test_cli_create_section_and_task() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    planboard_cmd(&db_path, 7)
        .args(["section", "create", "Today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created section with ID: 1 at position 1"))
        .stdout(predicate::str::contains("# 1. Today"));

    planboard_cmd(&db_path, 7)
        .args(["task", "add", "1", "Walk dog", "--content", "Around the block"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: 1 in section 1"))
        .stdout(predicate::str::contains("### 1. Walk dog (○ Todo)"))
        .stdout(predicate::str::contains("Around the block"));

    planboard_cmd(&db_path, 7)
        .args(["section", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Today (ID: 1) (0/1)"));
}

#[test]
fn test_cli_blank_title_is_rejected() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    planboard_cmd(&db_path, 7)
        .args(["section", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title must not be empty"));
}

#[test]
fn test_cli_other_users_cannot_see_sections() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    planboard_cmd(&db_path, 1)
        .args(["section", "create", "Private"])
        .assert()
        .success();

    planboard_cmd(&db_path, 2)
        .args(["section", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Section with ID 1 not found"));

    planboard_cmd(&db_path, 1)
        .args(["section", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Private"));
}

#[test]
fn test_cli_update_and_delete_task() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    planboard_cmd(&db_path, 7)
        .args(["section", "create", "Today"])
        .assert()
        .success();
    for title in ["Buy milk", "Walk dog"] {
        planboard_cmd(&db_path, 7)
            .args(["task", "add", "1", title])
            .assert()
            .success();
    }

    planboard_cmd(&db_path, 7)
        .args(["task", "update", "2", "--done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as done"))
        .stdout(predicate::str::contains("✓ Done"));

    planboard_cmd(&db_path, 7)
        .args(["task", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'Buy milk' (ID: 1)"));

    planboard_cmd(&db_path, 7)
        .args(["task", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Walk dog (✓ Done)"));
}

#[test]
fn test_cli_move_task_between_sections() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    for title in ["S1", "S2"] {
        planboard_cmd(&db_path, 7)
            .args(["section", "create", title])
            .assert()
            .success();
    }
    for (section, title) in [("1", "A"), ("1", "B"), ("2", "C")] {
        planboard_cmd(&db_path, 7)
            .args(["task", "add", section, title])
            .assert()
            .success();
    }

    planboard_cmd(&db_path, 7)
        .args(["task", "move", "1", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Moved from section 1 position 1 to section 2 position 1",
        ));

    planboard_cmd(&db_path, 7)
        .args(["board", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] 1. B (ID: 2)"))
        .stdout(predicate::str::contains("- [ ] 1. A (ID: 1)"))
        .stdout(predicate::str::contains("- [ ] 2. C (ID: 3)"));

    planboard_cmd(&db_path, 7)
        .args(["task", "move", "2", "2", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dest_rank"));
}

#[test]
fn test_cli_reorder_sections() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    for title in ["First", "Second"] {
        planboard_cmd(&db_path, 7)
            .args(["section", "create", title])
            .assert()
            .success();
    }

    planboard_cmd(&db_path, 7)
        .args(["section", "reorder", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reorder rejected"));

    planboard_cmd(&db_path, 7)
        .args(["section", "reorder", "2,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Reordered 2 section(s)"));

    planboard_cmd(&db_path, 7)
        .args(["section", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Second (ID: 2)"))
        .stdout(predicate::str::contains("## 2. First (ID: 1)"));

    planboard_cmd(&db_path, 7)
        .args(["section", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-ranked 0 section(s)"));
}

#[test]
fn test_cli_board_apply_from_stdin() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    for title in ["Today", "Later"] {
        planboard_cmd(&db_path, 7)
            .args(["section", "create", title])
            .assert()
            .success();
    }
    for title in ["A", "B"] {
        planboard_cmd(&db_path, 7)
            .args(["task", "add", "1", title])
            .assert()
            .success();
    }

    let payload = r#"[
        {"section_id": 2, "tasks": [{"task_id": 2, "dest_section_id": 2}]},
        {"section_id": 1, "tasks": [{"task_id": 1}]}
    ]"#;

    planboard_cmd(&db_path, 7)
        .args(["board", "apply", "-"])
        .write_stdin(payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Later (ID: 2)"))
        .stdout(predicate::str::contains("- [ ] 1. B (ID: 2)"))
        .stdout(predicate::str::contains("## 2. Today (ID: 1)"))
        .stdout(predicate::str::contains("- [ ] 1. A (ID: 1)"));

    // Leaving out a task rejects the whole payload
    let incomplete = r#"[{"section_id": 1, "tasks": []},
        {"section_id": 2, "tasks": [{"task_id": 2}]}]"#;
    planboard_cmd(&db_path, 7)
        .args(["board", "apply", "-"])
        .write_stdin(incomplete)
        .assert()
        .failure()
        .stderr(predicate::str::contains("every task must be included"));
}

#[test]
fn test_cli_board_apply_rejects_malformed_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let payload_path = temp_dir.path().join("board.json");
    std::fs::write(&payload_path, "{not json").unwrap();

    planboard_cmd(&db_path, 7)
        .args(["board", "apply", payload_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid board payload"));
}
