use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary directory plus the database path inside it
fn create_cli_test_environment() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir
        .path()
        .join("cli_test.db")
        .to_str()
        .expect("temp path is UTF-8")
        .to_string();
    (temp_dir, db_path)
}

/// Command with --no-color and the given database
fn summit_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("summit").expect("Failed to find summit binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

/// Runs a create command and returns the new ID
fn create(db_path: &str, args: &[&str]) -> String {
    let output = summit_cmd(db_path)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Invalid UTF-8");
    extract_id_from_output(&output)
}

fn extract_id_from_output(output: &str) -> String {
    let Some(start) = output.find("ID: ") else {
        panic!("Could not extract ID from output: {output}");
    };
    output[start + 4..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect()
}

#[test]
fn test_cli_create_goal() {
    let (_temp_dir, db) = create_cli_test_environment();

    summit_cmd(&db)
        .args([
            "goal",
            "create",
            "Run a marathon",
            "--difficulty",
            "custom:marathon",
            "--tags",
            "health,endurance",
            "--focus",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal with ID: 1"))
        .stdout(predicate::str::contains("### 1. Run a marathon ★ (○ Not Started)"))
        .stdout(predicate::str::contains("- Difficulty: custom:marathon"))
        .stdout(predicate::str::contains("- Tags: health, endurance"));
}

#[test]
fn test_cli_create_goal_rejects_bad_difficulty() {
    let (_temp_dir, db) = create_cli_test_environment();

    summit_cmd(&db)
        .args(["goal", "create", "Nope", "--difficulty", "legendary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid difficulty"));
}

#[test]
fn test_cli_list_empty() {
    let (_temp_dir, db) = create_cli_test_environment();

    summit_cmd(&db)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals found."));

    // No subcommand lists super goals.
    summit_cmd(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Super Goals"))
        .stdout(predicate::str::contains("No super goals found."));
}

#[test]
fn test_cli_update_and_show_goal() {
    let (_temp_dir, db) = create_cli_test_environment();
    let id = create(&db, &["goal", "create", "Read Dune"]);

    summit_cmd(&db)
        .args(["goal", "update", &id, "--status", "validated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed status to validated"));

    summit_cmd(&db)
        .args(["goal", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("★ Validated"));
}

#[test]
fn test_cli_show_unknown_goal() {
    let (_temp_dir, db) = create_cli_test_environment();

    summit_cmd(&db)
        .args(["goal", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal with ID 99 not found"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let (_temp_dir, db) = create_cli_test_environment();
    let id = create(&db, &["goal", "create", "Keep me"]);

    summit_cmd(&db)
        .args(["goal", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete goal"));

    summit_cmd(&db)
        .args(["goal", "delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted goal 'Keep me'"));
}

#[test]
fn test_cli_dynamic_super_goal() {
    let (_temp_dir, db) = create_cli_test_environment();
    create(
        &db,
        &["goal", "create", "Run 10k", "--difficulty", "easy", "--status", "fully_completed", "--tags", "health"],
    );
    create(
        &db,
        &["goal", "create", "Deadlift", "--difficulty", "hard", "--status", "in_progress", "--tags", "health"],
    );
    create(
        &db,
        &["goal", "create", "Save 10%", "--difficulty", "medium", "--tags", "finance"],
    );

    let id = create(
        &db,
        &["super", "create", "Health", "--difficulty", "easy,hard", "--exclude-completed"],
    );

    summit_cmd(&db)
        .args(["super", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Mode: dynamic"))
        .stdout(predicate::str::contains("2. Deadlift"))
        .stdout(predicate::str::contains("Run 10k").not())
        .stdout(predicate::str::contains("Save 10%").not());

    summit_cmd(&db)
        .args(["super", "rule", &id, "--tag", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set rule to tags: health"));

    summit_cmd(&db)
        .args(["super", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Health (ID: 4) 1/2"))
        .stdout(predicate::str::contains("50% (1/2)"));
}

#[test]
fn test_cli_snapshot_and_promote() {
    let (_temp_dir, db) = create_cli_test_environment();
    create(&db, &["goal", "create", "Swim", "--tags", "health"]);
    let id = create(&db, &["super", "create", "Health", "--tag", "health"]);

    summit_cmd(&db)
        .args(["super", "snapshot", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Froze 1 goal(s)"))
        .stdout(predicate::str::contains("- Mode: static"))
        .stdout(predicate::str::contains("- Retained rule: tags: health"));

    // Static super goals do not follow new matches.
    create(&db, &["goal", "create", "Cycle", "--tags", "health"]);
    summit_cmd(&db)
        .args(["super", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle").not());

    summit_cmd(&db)
        .args(["super", "promote", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to dynamic mode with rule: tags: health"));

    summit_cmd(&db)
        .args(["super", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle"));
}

#[test]
fn test_cli_static_super_goal_missing_child() {
    let (_temp_dir, db) = create_cli_test_environment();
    let done = create(&db, &["goal", "create", "Read Dune", "--status", "fully_completed"]);
    let gone = create(&db, &["goal", "create", "Read Ulysses"]);
    let children = format!("{done},{gone}");
    let id = create(&db, &["super", "create", "Reading", "--children", &children]);

    summit_cmd(&db)
        .args(["goal", "delete", &gone, "--confirm"])
        .assert()
        .success();

    summit_cmd(&db)
        .args(["super", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Goal {gone} is missing")))
        .stdout(predicate::str::contains("1 selected goal(s) no longer exist"));

    summit_cmd(&db)
        .args(["super", "select", &id, "--remove", &gone])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Removed goals {gone}")));
}

#[test]
fn test_cli_update_super_goal_details() {
    let (_temp_dir, db) = create_cli_test_environment();
    create(&db, &["goal", "create", "Swim", "--tags", "health"]);
    let id = create(&db, &["super", "create", "Health", "--tag", "health"]);

    summit_cmd(&db)
        .args(["super", "update", &id, "--name", "Body", "--difficulty", "custom:iron"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated super goal with ID: {id}")))
        .stdout(predicate::str::contains("Renamed to 'Body'"))
        .stdout(predicate::str::contains("- Difficulty: custom:iron"))
        .stdout(predicate::str::contains("- Rule: tags: health"));

    summit_cmd(&db)
        .args(["super", "update", "99", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to update super goal"));
}

#[test]
fn test_cli_select_on_dynamic_fails() {
    let (_temp_dir, db) = create_cli_test_environment();
    let goal = create(&db, &["goal", "create", "Swim"]);
    let id = create(&db, &["super", "create", "Everything", "--dynamic"]);

    summit_cmd(&db)
        .args(["super", "select", &id, "--add", &goal])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to select goals"));
}

#[test]
fn test_cli_preview_saves_nothing() {
    let (_temp_dir, db) = create_cli_test_environment();
    create(&db, &["goal", "create", "Swim", "--tags", "health"]);

    summit_cmd(&db)
        .args(["super", "preview", "--rule-json", r#"{"tags":["health"]}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Preview 0/1"))
        .stdout(predicate::str::contains("1. Swim"));

    summit_cmd(&db)
        .args(["super", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No super goals found."));
}

#[test]
fn test_cli_help_output() {
    let (_temp_dir, db) = create_cli_test_environment();

    summit_cmd(&db)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("goal"))
        .stdout(predicate::str::contains("super"))
        .stdout(predicate::str::contains("serve"));

    summit_cmd(&db)
        .args(["super", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot"))
        .stdout(predicate::str::contains("promote"))
        .stdout(predicate::str::contains("update"));
}
