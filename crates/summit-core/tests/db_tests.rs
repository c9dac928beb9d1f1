use summit_core::{
    Database, GoalFilter, GoalStatus, GoalType, MembershipRecord, Rule, TrackerError,
    params::{CreateGoal, CreateSuperGoal, UpdateGoal},
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn create_goal(db: &mut Database, name: &str, status: GoalStatus, is_focus: bool) -> u64 {
    db.create_goal(&CreateGoal {
        name: name.to_string(),
        status: Some(status),
        is_focus,
        tags: vec!["health".to_string()],
        ..Default::default()
    })
    .expect("Failed to create goal")
    .id
}

fn create_static(db: &mut Database, child_goal_ids: Vec<u64>) -> u64 {
    db.create_super_goal(&CreateSuperGoal {
        name: "Static".to_string(),
        child_goal_ids,
        ..Default::default()
    })
    .expect("Failed to create super goal")
    .id
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.list_goals(None).unwrap().is_empty());
}

#[test]
fn test_reopen_existing_database() {
    let (temp_file, mut db) = create_test_db();
    create_goal(&mut db, "Persisted", GoalStatus::InProgress, false);
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_goals(None).unwrap().len(), 1);
}

#[test]
fn test_create_and_get_goal() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_goal(&CreateGoal {
            name: "Climb Kilimanjaro".to_string(),
            description: Some("Before 40".to_string()),
            difficulty: Some("custom:summit".parse().unwrap()),
            status: None,
            is_focus: true,
            tags: vec!["travel".to_string(), "health".to_string()],
        })
        .expect("Failed to create goal");

    let fetched = db.get_goal(created.id).unwrap().expect("goal exists");
    assert_eq!(fetched, created);
    assert_eq!(fetched.status, Some(GoalStatus::NotStarted));
    assert_eq!(fetched.difficulty.unwrap().to_string(), "custom:summit");
}

#[test]
fn test_get_goal_unknown_is_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_goal(42).unwrap().is_none());
}

#[test]
fn test_list_goals_in_creation_order() {
    let (_temp_file, mut db) = create_test_db();
    let ids: Vec<u64> = ["a", "b", "c"]
        .iter()
        .map(|name| create_goal(&mut db, name, GoalStatus::InProgress, false))
        .collect();

    let listed: Vec<u64> = db.list_goals(None).unwrap().iter().map(|g| g.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_list_goals_field_equality_filter() {
    let (_temp_file, mut db) = create_test_db();
    let focus = create_goal(&mut db, "Focus", GoalStatus::InProgress, true);
    create_goal(&mut db, "Paused", GoalStatus::Paused, false);
    create_static(&mut db, vec![focus]);

    let standard = db.list_goals(Some(&GoalFilter::standard())).unwrap();
    assert_eq!(standard.len(), 2);

    let supers = db
        .list_goals(Some(&GoalFilter {
            goal_type: Some(GoalType::Super),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(supers.len(), 1);
    assert_eq!(supers[0].goal_type, GoalType::Super);

    let paused = db
        .list_goals(Some(&GoalFilter {
            status: Some(GoalStatus::Paused),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(paused.len(), 1);
    assert_eq!(paused[0].name, "Paused");

    let focused = db
        .list_goals(Some(&GoalFilter {
            is_focus: Some(true),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(focused.len(), 1);
    assert_eq!(focused[0].id, focus);
}

#[test]
fn test_update_goal_partial() {
    let (_temp_file, mut db) = create_test_db();
    let id = create_goal(&mut db, "Original", GoalStatus::NotStarted, false);

    let updated = db
        .update_goal(&UpdateGoal {
            id,
            status: Some(GoalStatus::Validated),
            tags: Some(vec!["career".to_string()]),
            ..Default::default()
        })
        .expect("Failed to update goal");

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.status, Some(GoalStatus::Validated));
    assert_eq!(updated.tags, ["career"]);
    assert_eq!(db.get_goal(id).unwrap(), Some(updated));
}

#[test]
fn test_update_goal_not_found() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.update_goal(&UpdateGoal {
        id: 77,
        name: Some("Nope".to_string()),
        ..Default::default()
    });
    assert!(matches!(result, Err(TrackerError::GoalNotFound { id: 77 })));
}

#[test]
fn test_delete_goal() {
    let (_temp_file, mut db) = create_test_db();
    let id = create_goal(&mut db, "Temporary", GoalStatus::InProgress, false);

    db.delete_goal(id).expect("Failed to delete goal");
    assert!(db.get_goal(id).unwrap().is_none());
    assert!(matches!(
        db.delete_goal(id),
        Err(TrackerError::GoalNotFound { .. })
    ));
}

#[test]
fn test_deleting_child_keeps_static_reference() {
    let (_temp_file, mut db) = create_test_db();
    let child = create_goal(&mut db, "Child", GoalStatus::InProgress, false);
    let owner = create_static(&mut db, vec![child]);

    db.delete_goal(child).unwrap();
    let super_goal = db.get_super_goal(owner).unwrap().unwrap();
    assert_eq!(super_goal.child_goal_ids, [child]);
}

#[test]
fn test_create_dynamic_super_goal_round_trips_rule() {
    let (_temp_file, mut db) = create_test_db();
    let rule = Rule::new()
        .with_tags(["health"])
        .with_statuses([GoalStatus::InProgress])
        .exclude_completed();

    let created = db
        .create_super_goal(&CreateSuperGoal {
            name: "Health".to_string(),
            rule: Some(rule.clone()),
            ..Default::default()
        })
        .unwrap();

    let fetched = db.get_super_goal(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(fetched.is_dynamic);
    assert_eq!(fetched.rule, Some(rule));
    assert!(fetched.child_goal_ids.is_empty());
}

#[test]
fn test_super_goal_shares_goal_id_space() {
    let (_temp_file, mut db) = create_test_db();
    let goal = create_goal(&mut db, "Goal", GoalStatus::InProgress, false);
    let owner = create_static(&mut db, vec![goal]);

    assert_ne!(goal, owner);
    assert!(db.get_super_goal(goal).unwrap().is_none());
    assert_eq!(
        db.get_goal(owner).unwrap().map(|record| record.goal_type),
        Some(GoalType::Super)
    );
}

#[test]
fn test_update_membership_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();
    let child = create_goal(&mut db, "Child", GoalStatus::InProgress, false);
    let owner = create_static(&mut db, vec![]);

    let record = MembershipRecord {
        child_goal_ids: Some(vec![child]),
        rule: Some(Rule::new().focus_only()),
        is_dynamic: false,
    };
    let first = db.update_super_goal_membership(owner, &record).unwrap();
    let second = db.update_super_goal_membership(owner, &record).unwrap();

    assert_eq!(first.membership_record(), record);
    assert_eq!(second.membership_record(), first.membership_record());
    assert_eq!(db.list_super_goals().unwrap().len(), 1);
}

#[test]
fn test_failed_membership_commit_leaves_state_unchanged() {
    let (_temp_file, mut db) = create_test_db();
    let child = create_goal(&mut db, "Child", GoalStatus::InProgress, false);
    let owner = create_static(&mut db, vec![child]);
    let before = db.get_super_goal(owner).unwrap().unwrap();

    // A standard goal id is not a super goal; nothing may be written.
    let result = db.update_super_goal_membership(
        child,
        &MembershipRecord {
            child_goal_ids: None,
            rule: Some(Rule::new()),
            is_dynamic: true,
        },
    );
    assert!(matches!(result, Err(TrackerError::SuperGoalNotFound { .. })));

    let child_record = db.get_goal(child).unwrap().unwrap();
    assert_eq!(child_record.goal_type, GoalType::Standard);
    assert_eq!(db.get_super_goal(owner).unwrap().unwrap(), before);
}

#[test]
fn test_save_super_goal_unknown_id_fails() {
    let (_temp_file, mut db) = create_test_db();
    let owner = create_static(&mut db, vec![]);
    let mut candidate = db.get_super_goal(owner).unwrap().unwrap();
    db.delete_super_goal(owner).unwrap();

    candidate.name = "Renamed".to_string();
    assert!(matches!(
        db.save_super_goal(&candidate),
        Err(TrackerError::SuperGoalNotFound { .. })
    ));
    assert!(db.list_super_goals().unwrap().is_empty());
}

#[test]
fn test_delete_super_goal_keeps_children() {
    let (_temp_file, mut db) = create_test_db();
    let child = create_goal(&mut db, "Child", GoalStatus::InProgress, false);
    let owner = create_static(&mut db, vec![child]);

    db.delete_super_goal(owner).unwrap();
    assert!(db.get_super_goal(owner).unwrap().is_none());
    assert!(db.get_goal(child).unwrap().is_some());

    // Deleting through the super goal path never touches standard goals.
    assert!(matches!(
        db.delete_super_goal(child),
        Err(TrackerError::SuperGoalNotFound { .. })
    ));
}
