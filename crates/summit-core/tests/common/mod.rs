use summit_core::{
    GoalStatus, Tracker, TrackerBuilder,
    params::CreateGoal,
};
use tempfile::TempDir;

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Creates a goal and returns its id.
pub async fn add_goal(
    tracker: &Tracker,
    name: &str,
    difficulty: &str,
    status: GoalStatus,
    tags: &[&str],
) -> u64 {
    tracker
        .create_goal(&CreateGoal {
            name: name.to_string(),
            difficulty: Some(difficulty.parse().expect("valid difficulty")),
            status: Some(status),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            ..Default::default()
        })
        .await
        .expect("Failed to create goal")
        .id
}
