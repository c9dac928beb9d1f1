//! High-level tracker API for managing goals and super goals.
//!
//! The [`Tracker`] sits between the interface layers and the database. Every
//! operation opens a fresh [`Database`] on a blocking thread, loads the goal
//! set it needs, runs the pure rule engine, and persists the result.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │   (handlers)    │───▶│ (goal_ops,      │───▶│   (via db/)     │
//! │                 │    │  super_goal_ops)│    │                 │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  Rule engine    │
//!                        │  (engine/)      │
//!                        └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use summit_core::{
//!     TrackerBuilder,
//!     models::{GoalStatus, Rule},
//!     params::{CreateGoal, CreateSuperGoal, Id},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("summit.db"))
//!     .build()
//!     .await?;
//!
//! tracker
//!     .create_goal(&CreateGoal {
//!         name: "Run a 10k".to_string(),
//!         status: Some(GoalStatus::InProgress),
//!         tags: vec!["health".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let fitness = tracker
//!     .create_super_goal(&CreateSuperGoal {
//!         name: "Fitness".to_string(),
//!         rule: Some(Rule::new().with_tags(["health"])),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let detail = tracker.show_super_goal(&Id { id: fitness.id }).await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod builder;
pub mod goal_ops;
pub mod handlers;
pub mod super_goal_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing goals and super goals.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs `operation` against a fresh connection on a blocking thread.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
