//! Core library for the Summit growth tracker.
//!
//! Summit tracks personal goals and *super goals*: goals whose completion is
//! derived from a set of child goals. A super goal either owns an explicit
//! list of child ids (static) or evaluates a [`models::Rule`] over the live
//! goal set on every read (dynamic).
//!
//! # Layout
//!
//! - [`models`]: goals, rules, super goals, and derived progress types
//! - [`engine`]: the pure rule engine (evaluate, resolve, aggregate, convert,
//!   edit)
//! - [`reminders`]: reminder due-ness over goals
//! - [`db`]: SQLite persistence
//! - [`tracker`]: the async [`Tracker`] façade used by the CLI and MCP server
//! - [`display`]: markdown formatting of every result
//!
//! # Quick Start
//!
//! ```rust
//! use summit_core::{
//!     TrackerBuilder,
//!     models::{GoalStatus, Rule},
//!     params::{CreateGoal, PreviewRule},
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
//!         status: Some(GoalStatus::FullyCompleted),
//!         tags: vec!["health".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let preview = tracker
//!     .preview_rule(&PreviewRule {
//!         rule: Rule::new().with_tags(["health"]),
//!         super_goal_id: None,
//!     })
//!     .await?;
//! println!("{preview}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod reminders;
pub mod tracker;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Goals, SuperGoalSummaries, UpdateResult,
};
pub use engine::{Preview, SuperGoalEditor};
pub use error::{Result, TrackerError};
pub use models::{
    Difficulty, DifficultyKind, Goal, GoalFilter, GoalRef, GoalStatus, GoalType,
    MembershipRecord, ProgressSummary, ResolvedChild, Rule, SuperGoal, SuperGoalDetail,
    SuperGoalSummary,
};
pub use params::{
    CreateGoal, CreateSuperGoal, DeleteGoal, Id, ListGoals, PreviewRule, PromoteSuperGoal,
    SelectChildren, SetRule, UpdateGoal, UpdateSuperGoal,
};
pub use tracker::{Tracker, TrackerBuilder};
