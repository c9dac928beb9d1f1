//! Data models for goals and super goals.
//!
//! This module contains the domain models of the Summit growth tracker and
//! the value types the rule engine reads and produces. Display
//! implementations live in [`crate::display::models`].
//!
//! # Model Overview
//!
//! - [`Goal`]: an ordinary goal record, read by the engine through the
//!   structural [`GoalRef`] trait
//! - [`Rule`]: the serializable membership filter of a dynamic super goal
//! - [`SuperGoal`]: a goal of goals, static (explicit ids) or dynamic (rule)
//! - [`ResolvedChild`] and [`ProgressSummary`]: derived, never stored
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use summit_core::models::{Goal, GoalStatus, GoalType, Rule, SuperGoal};
//!
//! let now = Timestamp::now();
//! let run = Goal {
//!     id: 1,
//!     name: "Run a 10k".to_string(),
//!     description: None,
//!     difficulty: Some("hard".parse().unwrap()),
//!     status: Some(GoalStatus::FullyCompleted),
//!     is_focus: true,
//!     tags: vec!["health".to_string()],
//!     goal_type: GoalType::Standard,
//!     created_at: now,
//!     updated_at: now,
//! };
//!
//! let fitness = SuperGoal {
//!     id: 2,
//!     name: "Fitness".to_string(),
//!     description: None,
//!     difficulty: None,
//!     is_dynamic: true,
//!     rule: Some(Rule::new().with_tags(["health"])),
//!     child_goal_ids: vec![],
//!     created_at: now,
//!     updated_at: now,
//! };
//!
//! let progress = fitness.progress(&[run]);
//! assert_eq!(progress.percentage, 100);
//! assert!(progress.is_fully_completed);
//! ```

pub mod difficulty;
pub mod filters;
pub mod goal;
pub mod progress;
pub mod rule;
pub mod status;
pub mod summary;
pub mod super_goal;

#[cfg(test)]
mod tests;

pub use difficulty::{Difficulty, DifficultyKind, DifficultyTier};
pub use filters::GoalFilter;
pub use goal::{Goal, GoalRef};
pub use progress::{ChildProgress, ProgressSummary, ResolvedChild};
pub use rule::Rule;
pub use status::{GoalStatus, GoalType};
pub use summary::{SuperGoalDetail, SuperGoalSummary};
pub use super_goal::{Membership, MembershipRecord, SuperGoal};
