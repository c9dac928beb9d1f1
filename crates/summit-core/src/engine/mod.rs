//! The super goal rule engine.
//!
//! Everything in this module is synchronous and free of I/O. Each call takes
//! the current goal set as an argument; nothing is cached between calls, so
//! callers re-run resolution whenever their goal set changes.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │    Editor    │──▶│  Evaluator   │──▶│  Aggregator  │
//! │ (draft/save) │   │ (rule × set) │   │  (progress)  │
//! └──────┬───────┘   └──────▲───────┘   └──────────────┘
//!        │                  │
//!        ▼                  │
//! ┌──────────────┐   ┌──────┴───────┐
//! │  Converter   │──▶│   Resolver   │
//! │ (snapshot/   │   │ (read path)  │
//! │  promote)    │   │              │
//! └──────────────┘   └──────────────┘
//! ```
//!
//! - [`evaluator`]: [`filter_goals_by_rule`], a stable filter of goals by a
//!   [`Rule`](crate::models::Rule)
//! - [`aggregator`]: [`compute_super_goal_progress`]
//! - [`resolver`]: [`resolve_children`] and [`eligible_goals`]
//! - [`converter`]: [`snapshot_to_static`] and [`promote_to_dynamic`]
//! - [`editor`]: [`SuperGoalEditor`], draft edits with live previews

pub mod aggregator;
pub mod converter;
pub mod editor;
pub mod evaluator;
pub mod resolver;

pub use aggregator::compute_super_goal_progress;
pub use converter::{promote_to_dynamic, snapshot_to_static};
pub use editor::{Preview, SuperGoalEditor, ensure_selectable};
pub use evaluator::{filter_goals_by_rule, goal_matches_rule};
pub use resolver::{eligible_goals, resolve_children};
