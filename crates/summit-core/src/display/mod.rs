//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrappers for collections and operation results, and the
//! [`ProgressRenderer`] variants that draw one progress summary differently
//! per context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │   Formatted     │
//! │ (Goal, Super-   │───▶│ renderers       │───▶│    Output       │
//! │  Goal, Preview) │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Goals`], [`SuperGoalSummaries`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`progress`]: [`ProgressBar`], [`CompactBadge`], [`DetailCard`]
//! - [`datetime`]: [`LocalDateTime`], [`LocalDate`]
//!
//! All output is markdown.
//!
//! ```rust
//! use summit_core::{
//!     display::{CompactBadge, ProgressRenderer},
//!     models::ProgressSummary,
//! };
//!
//! let summary = ProgressSummary {
//!     completed_count: 2,
//!     total_count: 3,
//!     percentage: 67,
//!     is_fully_completed: false,
//! };
//! assert_eq!(CompactBadge.render(&summary), "2/3");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod progress;
pub mod results;

pub use collections::{Goals, SuperGoalSummaries};
pub use datetime::{LocalDate, LocalDateTime};
pub use progress::{CompactBadge, DetailCard, ProgressBar, ProgressRenderer, Rendered};
pub use results::{CreateResult, DeleteResult, UpdateResult};
