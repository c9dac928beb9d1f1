//! Presentation variants for super goal progress.
//!
//! One [`ProgressSummary`] is produced by the engine; how it is drawn depends
//! on where it appears. List rows use [`ProgressBar`], headings use
//! [`CompactBadge`], and detail views use [`DetailCard`].

use std::fmt;

use crate::models::ProgressSummary;

/// Renders a progress summary for one presentation context.
pub trait ProgressRenderer {
    fn render(&self, summary: &ProgressSummary) -> String;

    /// Display adapter for use in `write!` chains.
    fn display<'a>(&'a self, summary: &'a ProgressSummary) -> Rendered<'a, Self>
    where
        Self: Sized,
    {
        Rendered {
            renderer: self,
            summary,
        }
    }
}

/// A summary paired with its renderer; see [`ProgressRenderer::display`].
pub struct Rendered<'a, R> {
    renderer: &'a R,
    summary: &'a ProgressSummary,
}

impl<R: ProgressRenderer> fmt::Display for Rendered<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.renderer.render(self.summary))
    }
}

/// Fixed-width text bar: `[██████░░░░] 60% (3/5)`.
///
/// ```rust
/// use summit_core::{
///     display::{ProgressBar, ProgressRenderer},
///     models::ProgressSummary,
/// };
///
/// let summary = ProgressSummary {
///     completed_count: 1,
///     total_count: 4,
///     percentage: 25,
///     is_fully_completed: false,
/// };
/// assert_eq!(ProgressBar::new(8).render(&summary), "[██░░░░░░] 25% (1/4)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    width: usize,
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(20)
    }
}

impl ProgressRenderer for ProgressBar {
    fn render(&self, summary: &ProgressSummary) -> String {
        let filled = self.width * usize::from(summary.percentage) / 100;
        format!(
            "[{}{}] {}% ({}/{})",
            "█".repeat(filled),
            "░".repeat(self.width - filled),
            summary.percentage,
            summary.completed_count,
            summary.total_count
        )
    }
}

/// Short inline badge: `3/5`, `✓ 5/5`, or `no goals`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactBadge;

impl ProgressRenderer for CompactBadge {
    fn render(&self, summary: &ProgressSummary) -> String {
        if summary.total_count == 0 {
            "no goals".to_string()
        } else if summary.is_fully_completed {
            format!("✓ {}/{}", summary.completed_count, summary.total_count)
        } else {
            format!("{}/{}", summary.completed_count, summary.total_count)
        }
    }
}

/// Markdown block with every count spelled out.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailCard;

impl ProgressRenderer for DetailCard {
    fn render(&self, summary: &ProgressSummary) -> String {
        let state = if summary.total_count == 0 {
            "Empty"
        } else if summary.is_fully_completed {
            "Fully completed"
        } else {
            "In progress"
        };

        format!(
            "- **Progress**: {}%\n- **Completed**: {} of {}\n- **Pending**: {}\n- **State**: {state}\n",
            summary.percentage,
            summary.completed_count,
            summary.total_count,
            summary.pending_count()
        )
    }
}
