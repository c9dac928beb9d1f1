//! Aggregation of child completion into a single progress figure.

use crate::models::{ChildProgress, ProgressSummary};

/// Summarizes completion over a super goal's children.
///
/// Missing children count toward neither side of the ratio. The percentage
/// is rounded half up, and an empty (or all-missing) child set reports 0%
/// without being fully completed.
pub fn compute_super_goal_progress<C: ChildProgress>(children: &[C]) -> ProgressSummary {
    let (completed_count, total_count) = children
        .iter()
        .filter(|child| !child.is_missing())
        .fold((0u32, 0u32), |(completed, total), child| {
            (completed + u32::from(child.is_completed()), total + 1)
        });

    ProgressSummary {
        completed_count,
        total_count,
        percentage: rounded_percentage(completed_count, total_count),
        is_fully_completed: total_count > 0 && completed_count == total_count,
    }
}

fn rounded_percentage(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let (completed, total) = (u64::from(completed), u64::from(total));
    ((200 * completed + total) / (2 * total)) as u8
}
