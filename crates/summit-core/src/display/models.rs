//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer and
//! returned verbatim by the MCP server.

use std::fmt;

use super::{
    datetime::{LocalDate, LocalDateTime},
    progress::{CompactBadge, DetailCard, ProgressBar, ProgressRenderer},
};
use crate::{
    engine::Preview,
    models::{
        Goal, GoalStatus, GoalType, ResolvedChild, Rule, SuperGoal, SuperGoalDetail,
        SuperGoalSummary,
    },
};

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line description of a rule, e.g.
/// `tags: health, fitness; difficulty: hard; excluding completed`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return write!(f, "all goals");
        }

        let mut parts = Vec::new();
        if !self.tags().is_empty() {
            parts.push(format!("tags: {}", self.tags().join(", ")));
        }
        if !self.difficulties().is_empty() {
            parts.push(format!("difficulty: {}", join(self.difficulties())));
        }
        if !self.statuses().is_empty() {
            parts.push(format!("status: {}", join(self.statuses())));
        }
        if self.is_focus_only() {
            parts.push("focus only".to_string());
        }
        if self.excludes_completed() {
            parts.push("excluding completed".to_string());
        }

        write!(f, "{}", parts.join("; "))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.map_or("○ No status", |status| status.with_icon());
        let focus = if self.is_focus { " ★" } else { "" };
        writeln!(f, "### {}. {}{focus} ({status})", self.id, self.name)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if let Some(difficulty) = &self.difficulty {
            writeln!(f, "- Difficulty: {difficulty}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if self.goal_type == GoalType::Super {
            writeln!(f, "- Type: super goal")?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for SuperGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        let mode = if self.is_dynamic { "dynamic" } else { "static" };
        writeln!(f, "- Mode: {mode}")?;
        if let Some(difficulty) = &self.difficulty {
            writeln!(f, "- Difficulty: {difficulty}")?;
        }
        match (&self.rule, self.is_dynamic) {
            (Some(rule), true) => writeln!(f, "- Rule: {rule}")?,
            (None, true) => writeln!(f, "- Rule: {}", Rule::new())?,
            (Some(rule), false) => writeln!(f, "- Retained rule: {rule}")?,
            (None, false) => {}
        }
        if !self.is_dynamic {
            writeln!(f, "- Selected goals: {}", self.child_goal_ids.len())?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ResolvedChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing {
            return writeln!(f, "- ⚠ Goal {} is missing", self.goal_id);
        }

        let marker = if self.is_completed { "✓" } else { "○" };
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        write!(f, "- {marker} {}. {name}", self.goal_id)?;
        if let Some(status) = self.status {
            write!(f, " [{status}]")?;
        }
        if let Some(difficulty) = self.difficulty {
            write!(f, " ({difficulty})")?;
        }
        writeln!(f)
    }
}

fn fmt_children(f: &mut fmt::Formatter<'_>, children: &[ResolvedChild]) -> fmt::Result {
    if children.is_empty() {
        return writeln!(f, "No matching goals.");
    }
    for child in children {
        write!(f, "{child}")?;
    }
    Ok(())
}

impl fmt::Display for SuperGoalDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.super_goal)?;

        writeln!(f, "\n## Progress")?;
        writeln!(f)?;
        write!(f, "{}", DetailCard.display(&self.progress))?;

        writeln!(f, "\n## Goals")?;
        writeln!(f)?;
        fmt_children(f, &self.children)?;

        let missing = self.missing_children().count();
        if missing > 0 {
            writeln!(f)?;
            writeln!(
                f,
                "{missing} selected goal(s) no longer exist and are not counted."
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for SuperGoalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) {}",
            self.name,
            self.id,
            CompactBadge.display(&self.progress)
        )?;
        writeln!(f)?;

        let mode = if self.is_dynamic { "dynamic" } else { "static" };
        writeln!(f, "- **Mode**: {mode}")?;
        if let Some(difficulty) = &self.difficulty {
            writeln!(f, "- **Difficulty**: {difficulty}")?;
        }
        writeln!(
            f,
            "- **Progress**: {}",
            ProgressBar::default().display(&self.progress)
        )?;
        if self.missing_count > 0 {
            writeln!(f, "- **Missing**: {}", self.missing_count)?;
        }
        writeln!(f, "- **Updated**: {}", LocalDate(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Preview {}",
            CompactBadge.display(&self.progress)
        )?;
        writeln!(f)?;
        fmt_children(f, &self.children)?;
        writeln!(f)?;
        writeln!(
            f,
            "Progress: {}",
            ProgressBar::default().display(&self.progress)
        )
    }
}
