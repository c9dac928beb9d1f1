//! Command-line subcommands and their handlers
//!
//! Each subcommand has a clap argument struct that converts into the
//! matching core parameter type, so clap attributes never leak into
//! `summit_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] runs the converted parameters against a [`Tracker`] and renders
//! the markdown that the core display types produce.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use summit_core::{
    display::{CreateResult, DeleteResult, UpdateResult},
    params::*,
    Difficulty, DifficultyKind, GoalStatus, GoalType, Rule, Tracker,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Rule flags
// ============================================================================

/// Rule fields shared by `super create`, `preview`, `rule` and `promote`.
///
/// Every flag is optional; repeated or comma-separated values combine the
/// way the rule does (any listed value matches).
#[derive(Args, Default)]
pub struct RuleArgs {
    /// Allowed difficulties (easy, medium, hard, extreme, impossible, custom)
    #[arg(long = "difficulty", value_delimiter = ',')]
    pub difficulties: Vec<DifficultyKind>,
    /// Match goals carrying at least one of these tags
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
    /// Allowed statuses
    #[arg(long = "status", value_delimiter = ',')]
    pub statuses: Vec<GoalStatus>,
    /// Only match focus goals
    #[arg(long)]
    pub focus_only: bool,
    /// Never match completed or validated goals
    #[arg(long)]
    pub exclude_completed: bool,
    /// Complete rule as JSON, e.g. '{"tags":["health"],"excludeCompleted":true}'
    #[arg(
        long,
        conflicts_with_all = ["difficulties", "tags", "statuses", "focus_only", "exclude_completed"]
    )]
    pub rule_json: Option<String>,
}

impl RuleArgs {
    /// Whether any rule flag was given.
    pub fn is_specified(&self) -> bool {
        !self.difficulties.is_empty()
            || !self.tags.is_empty()
            || !self.statuses.is_empty()
            || self.focus_only
            || self.exclude_completed
            || self.rule_json.is_some()
    }

    pub fn into_rule(self) -> Result<Rule> {
        if let Some(json) = self.rule_json {
            return serde_json::from_str(&json).context("Invalid rule JSON");
        }

        let mut rule = Rule::new();
        if !self.difficulties.is_empty() {
            rule = rule.with_difficulties(self.difficulties);
        }
        if !self.tags.is_empty() {
            rule = rule.with_tags(self.tags);
        }
        if !self.statuses.is_empty() {
            rule = rule.with_statuses(self.statuses);
        }
        if self.focus_only {
            rule = rule.focus_only();
        }
        if self.exclude_completed {
            rule = rule.exclude_completed();
        }
        Ok(rule)
    }

    /// The rule, or `None` when no flag was given.
    fn into_optional_rule(self) -> Result<Option<Rule>> {
        if self.is_specified() {
            self.into_rule().map(Some)
        } else {
            Ok(None)
        }
    }
}

// ============================================================================
// Goal commands
// ============================================================================

/// Create a new goal
#[derive(Args)]
pub struct CreateGoalArgs {
    /// Name of the goal
    pub name: String,
    #[arg(short, long, help = "Optional description of the goal")]
    pub description: Option<String>,
    #[arg(long, help = "Difficulty tier, or custom:<id> for a custom difficulty")]
    pub difficulty: Option<Difficulty>,
    #[arg(short, long, help = "Initial status (defaults to not_started)")]
    pub status: Option<GoalStatus>,
    #[arg(short, long, help = "Pin the goal as a focus goal")]
    pub focus: bool,
    #[arg(short, long, value_delimiter = ',', help = "Tags as comma-separated list")]
    pub tags: Vec<String>,
}

impl From<CreateGoalArgs> for CreateGoal {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoal {
            name: val.name,
            description: val.description,
            difficulty: val.difficulty,
            status: val.status,
            is_focus: val.focus,
            tags: val.tags,
        }
    }
}

/// List goals
#[derive(Args)]
pub struct ListGoalsArgs {
    #[arg(short, long, help = "Include super goals in the listing")]
    pub all: bool,
    #[arg(short, long, help = "Only goals with this status")]
    pub status: Option<GoalStatus>,
    #[arg(long, help = "Only focus goals")]
    pub focus_only: bool,
}

impl From<ListGoalsArgs> for ListGoals {
    fn from(val: ListGoalsArgs) -> Self {
        ListGoals {
            include_super: val.all,
            status: val.status,
            focus_only: val.focus_only,
        }
    }
}

/// Show a single record
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Unique identifier to show details for")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a goal
///
/// Only the given fields change. `--tags` replaces the whole tag list.
#[derive(Args)]
pub struct UpdateGoalArgs {
    #[arg(help = "Unique identifier of the goal to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, help = "New difficulty tier, or custom:<id>")]
    pub difficulty: Option<Difficulty>,
    #[arg(short, long, help = "New status")]
    pub status: Option<GoalStatus>,
    #[arg(long, conflicts_with = "unfocus", help = "Pin as a focus goal")]
    pub focus: bool,
    #[arg(long, help = "Unpin the focus flag")]
    pub unfocus: bool,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Replacement tags as comma-separated list"
    )]
    pub tags: Option<Vec<String>>,
    #[arg(long, help = "Change the goal type (standard or super)")]
    pub goal_type: Option<GoalType>,
}

impl From<UpdateGoalArgs> for UpdateGoal {
    fn from(val: UpdateGoalArgs) -> Self {
        let is_focus = match (val.focus, val.unfocus) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        UpdateGoal {
            id: val.id,
            name: val.name,
            description: val.description,
            difficulty: val.difficulty,
            status: val.status,
            is_focus,
            tags: val.tags,
            goal_type: val.goal_type,
        }
    }
}

/// Delete a goal or super goal permanently
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Unique identifier of the record to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteGoal {
    fn from(val: DeleteArgs) -> Self {
        DeleteGoal {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List goals
    #[command(aliases = ["l", "ls"])]
    List(ListGoalsArgs),
    /// Show a goal
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Update a goal
    #[command(alias = "u")]
    Update(UpdateGoalArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Super goal commands
// ============================================================================

/// Create a super goal
///
/// With `--children` the super goal is static. With `--dynamic` or any rule
/// flag it is dynamic and its children follow the rule.
#[derive(Args)]
pub struct CreateSuperArgs {
    /// Name of the super goal
    pub name: String,
    #[arg(short, long, help = "Optional description")]
    pub description: Option<String>,
    #[arg(long, help = "Difficulty of the super goal itself")]
    pub super_difficulty: Option<Difficulty>,
    #[arg(long, help = "Create a dynamic super goal, even with an empty rule")]
    pub dynamic: bool,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        conflicts_with = "dynamic",
        help = "Child goal ids for a static super goal"
    )]
    pub children: Vec<u64>,
    #[command(flatten)]
    pub rule: RuleArgs,
}

impl CreateSuperArgs {
    fn into_params(self) -> Result<CreateSuperGoal> {
        let rule = if self.dynamic || self.rule.is_specified() {
            Some(self.rule.into_rule()?)
        } else {
            None
        };

        Ok(CreateSuperGoal {
            name: self.name,
            description: self.description,
            difficulty: self.super_difficulty,
            rule,
            child_goal_ids: self.children,
        })
    }
}

/// Update a super goal's name, description or difficulty
#[derive(Args)]
pub struct UpdateSuperArgs {
    #[arg(help = "Unique identifier of the super goal to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, help = "New difficulty tier, or custom:<id>")]
    pub difficulty: Option<Difficulty>,
}

impl From<UpdateSuperArgs> for UpdateSuperGoal {
    fn from(val: UpdateSuperArgs) -> Self {
        UpdateSuperGoal {
            id: val.id,
            name: val.name,
            description: val.description,
            difficulty: val.difficulty,
        }
    }
}

/// Preview which goals a rule would select, without saving anything
#[derive(Args)]
pub struct PreviewArgs {
    #[arg(long, help = "Preview as this super goal would resolve after promotion")]
    pub super_goal: Option<u64>,
    #[command(flatten)]
    pub rule: RuleArgs,
}

impl PreviewArgs {
    fn into_params(self) -> Result<PreviewRule> {
        Ok(PreviewRule {
            rule: self.rule.into_rule()?,
            super_goal_id: self.super_goal,
        })
    }
}

/// Replace the rule of a super goal
///
/// A static super goal keeps the rule for a later `promote`.
#[derive(Args)]
pub struct SetRuleArgs {
    #[arg(help = "Unique identifier of the super goal")]
    pub id: u64,
    #[command(flatten)]
    pub rule: RuleArgs,
}

impl SetRuleArgs {
    fn into_params(self) -> Result<SetRule> {
        Ok(SetRule {
            id: self.id,
            rule: self.rule.into_rule()?,
        })
    }
}

/// Add or remove children of a static super goal
#[derive(Args)]
pub struct SelectArgs {
    #[arg(help = "Unique identifier of the static super goal")]
    pub id: u64,
    #[arg(short, long, value_delimiter = ',', help = "Goal ids to add")]
    pub add: Vec<u64>,
    #[arg(short, long, value_delimiter = ',', help = "Goal ids to remove")]
    pub remove: Vec<u64>,
}

impl From<SelectArgs> for SelectChildren {
    fn from(val: SelectArgs) -> Self {
        SelectChildren {
            id: val.id,
            add: val.add,
            remove: val.remove,
        }
    }
}

/// Freeze a dynamic super goal's current children into a static selection
#[derive(Args)]
pub struct SnapshotArgs {
    #[arg(help = "Unique identifier of the dynamic super goal")]
    pub id: u64,
}

impl From<SnapshotArgs> for Id {
    fn from(val: SnapshotArgs) -> Self {
        Id { id: val.id }
    }
}

/// Turn a static super goal dynamic
///
/// Without rule flags the rule kept from the last snapshot is restored.
#[derive(Args)]
pub struct PromoteArgs {
    #[arg(help = "Unique identifier of the static super goal")]
    pub id: u64,
    #[command(flatten)]
    pub rule: RuleArgs,
}

impl PromoteArgs {
    fn into_params(self) -> Result<PromoteSuperGoal> {
        Ok(PromoteSuperGoal {
            id: self.id,
            rule: self.rule.into_optional_rule()?,
        })
    }
}

#[derive(Subcommand)]
pub enum SuperCommands {
    /// Create a super goal
    #[command(alias = "c")]
    Create(CreateSuperArgs),
    /// List super goals with their progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a super goal with its resolved children
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Update a super goal's name, description or difficulty
    #[command(alias = "u")]
    Update(UpdateSuperArgs),
    /// Preview a rule without saving
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Replace the rule of a super goal
    Rule(SetRuleArgs),
    /// Add or remove children of a static super goal
    Select(SelectArgs),
    /// Freeze a dynamic super goal into a static one
    Snapshot(SnapshotArgs),
    /// Turn a static super goal dynamic
    Promote(PromoteArgs),
    /// Delete a super goal permanently; its children are kept
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a tracker and renders the results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => self.create_goal(&args.into()).await,
            GoalCommands::List(args) => self.list_goals(&args.into()).await,
            GoalCommands::Show(args) => self.show_goal(&args.into()).await,
            GoalCommands::Update(args) => self.update_goal(&args.into()).await,
            GoalCommands::Delete(args) => self.delete_goal(&args.into()).await,
        }
    }

    pub async fn handle_super_command(&self, command: SuperCommands) -> Result<()> {
        match command {
            SuperCommands::Create(args) => self.create_super_goal(&args.into_params()?).await,
            SuperCommands::List => self.list_super_goals().await,
            SuperCommands::Show(args) => self.show_super_goal(&args.into()).await,
            SuperCommands::Update(args) => self.update_super_goal(&args.into()).await,
            SuperCommands::Preview(args) => self.preview_rule(&args.into_params()?).await,
            SuperCommands::Rule(args) => self.set_rule(&args.into_params()?).await,
            SuperCommands::Select(args) => self.select_children(&args.into()).await,
            SuperCommands::Snapshot(args) => self.snapshot_super_goal(&args.into()).await,
            SuperCommands::Promote(args) => self.promote_super_goal(&args.into_params()?).await,
            SuperCommands::Delete(args) => self.delete_super_goal(&args.into()).await,
        }
    }

    async fn create_goal(&self, params: &CreateGoal) -> Result<()> {
        debug!("create_goal: {params:?}");
        let goal = self
            .tracker
            .create_goal(params)
            .await
            .context("Failed to create goal")?;
        self.renderer.render(&CreateResult::new(goal).to_string())
    }

    async fn list_goals(&self, params: &ListGoals) -> Result<()> {
        let goals = self
            .tracker
            .list_goals_result(params)
            .await
            .context("Failed to list goals")?;
        self.renderer.render(&format!("# Goals\n\n{goals}"))
    }

    async fn show_goal(&self, params: &Id) -> Result<()> {
        let Some(goal) = self
            .tracker
            .get_goal(params)
            .await
            .context("Failed to get goal")?
        else {
            bail!("Goal with ID {} not found", params.id);
        };
        self.renderer.render(&goal.to_string())
    }

    async fn update_goal(&self, params: &UpdateGoal) -> Result<()> {
        debug!("update_goal: {params:?}");
        let goal = self
            .tracker
            .update_goal(params)
            .await
            .context("Failed to update goal")?;
        let result = UpdateResult::with_changes(goal, params.changes());
        self.renderer.render(&result.to_string())
    }

    async fn delete_goal(&self, params: &DeleteGoal) -> Result<()> {
        let Some(goal) = self
            .tracker
            .delete_goal(params)
            .await
            .context("Failed to delete goal")?
        else {
            bail!("Goal with ID {} not found", params.id);
        };
        self.renderer.render(&DeleteResult::new(goal).to_string())
    }

    async fn create_super_goal(&self, params: &CreateSuperGoal) -> Result<()> {
        debug!("create_super_goal: {params:?}");
        let super_goal = self
            .tracker
            .create_super_goal(params)
            .await
            .context("Failed to create super goal")?;
        self.renderer
            .render(&CreateResult::new(super_goal).to_string())
    }

    pub async fn list_super_goals(&self) -> Result<()> {
        let summaries = self
            .tracker
            .list_super_goal_summaries()
            .await
            .context("Failed to list super goals")?;
        self.renderer
            .render(&format!("# Super Goals\n\n{summaries}"))
    }

    async fn show_super_goal(&self, params: &Id) -> Result<()> {
        let Some(detail) = self
            .tracker
            .show_super_goal(params)
            .await
            .context("Failed to get super goal")?
        else {
            bail!("Super goal with ID {} not found", params.id);
        };
        self.renderer.render(&detail.to_string())
    }

    async fn preview_rule(&self, params: &PreviewRule) -> Result<()> {
        debug!("preview_rule: {params:?}");
        let preview = self
            .tracker
            .preview_rule(params)
            .await
            .context("Failed to preview rule")?;
        self.renderer.render(&preview.to_string())
    }

    async fn update_super_goal(&self, params: &UpdateSuperGoal) -> Result<()> {
        debug!("update_super_goal: {params:?}");
        let super_goal = self
            .tracker
            .update_super_goal(params)
            .await
            .context("Failed to update super goal")?;
        let result = UpdateResult::with_changes(super_goal, params.changes());
        self.renderer.render(&result.to_string())
    }

    async fn set_rule(&self, params: &SetRule) -> Result<()> {
        let super_goal = self
            .tracker
            .set_rule(params)
            .await
            .context("Failed to set rule")?;
        let changes = vec![format!("Set rule to {}", params.rule)];
        self.renderer
            .render(&UpdateResult::with_changes(super_goal, changes).to_string())
    }

    async fn select_children(&self, params: &SelectChildren) -> Result<()> {
        let super_goal = self
            .tracker
            .select_children(params)
            .await
            .context("Failed to select goals")?;
        let result = UpdateResult::with_changes(super_goal, selection_changes(params));
        self.renderer.render(&result.to_string())
    }

    async fn snapshot_super_goal(&self, params: &Id) -> Result<()> {
        let super_goal = self
            .tracker
            .snapshot_super_goal(params)
            .await
            .context("Failed to snapshot super goal")?;
        let changes = vec![format!(
            "Froze {} goal(s) into a static selection",
            super_goal.child_goal_ids.len()
        )];
        self.renderer
            .render(&UpdateResult::with_changes(super_goal, changes).to_string())
    }

    async fn promote_super_goal(&self, params: &PromoteSuperGoal) -> Result<()> {
        let super_goal = self
            .tracker
            .promote_super_goal(params)
            .await
            .context("Failed to promote super goal")?;
        let rule = super_goal.rule.clone().unwrap_or_default();
        let changes = vec![format!("Switched to dynamic mode with rule: {rule}")];
        self.renderer
            .render(&UpdateResult::with_changes(super_goal, changes).to_string())
    }

    async fn delete_super_goal(&self, params: &DeleteGoal) -> Result<()> {
        let Some(super_goal) = self
            .tracker
            .delete_super_goal(params)
            .await
            .context("Failed to delete super goal")?
        else {
            bail!("Super goal with ID {} not found", params.id);
        };
        self.renderer
            .render(&DeleteResult::new(super_goal).to_string())
    }
}

pub(crate) fn selection_changes(params: &SelectChildren) -> Vec<String> {
    let ids = |ids: &[u64]| {
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut changes = Vec::new();
    if !params.add.is_empty() {
        changes.push(format!("Added goals {}", ids(&params.add)));
    }
    if !params.remove.is_empty() {
        changes.push(format!("Removed goals {}", ids(&params.remove)));
    }
    changes
}
