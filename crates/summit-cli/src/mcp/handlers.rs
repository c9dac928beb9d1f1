//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use summit_core::{
    display::{CreateResult, DeleteResult, UpdateResult},
    params as core, Tracker,
};
use tokio::sync::Mutex;

use super::errors::{not_found, to_mcp_error};
use crate::cli::selection_changes;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types stay free of rmcp. The transparent wrapper adds the
// Deserialize and JsonSchema impls the tool router needs and hands the inner
// value through unchanged.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateGoal = McpParams<core::CreateGoal>;
pub type UpdateGoal = McpParams<core::UpdateGoal>;
pub type ListGoals = McpParams<core::ListGoals>;
pub type DeleteGoal = McpParams<core::DeleteGoal>;
pub type CreateSuperGoal = McpParams<core::CreateSuperGoal>;
pub type UpdateSuperGoal = McpParams<core::UpdateSuperGoal>;
pub type SetRule = McpParams<core::SetRule>;
pub type SelectChildren = McpParams<core::SelectChildren>;
pub type PromoteSuperGoal = McpParams<core::PromoteSuperGoal>;
pub type PreviewRule = McpParams<core::PreviewRule>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Handler implementations for the MCP server
///
/// The tracker sits behind a mutex so concurrent tool calls editing the
/// same super goal run one after the other.
pub struct McpHandlers {
    tracker: Arc<Mutex<Tracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<Tracker>>) -> Self {
        Self { tracker }
    }

    pub async fn create_goal(&self, Parameters(params): Parameters<CreateGoal>) -> McpResult {
        debug!("create_goal: {params:?}");

        let goal = self
            .tracker
            .lock()
            .await
            .create_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create goal", &e))?;

        text(CreateResult::new(goal))
    }

    pub async fn list_goals(&self, Parameters(params): Parameters<ListGoals>) -> McpResult {
        debug!("list_goals: {params:?}");

        let goals = self
            .tracker
            .lock()
            .await
            .list_goals_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list goals", &e))?;

        text(format!("# Goals\n\n{goals}"))
    }

    pub async fn show_goal(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_goal: {params:?}");

        let id = params.as_ref().id;
        let goal = self
            .tracker
            .lock()
            .await
            .get_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get goal", &e))?
            .ok_or_else(|| not_found("Goal", id))?;

        text(goal)
    }

    pub async fn update_goal(&self, Parameters(params): Parameters<UpdateGoal>) -> McpResult {
        debug!("update_goal: {params:?}");

        let inner_params = params.as_ref();
        let goal = self
            .tracker
            .lock()
            .await
            .update_goal(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update goal", &e))?;

        text(UpdateResult::with_changes(goal, inner_params.changes()))
    }

    pub async fn delete_goal(&self, Parameters(params): Parameters<DeleteGoal>) -> McpResult {
        debug!("delete_goal: {params:?}");

        let id = params.as_ref().id;
        let goal = self
            .tracker
            .lock()
            .await
            .delete_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete goal", &e))?
            .ok_or_else(|| not_found("Goal", id))?;

        text(DeleteResult::new(goal))
    }

    pub async fn create_super_goal(
        &self,
        Parameters(params): Parameters<CreateSuperGoal>,
    ) -> McpResult {
        debug!("create_super_goal: {params:?}");

        let super_goal = self
            .tracker
            .lock()
            .await
            .create_super_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create super goal", &e))?;

        text(CreateResult::new(super_goal))
    }

    pub async fn list_super_goals(&self) -> McpResult {
        debug!("list_super_goals");

        let summaries = self
            .tracker
            .lock()
            .await
            .list_super_goal_summaries()
            .await
            .map_err(|e| to_mcp_error("Failed to list super goals", &e))?;

        text(format!("# Super Goals\n\n{summaries}"))
    }

    pub async fn show_super_goal(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_super_goal: {params:?}");

        let id = params.as_ref().id;
        let detail = self
            .tracker
            .lock()
            .await
            .show_super_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get super goal", &e))?
            .ok_or_else(|| not_found("Super goal", id))?;

        text(detail)
    }

    pub async fn update_super_goal(
        &self,
        Parameters(params): Parameters<UpdateSuperGoal>,
    ) -> McpResult {
        debug!("update_super_goal: {params:?}");

        let inner_params = params.as_ref();
        let super_goal = self
            .tracker
            .lock()
            .await
            .update_super_goal(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update super goal", &e))?;

        text(UpdateResult::with_changes(super_goal, inner_params.changes()))
    }

    pub async fn preview_rule(&self, Parameters(params): Parameters<PreviewRule>) -> McpResult {
        debug!("preview_rule: {params:?}");

        let preview = self
            .tracker
            .lock()
            .await
            .preview_rule(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to preview rule", &e))?;

        text(preview)
    }

    pub async fn set_rule(&self, Parameters(params): Parameters<SetRule>) -> McpResult {
        debug!("set_rule: {params:?}");

        let inner_params = params.as_ref();
        let super_goal = self
            .tracker
            .lock()
            .await
            .set_rule(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to set rule", &e))?;

        let changes = vec![format!("Set rule to {}", inner_params.rule)];
        text(UpdateResult::with_changes(super_goal, changes))
    }

    pub async fn select_children(
        &self,
        Parameters(params): Parameters<SelectChildren>,
    ) -> McpResult {
        debug!("select_children: {params:?}");

        let inner_params = params.as_ref();
        let super_goal = self
            .tracker
            .lock()
            .await
            .select_children(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to select goals", &e))?;

        text(UpdateResult::with_changes(
            super_goal,
            selection_changes(inner_params),
        ))
    }

    pub async fn snapshot_super_goal(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("snapshot_super_goal: {params:?}");

        let super_goal = self
            .tracker
            .lock()
            .await
            .snapshot_super_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to snapshot super goal", &e))?;

        let changes = vec![format!(
            "Froze {} goal(s) into a static selection",
            super_goal.child_goal_ids.len()
        )];
        text(UpdateResult::with_changes(super_goal, changes))
    }

    pub async fn promote_super_goal(
        &self,
        Parameters(params): Parameters<PromoteSuperGoal>,
    ) -> McpResult {
        debug!("promote_super_goal: {params:?}");

        let super_goal = self
            .tracker
            .lock()
            .await
            .promote_super_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to promote super goal", &e))?;

        let rule = super_goal.rule.clone().unwrap_or_default();
        let changes = vec![format!("Switched to dynamic mode with rule: {rule}")];
        text(UpdateResult::with_changes(super_goal, changes))
    }

    pub async fn delete_super_goal(&self, Parameters(params): Parameters<DeleteGoal>) -> McpResult {
        debug!("delete_super_goal: {params:?}");

        let id = params.as_ref().id;
        let super_goal = self
            .tracker
            .lock()
            .await
            .delete_super_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete super goal", &e))?
            .ok_or_else(|| not_found("Super goal", id))?;

        text(DeleteResult::new(super_goal))
    }
}
