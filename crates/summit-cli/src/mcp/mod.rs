//! MCP server implementation for Summit
//!
//! Exposes the goal and super goal operations as Model Context Protocol
//! tools over stdio. Every tool returns the same markdown the CLI prints.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use summit_core::Tracker;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreateGoal, CreateSuperGoal, DeleteGoal, Id, ListGoals, McpResult, PreviewRule,
    PromoteSuperGoal, SelectChildren, SetRule, UpdateGoal, UpdateSuperGoal,
};

const INSTRUCTIONS: &str = r#"Summit tracks personal goals and super goals whose progress is derived from child goals.

## Core Concepts
- **Goals**: name, difficulty (easy, medium, hard, extreme, impossible, or custom:<id>), status (not_started, in_progress, fully_completed, paused, validated), focus flag and tags
- **Super goals**: a goal made of other goals. Static super goals own an explicit list of child ids. Dynamic super goals select children with a rule on every read.
- **Rules**: `{"difficulties": [...], "tags": [...], "statuses": [...], "focusOnly": bool, "excludeCompleted": bool}`. Every field is optional; fields combine with AND, and a goal matches `tags` when it shares any one tag.
- **Progress**: completed (fully_completed or validated) over existing children. Deleted children of a static super goal are reported as missing and not counted.

## Workflow Examples

### Grouping by rule
1. Try a rule with `preview_rule`; nothing is saved
2. Create it with `create_super_goal` passing `rule`
3. Adjust later with `set_rule`; rename or re-rate with `update_super_goal`

### Hand-picked groups
1. Create with `create_super_goal` passing `child_goal_ids`
2. Add or remove children with `select_children`

### Switching modes
- `snapshot_super_goal` freezes a dynamic super goal's current children into a static list and keeps its rule
- `promote_super_goal` turns a static super goal dynamic again, with a new rule or the kept one

## Tool Categories
- **Goals**: create_goal, list_goals, show_goal, update_goal, delete_goal
- **Super goals**: create_super_goal, list_super_goals, show_super_goal, update_super_goal, preview_rule, set_rule, select_children, snapshot_super_goal, promote_super_goal, delete_super_goal"#;

/// MCP server for Summit
#[derive(Clone)]
pub struct SummitMcpServer {
    tracker: Arc<Mutex<Tracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SummitMcpServer {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "create_goal",
        description = "Create a goal. Provide a name (required) and optionally description, difficulty ('easy'..'impossible' or 'custom:<id>'), status (defaults to 'not_started'), is_focus and tags. Returns the new goal ID."
    )]
    async fn create_goal(&self, params: Parameters<CreateGoal>) -> McpResult {
        self.handlers().create_goal(params).await
    }

    #[tool(
        name = "list_goals",
        description = "List goals ordered by ID. Super goals are hidden unless include_super=true. Optionally filter by status or focus_only=true."
    )]
    async fn list_goals(&self, params: Parameters<ListGoals>) -> McpResult {
        self.handlers().list_goals(params).await
    }

    #[tool(
        name = "show_goal",
        description = "Show one goal with its status, difficulty, tags and timestamps."
    )]
    async fn show_goal(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_goal(params).await
    }

    #[tool(
        name = "update_goal",
        description = "Update a goal by ID. Only the given fields change; tags replaces the whole tag list. Changing status changes the progress of every super goal containing the goal. Setting goal_type='super' removes the goal from every super goal's children."
    )]
    async fn update_goal(&self, params: Parameters<UpdateGoal>) -> McpResult {
        self.handlers().update_goal(params).await
    }

    #[tool(
        name = "delete_goal",
        description = "Permanently delete a goal. Requires confirmed=true. Static super goals that selected it will report it as missing."
    )]
    async fn delete_goal(&self, params: Parameters<DeleteGoal>) -> McpResult {
        self.handlers().delete_goal(params).await
    }

    #[tool(
        name = "create_super_goal",
        description = "Create a super goal. Pass a rule to make it dynamic (children follow the rule), or child_goal_ids to make it static. Not both. Child ids must be existing standard goals."
    )]
    async fn create_super_goal(&self, params: Parameters<CreateSuperGoal>) -> McpResult {
        self.handlers().create_super_goal(params).await
    }

    #[tool(
        name = "list_super_goals",
        description = "List all super goals with their mode and current progress."
    )]
    async fn list_super_goals(&self) -> McpResult {
        self.handlers().list_super_goals().await
    }

    #[tool(
        name = "show_super_goal",
        description = "Show a super goal with its resolved children, completion progress and any missing children."
    )]
    async fn show_super_goal(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_super_goal(params).await
    }

    #[tool(
        name = "update_super_goal",
        description = "Update a super goal's name, description or difficulty. Only the given fields change; membership is edited with set_rule, select_children, snapshot_super_goal and promote_super_goal."
    )]
    async fn update_super_goal(&self, params: Parameters<UpdateSuperGoal>) -> McpResult {
        self.handlers().update_super_goal(params).await
    }

    #[tool(
        name = "preview_rule",
        description = "Show which goals a rule selects and the resulting progress, without saving. With super_goal_id, previews that super goal as if promoted with the rule."
    )]
    async fn preview_rule(&self, params: Parameters<PreviewRule>) -> McpResult {
        self.handlers().preview_rule(params).await
    }

    #[tool(
        name = "set_rule",
        description = "Replace the rule of a super goal. A dynamic super goal follows the new rule immediately; a static one keeps it for a later promote_super_goal and its children do not change."
    )]
    async fn set_rule(&self, params: Parameters<SetRule>) -> McpResult {
        self.handlers().set_rule(params).await
    }

    #[tool(
        name = "select_children",
        description = "Add and remove children of a static super goal. Removals apply first. The whole edit fails, and nothing is saved, if any added ID is unknown, a super goal, or the super goal itself."
    )]
    async fn select_children(&self, params: Parameters<SelectChildren>) -> McpResult {
        self.handlers().select_children(params).await
    }

    #[tool(
        name = "snapshot_super_goal",
        description = "Freeze a dynamic super goal into a static one whose children are exactly the goals its rule currently selects. The rule is kept for a later promote_super_goal."
    )]
    async fn snapshot_super_goal(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().snapshot_super_goal(params).await
    }

    #[tool(
        name = "promote_super_goal",
        description = "Turn a static super goal dynamic. Uses the given rule, else the rule kept from the last snapshot, else the empty rule which matches every goal."
    )]
    async fn promote_super_goal(&self, params: Parameters<PromoteSuperGoal>) -> McpResult {
        self.handlers().promote_super_goal(params).await
    }

    #[tool(
        name = "delete_super_goal",
        description = "Permanently delete a super goal. Requires confirmed=true. Its child goals are not touched."
    )]
    async fn delete_super_goal(&self, params: Parameters<DeleteGoal>) -> McpResult {
        self.handlers().delete_super_goal(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SummitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "summit".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SummitMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Summit MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
