//! Summit CLI Application
//!
//! Command-line interface and MCP server for the Summit goal tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SummitMcpServer};
use renderer::TerminalRenderer;
use summit_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Summit started");

    match command {
        Some(Goal { command }) => {
            Cli::new(tracker, renderer)
                .handle_goal_command(command)
                .await
        }
        Some(Super { command }) => {
            Cli::new(tracker, renderer)
                .handle_super_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Summit MCP server");
            run_stdio_server(SummitMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(tracker, renderer).list_super_goals().await,
    }
}
