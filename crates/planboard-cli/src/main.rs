//! Planboard CLI Application
//!
//! Command-line interface over `planboard-core`. The acting user comes from
//! `--user` or `PLANBOARD_USER`; every command operates on that user's board
//! only.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use planboard_core::PlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        no_color,
        command,
    } = Args::parse();

    let user_id = user.context("No user given; pass --user <ID> or set PLANBOARD_USER")?;

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Planboard started for user {user_id}");

    let cli = Cli::new(planner, renderer, user_id);
    match command {
        Some(Section { command }) => cli.handle_section_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Board { command }) => cli.handle_board_command(command).await,
        None => cli.show_board().await,
    }
}
