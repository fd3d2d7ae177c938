//! Dayplan CLI Application
//!
//! Command-line interface for the dayplan single-day planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use dayplan_core::SchedulerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        strategy,
        command,
    } = Args::parse();

    let mut builder = SchedulerBuilder::new().with_database_path(database_file);
    if let Some(strategy) = strategy {
        builder = builder.with_strategy(strategy.into());
    }
    let scheduler = builder.build().await.context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Dayplan started");

    match command {
        Some(Task { command }) => {
            Cli::new(scheduler, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Day { command }) => {
            Cli::new(scheduler, renderer)
                .handle_day_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(scheduler, renderer)
                .handle_plan_command(command)
                .await
        }
        None => {
            // Bare invocation shows today's tasks
            let today = jiff::Zoned::now().date();
            Cli::new(scheduler, renderer)
                .list_tasks(&dayplan_core::params::Day { date: today })
                .await
        }
    }
}
