//! rLeaveCalc library root.
//! Exposes the leave-calculation engine, its models, and the CLI front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Items { .. } => cli::commands::items::handle(&cli.command, cfg),
        Commands::Limits { .. } => cli::commands::limits::handle(&cli.command, cfg),
        Commands::ReportLimits { .. } => cli::commands::report_limits::handle(&cli.command, cfg),
        Commands::Overview { .. } => cli::commands::overview::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, from --config when given
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    if let Some(data) = &cli.data {
        cfg.dataset = data.clone();
    }

    dispatch(&cli, &cfg)
}
