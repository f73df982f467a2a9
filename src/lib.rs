//! tablelane library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! row-to-timeline transformation pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod settings_store;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Views { .. } => cli::commands::views::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Command-line path overrides win over the config file.
    if let Some(snapshot) = &cli.snapshot {
        cfg.snapshot = snapshot.clone();
    }
    if let Some(views_file) = &cli.views_file {
        cfg.saved_views = views_file.clone();
    }
    if let Some(prefs_file) = &cli.prefs_file {
        cfg.prefs = prefs_file.clone();
    }

    dispatch(&cli, &cfg)
}
