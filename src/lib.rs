//! rClinic library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (used directly by the integration tests).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod forms;
pub mod models;
pub mod sheets;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg),
        Commands::Db { .. } => cli::commands::db::handle(cmd, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cmd, cfg),
        Commands::Book { .. } => cli::commands::book::handle(cmd, cfg),
        Commands::Agenda { .. } => cli::commands::agenda::handle(cmd, cfg),
        Commands::Intake { .. } => cli::commands::intake::handle(cmd, cfg),
        Commands::Print { .. } => cli::commands::print::handle(cmd, cfg),
        Commands::Cashflow { .. } => cli::commands::cashflow::handle(cmd, cfg),
        Commands::Expense { .. } => cli::commands::expense::handle(cmd, cfg),
        Commands::Expenses { .. } => cli::commands::expenses::handle(cmd, cfg),
        Commands::Photo { .. } => cli::commands::photo::handle(cmd, cfg),
        Commands::Import { .. } => cli::commands::import::handle(cmd, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cmd, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once; --db wins over RCLINIC_DB and the file.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
