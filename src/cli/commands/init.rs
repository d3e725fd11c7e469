use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with --test)
///  - the workbook file and its sheets, through the migration ladder
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing rClinic…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Workbook    : {}", db_path);

    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;

    if applied.is_empty() {
        info("Workbook already up to date.");
    }

    // Non-blocking: the workbook is usable even if the log line fails.
    if let Err(e) = audit(
        &conn,
        "init",
        &db_path,
        &format!("Workbook initialized ({} migrations applied)", applied.len()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Workbook initialized at {}", db_path));
    Ok(())
}
