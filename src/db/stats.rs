use crate::db::migrate::SHEETS;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print file size, row count per sheet and the appointment date range.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROWS PER SHEET
    //
    for sheet in SHEETS {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {sheet}"), [], |row| row.get(0))?;
        println!(
            "{}• Rows in {}:{} {}{}{}",
            CYAN, sheet, RESET, GREEN, count, RESET
        );
    }

    //
    // 3) APPOINTMENT DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM agendamentos", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = format!("{GREY}--{RESET}");

    println!("{}• Appointments:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last.unwrap_or(placeholder));

    println!();
    Ok(())
}
