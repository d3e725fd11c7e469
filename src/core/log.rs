use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_WIDTH_LIMIT: usize = 60;

static ANSI_ESCAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

/// Width of `s` once colour codes are removed.
fn visible_len(s: &str) -> usize {
    match ANSI_ESCAPE.as_ref() {
        Some(re) => re.replace_all(s, "").chars().count(),
        None => s.chars().count(),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" => Colour::Green,
        "intake" => Colour::Cyan,
        "expense" => Colour::Red,
        "photo" | "print" => Colour::Yellow,
        "import" | "export" => Colour::Blue,
        "backup" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "operation (target)", cut to the column limit; only the operation is coloured.
fn op_cell(e: &LogEntry) -> String {
    let plain = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    let shown = if plain.chars().count() > OP_WIDTH_LIMIT {
        let mut s: String = plain.chars().take(OP_WIDTH_LIMIT - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&e.operation);
    match shown.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(shown.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries: Vec<LogEntry> = load_log(&pool.conn)?
            .into_iter()
            .filter(|e| operation.is_none_or(|op| e.operation == op))
            .collect();

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (e.id.to_string(), date, op_cell(e))
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| visible_len(&r.2)).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((id, date, op), entry) in rows.iter().zip(&entries) {
            let padding = " ".repeat(op_w.saturating_sub(visible_len(op)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
