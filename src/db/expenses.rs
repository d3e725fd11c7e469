use crate::db::migrate::EXPENSES_SHEET;
use crate::db::{Loaded, collect_rows};
use crate::errors::{AppError, AppResult};
use crate::models::Expense;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Expense> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Expense {
        id: row.get("id")?,
        date,
        description: row.get("description")?,
        category: row.get("category")?,
        amount_cents: row.get("amount_cents")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_expense(conn: &Connection, e: &Expense) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO despesas (date, description, category, amount_cents, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            e.date.format("%Y-%m-%d").to_string(),
            e.description,
            e.category,
            e.amount_cents,
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rows with the same date, description, category and amount.
pub fn count_matching_expenses(conn: &Connection, e: &Expense) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "SELECT COUNT(*) FROM despesas
         WHERE date = ?1 AND description = ?2 AND category = ?3 AND amount_cents = ?4",
    )?;
    Ok(stmt.query_row(
        params![
            e.date.format("%Y-%m-%d").to_string(),
            e.description,
            e.category,
            e.amount_cents,
        ],
        |r| r.get(0),
    )?)
}

/// Expenses dated within `bounds` (inclusive), or all of them.
pub fn load_expenses(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Loaded<Expense>> {
    let (sql, args) = match bounds {
        None => (
            "SELECT id, date, description, category, amount_cents, created_at
             FROM despesas ORDER BY date ASC, id ASC",
            vec![],
        ),
        Some((from, to)) => (
            "SELECT id, date, description, category, amount_cents, created_at
             FROM despesas WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC, id ASC",
            vec![
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string(),
            ],
        ),
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args), map_row)?;
    Ok(collect_rows(EXPENSES_SHEET, rows)?)
}
