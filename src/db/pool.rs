//! SQLite connection wrapper for the clinic workbook (lightweight for CLI usage).

use crate::db::migrate::SHEETS;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for another process holding the workbook lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing, initialized workbook.
    ///
    /// A missing file or missing sheet tables is a connectivity failure:
    /// nothing else can work until the path is fixed or `init` is run.
    pub fn new(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::Connection(format!("workbook not found: {path}")));
        }

        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::Connection(format!("{path}: {e}")))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        for sheet in SHEETS {
            let found: Option<String> = conn
                .query_row(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [sheet],
                    |row| row.get(0),
                )
                .optional()
                .map_err(|e| AppError::Connection(format!("{path}: {e}")))?;

            if found.is_none() {
                return Err(AppError::Connection(format!(
                    "{path} is not an initialized workbook (sheet '{sheet}' missing)"
                )));
            }
        }

        Ok(Self { conn })
    }

    /// Start a write transaction that takes the workbook lock up front, so
    /// read-check-write sequences cannot interleave with another process.
    pub fn immediate(&mut self) -> AppResult<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}
