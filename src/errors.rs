//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Coarse classification used by the CLI to decide how an error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The workbook cannot be reached: the user must fix the path or run `init`.
    Connectivity,
    /// Missing or malformed stored data.
    Data,
    /// Input rejected before anything was written.
    Validation,
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook
    // ---------------------------
    #[error("Cannot open workbook: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Malformed data in sheet '{sheet}': {message}")]
    MalformedData { sheet: String, message: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Time slot {requested} is already taken by {client} ({existing})")]
    SlotTaken {
        requested: String,
        client: String,
        existing: String,
    },

    #[error("No records found for client '{0}'")]
    ClientNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Connection(_) => ErrorClass::Connectivity,
            AppError::MalformedData { .. } => ErrorClass::Data,
            AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidAmount(_)
            | AppError::InvalidForm(_)
            | AppError::Validation(_)
            | AppError::SlotTaken { .. }
            | AppError::ClientNotFound(_) => ErrorClass::Validation,
            _ => ErrorClass::Internal,
        }
    }

    /// Hint printed under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self.class() {
            ErrorClass::Connectivity => {
                Some("Check the workbook path (--db, RCLINIC_DB or config) or run `rclinic init`.")
            }
            ErrorClass::Validation => Some("Nothing was written."),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
