// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::SheetRows;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &SheetRows, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = match rows {
        SheetRows::Appointments(v) => serde_json::to_string_pretty(v),
        SheetRows::Expenses(v) => serde_json::to_string_pretty(v),
    }
    .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV; the header row comes from the serde names.
pub(crate) fn export_csv(rows: &SheetRows, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    match rows {
        SheetRows::Appointments(v) => write_csv(v, path)?,
        SheetRows::Expenses(v) => write_csv(v, path)?,
    }

    notify_export_success("CSV", path);
    Ok(())
}

fn write_csv<T: Serialize>(items: &[T], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in items {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
