// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::SheetRows;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

pub(crate) fn export_pdf(rows: &SheetRows, path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(title, rows.headers(), &rows.to_table());

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
