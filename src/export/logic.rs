// src/export/logic.rs

use crate::db::expenses::load_expenses;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_appointments;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{AppointmentExport, ExpenseExport, SheetRows};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, SheetKind};
use crate::ui::messages::warning;
use crate::utils::date::{format_br, month_name};
use crate::utils::path::expand_tilde;
use chrono::{Datelike, NaiveDate};

pub struct ExportLogic;

impl ExportLogic {
    /// Write one sheet in its canonical layout.
    ///
    /// `range`: `None`, `"all"`, or any expression accepted by `parse_range`.
    /// Returns the number of rows written; nothing is written for an empty
    /// selection.
    pub fn export(
        pool: &DbPool,
        sheet: SheetKind,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(pool, sheet, bounds)?;

        if rows.is_empty() {
            warning(format!("No {} rows found for the selected range.", sheet.as_str()));
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, sheet.as_str(), path)?,
            ExportFormat::Pdf => export_pdf(&rows, path, &build_pdf_title(sheet, bounds))?,
        }

        audit(
            &pool.conn,
            "export",
            sheet.as_str(),
            &format!(
                "{} rows as {} to {}",
                rows.len(),
                format.as_str(),
                path.display()
            ),
        )?;

        Ok(rows.len())
    }
}

/// PDF title from the sheet and the selected period.
fn build_pdf_title(sheet: SheetKind, bounds: Option<(NaiveDate, NaiveDate)>) -> String {
    let what = match sheet {
        SheetKind::Agendamentos => "Appointments",
        SheetKind::Despesas => "Expenses",
    };

    match bounds {
        None => what.to_string(),
        Some((from, to)) if from == to => format!("{what} on {}", format_br(&from)),
        Some((from, to)) => {
            let whole_month = from.day() == 1
                && from.year() == to.year()
                && from.month() == to.month()
                && to.succ_opt().is_none_or(|n| n.month() != to.month());
            if whole_month {
                format!("{what} for {} {}", month_name(from.month()), from.year())
            } else {
                format!("{what} from {} to {}", format_br(&from), format_br(&to))
            }
        }
    }
}

fn load_rows(
    pool: &DbPool,
    sheet: SheetKind,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<SheetRows> {
    let rows = match sheet {
        SheetKind::Agendamentos => {
            let loaded = load_appointments(&pool.conn, bounds)?;
            loaded.report();
            SheetRows::Appointments(loaded.records.iter().map(AppointmentExport::from).collect())
        }
        SheetKind::Despesas => {
            let loaded = load_expenses(&pool.conn, bounds)?;
            loaded.report();
            SheetRows::Expenses(loaded.records.iter().map(ExpenseExport::from).collect())
        }
    };
    Ok(rows)
}
