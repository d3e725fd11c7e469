// src/export/mod.rs

mod excel_date;
pub(crate) mod fs_utils;
pub mod html;
mod json_csv;
pub mod logic;
pub mod model;
pub mod pdf;
mod pdf_export;
pub mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{AppointmentExport, ExpenseExport, SheetRows};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Record sheets that can be exported or imported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SheetKind {
    Agendamentos,
    Despesas,
}

impl SheetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Agendamentos => "agendamentos",
            SheetKind::Despesas => "despesas",
        }
    }
}
