//! Header-keyed tables read from CSV dumps of the legacy spreadsheet.
//!
//! Columns are matched by header name, in any order. Missing columns are
//! filled with empty cells against the canonical layout of the sheet; when
//! the key column itself is missing the table comes back empty.

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Canonical column order of a sheet and the column it cannot do without.
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub key_column: &'static str,
}

pub const APPOINTMENT_COLUMNS: &[&str] = &[
    "Data",
    "Hora",
    "Nome_Cliente",
    "Contato",
    "Dados_Pessoais",
    "Anamnese_Geral",
    "Saude_Mulher",
    "Medidas_Corporais",
    "Analise_Facial",
    "Orcamento",
    "Status",
];

pub const EXPENSE_COLUMNS: &[&str] = &["Data", "Descricao", "Categoria", "Valor"];

pub const APPOINTMENTS: SheetLayout = SheetLayout {
    name: "agendamentos",
    columns: APPOINTMENT_COLUMNS,
    key_column: "Data",
};

pub const EXPENSES: SheetLayout = SheetLayout {
    name: "despesas",
    columns: EXPENSE_COLUMNS,
    key_column: "Valor",
};

/// Rows laid out in canonical column order.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub layout: SheetLayout,
    pub rows: Vec<Vec<String>>,
    pub warnings: Vec<String>,
}

/// One row with cells reachable by header name.
pub struct SheetRow<'a> {
    layout: &'a SheetLayout,
    cells: &'a [String],
}

impl SheetRow<'_> {
    /// Cell of column `name`, "" for unknown columns.
    pub fn get(&self, name: &str) -> &str {
        self.layout
            .columns
            .iter()
            .position(|c| *c == name)
            .and_then(|i| self.cells.get(i))
            .map(|s| s.trim())
            .unwrap_or("")
    }
}

impl SheetTable {
    pub fn empty(layout: SheetLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn read_path(path: &Path, layout: SheetLayout) -> AppResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read(file, layout)
    }

    /// Parse a CSV stream with a header row, repairing the columns.
    pub fn read<R: std::io::Read>(input: R, layout: SheetLayout) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| malformed(&layout, e))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut table = Self::empty(layout);

        if !headers.iter().any(|h| h == layout.key_column) {
            table.warnings.push(format!(
                "Sheet '{}' has no '{}' column: nothing to read",
                layout.name, layout.key_column
            ));
            return Ok(table);
        }

        // Source index of every canonical column, if present.
        let mapping: Vec<Option<usize>> = layout
            .columns
            .iter()
            .map(|c| headers.iter().position(|h| h == c))
            .collect();

        for (col, idx) in layout.columns.iter().zip(&mapping) {
            if idx.is_none() {
                table.warnings.push(format!(
                    "Sheet '{}' is missing column '{}': filled with empty cells",
                    layout.name, col
                ));
            }
        }

        for extra in headers
            .iter()
            .filter(|h| !h.is_empty() && !layout.columns.contains(&h.as_str()))
        {
            table.warnings.push(format!(
                "Sheet '{}': ignoring unknown column '{}'",
                layout.name, extra
            ));
        }

        for (n, record) in rdr.records().enumerate() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    // Line 1 is the header.
                    table
                        .warnings
                        .push(format!("Skipped unreadable line {}: {}", n + 2, e));
                    continue;
                }
            };

            if record.iter().all(|c| c.trim().is_empty()) {
                continue;
            }

            let row = mapping
                .iter()
                .map(|idx| {
                    idx.and_then(|i| record.get(i))
                        .unwrap_or("")
                        .to_string()
                })
                .collect();
            table.rows.push(row);
        }

        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = SheetRow<'_>> {
        self.rows.iter().map(|cells| SheetRow {
            layout: &self.layout,
            cells,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn malformed(layout: &SheetLayout, e: csv::Error) -> AppError {
    AppError::MalformedData {
        sheet: layout.name.to_string(),
        message: e.to_string(),
    }
}
