use crate::config::Config;
use crate::core::schedule::validate_duration;
use crate::db::expenses::{count_matching_expenses, insert_expense};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_appointment, record_key_exists};
use crate::errors::{AppError, AppResult};
use crate::models::appointment::EMPTY_CELL;
use crate::models::client::validate_name;
use crate::models::{Appointment, Expense, Status};
use crate::sheets::{SheetRow, SheetTable};
use crate::utils::date::parse_date;
use crate::utils::money::{checked_cents, parse_amount};
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Counters reported at the end of an import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub read: usize,
    pub imported: usize,
    /// Already present (same record key).
    pub duplicates: usize,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

/// Build an appointment from a legacy row. Rows lacking a time are kept at
/// midnight; legacy rows carry no duration, so the slot length applies.
pub fn appointment_from_row(row: &SheetRow, slot_minutes: i64) -> Result<Appointment, String> {
    let date = parse_date(row.get("Data"))
        .ok_or_else(|| format!("invalid date '{}'", row.get("Data")))?;

    let hora = row.get("Hora");
    let time = if hora.is_empty() {
        NaiveTime::MIN
    } else {
        parse_time(hora).ok_or_else(|| format!("invalid time '{hora}'"))?
    };

    let name = validate_name(row.get("Nome_Cliente")).map_err(|e| e.to_string())?;

    let mut appt = Appointment::new(date, time, slot_minutes, &name, row.get("Contato"));

    let cell = |col: &str| {
        let v = row.get(col);
        if v.is_empty() { EMPTY_CELL.to_string() } else { v.to_string() }
    };
    appt.personal_data = cell("Dados_Pessoais");
    appt.anamnesis = cell("Anamnese_Geral");
    appt.women_health = cell("Saude_Mulher");
    appt.body_measurements = cell("Medidas_Corporais");
    appt.facial_analysis = cell("Analise_Facial");
    appt.budget = cell("Orcamento");
    appt.budget_cents = parse_amount(&appt.budget).and_then(checked_cents);

    let status = row.get("Status");
    if !status.is_empty() {
        appt.status = Status::from_label(status);
    }

    Ok(appt)
}

pub fn expense_from_row(row: &SheetRow) -> Result<Expense, String> {
    let date = parse_date(row.get("Data"))
        .ok_or_else(|| format!("invalid date '{}'", row.get("Data")))?;

    let amount = parse_amount(row.get("Valor"))
        .ok_or_else(|| format!("invalid amount '{}'", row.get("Valor")))?;
    let cents = checked_cents(amount)
        .ok_or_else(|| format!("amount out of range '{}'", row.get("Valor")))?;

    let category = match row.get("Categoria") {
        "" => "Outros",
        c => c,
    };

    Ok(Expense::new(
        date,
        row.get("Descricao"),
        category,
        cents,
    ))
}

pub struct ImportLogic;

impl ImportLogic {
    /// Append the rows of a legacy `agendamentos` dump.
    ///
    /// Overlaps are not checked: historical sheets are taken as they are.
    /// Rows whose record key already exists are skipped, so re-running an
    /// import is harmless.
    pub fn appointments(
        pool: &mut DbPool,
        cfg: &Config,
        table: &SheetTable,
        dry_run: bool,
    ) -> AppResult<ImportReport> {
        validate_duration(cfg.slot_minutes)?;

        let mut report = ImportReport {
            warnings: table.warnings.clone(),
            ..ImportReport::default()
        };

        let tx = pool.immediate()?;

        for (n, row) in table.iter().enumerate() {
            report.read += 1;

            let appt = match appointment_from_row(&row, cfg.slot_minutes) {
                Ok(a) => a,
                Err(msg) => {
                    report.skipped += 1;
                    report.warnings.push(format!("Row {}: {}", n + 1, msg));
                    continue;
                }
            };

            let key = appt.record_key();
            if record_key_exists(&tx, &key)? {
                report.duplicates += 1;
                continue;
            }

            insert_appointment(&tx, &appt)?;
            report.imported += 1;
        }

        finish(tx, table, &report, dry_run)?;
        Ok(report)
    }

    /// Append the rows of a legacy `despesas` dump.
    ///
    /// Expenses have no key, so a row counts as a duplicate when the sheet
    /// already held as many identical rows (date, description, category,
    /// amount) as the dump has seen so far. Repeated lines inside one dump
    /// are kept; re-running the same dump imports nothing.
    pub fn expenses(pool: &mut DbPool, table: &SheetTable, dry_run: bool) -> AppResult<ImportReport> {
        let mut report = ImportReport {
            warnings: table.warnings.clone(),
            ..ImportReport::default()
        };

        let tx = pool.immediate()?;
        // (stored before this run, seen in this run) per identical row
        let mut seen: HashMap<(NaiveDate, String, String, i64), (i64, i64)> = HashMap::new();

        for (n, row) in table.iter().enumerate() {
            report.read += 1;

            let e = match expense_from_row(&row) {
                Ok(e) => e,
                Err(msg) => {
                    report.skipped += 1;
                    report.warnings.push(format!("Row {}: {}", n + 1, msg));
                    continue;
                }
            };

            let key = (e.date, e.description.clone(), e.category.clone(), e.amount_cents);
            let entry = match seen.entry(key) {
                Entry::Occupied(o) => o.into_mut(),
                Entry::Vacant(v) => v.insert((count_matching_expenses(&tx, &e)?, 0)),
            };
            entry.1 += 1;
            if entry.1 <= entry.0 {
                report.duplicates += 1;
                continue;
            }

            insert_expense(&tx, &e)?;
            report.imported += 1;
        }

        finish(tx, table, &report, dry_run)?;
        Ok(report)
    }
}

/// Commit (with an audit line) or roll back for a dry run.
fn finish(
    tx: rusqlite::Transaction<'_>,
    table: &SheetTable,
    report: &ImportReport,
    dry_run: bool,
) -> AppResult<()> {
    if dry_run {
        tx.rollback()?;
        return Ok(());
    }

    audit(
        &tx,
        "import",
        table.layout.name,
        &format!(
            "Imported {} of {} rows ({} duplicates, {} skipped)",
            report.imported, report.read, report.duplicates, report.skipped
        ),
    )?;
    tx.commit().map_err(AppError::from)
}
