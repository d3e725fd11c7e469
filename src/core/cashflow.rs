use crate::db::expenses::load_expenses;
use crate::db::queries::load_appointments;
use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, Expense};
use crate::utils::date::month_bounds;
use crate::utils::money::to_cents;
use rusqlite::Connection;

/// Income, expenses and profit of one calendar month, in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub income_cents: i64,
    pub expense_cents: i64,
    pub appointments: usize,
    /// Rows whose budget carries no readable amount (counted as zero).
    pub unpriced: usize,
    pub expenses: usize,
}

impl MonthlySummary {
    pub fn profit_cents(&self) -> i64 {
        self.income_cents.saturating_sub(self.expense_cents)
    }

    /// Pure aggregation over rows already filtered to the month.
    pub fn compute(
        year: i32,
        month: u32,
        appointments: &[Appointment],
        expenses: &[Expense],
    ) -> Self {
        let mut income_cents: i64 = 0;
        let mut unpriced = 0;

        // Rows edited outside the app may carry anything; totals saturate.
        for a in appointments {
            match a.budget_cents.or_else(|| a.amount().map(to_cents)) {
                Some(c) => income_cents = income_cents.saturating_add(c),
                None => unpriced += 1,
            }
        }

        Self {
            year,
            month,
            income_cents,
            expense_cents: expenses
                .iter()
                .fold(0i64, |acc, e| acc.saturating_add(e.amount_cents)),
            appointments: appointments.len(),
            unpriced,
            expenses: expenses.len(),
        }
    }

    /// Load both sheets for the month and summarize them.
    /// Warnings about malformed rows are returned alongside.
    pub fn load(conn: &Connection, year: i32, month: u32) -> AppResult<(Self, Vec<String>)> {
        let bounds = month_bounds(year, month)
            .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;

        let appts = load_appointments(conn, Some(bounds))?;
        let exps = load_expenses(conn, Some(bounds))?;

        let summary = Self::compute(year, month, &appts.records, &exps.records);

        let mut warnings = appts.warnings;
        warnings.extend(exps.warnings);
        Ok((summary, warnings))
    }
}
