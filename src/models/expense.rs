use crate::utils::date::format_br;
use crate::utils::money::{format_cents, from_cents};
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

/// Categories offered when recording an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpenseCategory {
    Rent,
    Utilities,
    Supplies,
    Staff,
    Other,
}

impl ExpenseCategory {
    /// Label stored in the `Categoria` column.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Aluguel",
            ExpenseCategory::Utilities => "Luz/Água",
            ExpenseCategory::Supplies => "Produtos",
            ExpenseCategory::Staff => "Pessoal",
            ExpenseCategory::Other => "Outros",
        }
    }
}

/// One row of the `despesas` sheet.
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    /// Free text: older sheets carry categories outside [`ExpenseCategory`].
    pub category: String,
    pub amount_cents: i64,
    pub created_at: String,
}

impl Expense {
    pub fn new(date: NaiveDate, description: &str, category: &str, amount_cents: i64) -> Self {
        Self {
            id: 0,
            date,
            description: description.trim().to_string(),
            category: category.to_string(),
            amount_cents,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn amount(&self) -> f64 {
        from_cents(self.amount_cents)
    }

    pub fn date_br(&self) -> String {
        format_br(&self.date)
    }

    /// `Valor` cell: "1.234,56"
    pub fn amount_str(&self) -> String {
        format_cents(self.amount_cents)
    }
}
