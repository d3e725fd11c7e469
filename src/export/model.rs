// src/export/model.rs

use crate::models::{Appointment, Expense};
use crate::sheets::{APPOINTMENT_COLUMNS, EXPENSE_COLUMNS};
use serde::Serialize;

/// `agendamentos` row in the canonical sheet layout.
#[derive(Serialize, Clone, Debug)]
pub struct AppointmentExport {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Hora")]
    pub time: String,
    #[serde(rename = "Nome_Cliente")]
    pub client_name: String,
    #[serde(rename = "Contato")]
    pub contact: String,
    #[serde(rename = "Dados_Pessoais")]
    pub personal_data: String,
    #[serde(rename = "Anamnese_Geral")]
    pub anamnesis: String,
    #[serde(rename = "Saude_Mulher")]
    pub women_health: String,
    #[serde(rename = "Medidas_Corporais")]
    pub body_measurements: String,
    #[serde(rename = "Analise_Facial")]
    pub facial_analysis: String,
    #[serde(rename = "Orcamento")]
    pub budget: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<&Appointment> for AppointmentExport {
    fn from(a: &Appointment) -> Self {
        Self {
            date: a.date_br(),
            time: a.time_str(),
            client_name: a.client_name.clone(),
            contact: a.contact.clone(),
            personal_data: a.personal_data.clone(),
            anamnesis: a.anamnesis.clone(),
            women_health: a.women_health.clone(),
            body_measurements: a.body_measurements.clone(),
            facial_analysis: a.facial_analysis.clone(),
            budget: a.budget.clone(),
            status: a.status.label().to_string(),
        }
    }
}

impl AppointmentExport {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.time.clone(),
            self.client_name.clone(),
            self.contact.clone(),
            self.personal_data.clone(),
            self.anamnesis.clone(),
            self.women_health.clone(),
            self.body_measurements.clone(),
            self.facial_analysis.clone(),
            self.budget.clone(),
            self.status.clone(),
        ]
    }
}

/// `despesas` row; `Valor` keeps the locale string ("1.234,56").
#[derive(Serialize, Clone, Debug)]
pub struct ExpenseExport {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Descricao")]
    pub description: String,
    #[serde(rename = "Categoria")]
    pub category: String,
    #[serde(rename = "Valor")]
    pub amount: String,
}

impl From<&Expense> for ExpenseExport {
    fn from(e: &Expense) -> Self {
        Self {
            date: e.date_br(),
            description: e.description.clone(),
            category: e.category.clone(),
            amount: e.amount_str(),
        }
    }
}

impl ExpenseExport {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.description.clone(),
            self.category.clone(),
            self.amount.clone(),
        ]
    }
}

/// Rows of one sheet, ready for any writer.
pub enum SheetRows {
    Appointments(Vec<AppointmentExport>),
    Expenses(Vec<ExpenseExport>),
}

impl SheetRows {
    pub fn len(&self) -> usize {
        match self {
            SheetRows::Appointments(v) => v.len(),
            SheetRows::Expenses(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header for CSV / XLSX / PDF
    pub(crate) fn headers(&self) -> &'static [&'static str] {
        match self {
            SheetRows::Appointments(_) => APPOINTMENT_COLUMNS,
            SheetRows::Expenses(_) => EXPENSE_COLUMNS,
        }
    }

    /// Columns holding an amount, written as numbers in spreadsheets.
    pub(crate) fn amount_columns(&self) -> &'static [usize] {
        match self {
            SheetRows::Appointments(_) => &[],
            SheetRows::Expenses(_) => &[3],
        }
    }

    /// Plain string table (for XLSX and PDF).
    pub(crate) fn to_table(&self) -> Vec<Vec<String>> {
        match self {
            SheetRows::Appointments(v) => v.iter().map(AppointmentExport::to_row).collect(),
            SheetRows::Expenses(v) => v.iter().map(ExpenseExport::to_row).collect(),
        }
    }
}
