use super::client::client_key;
use super::status::Status;
use crate::core::schedule::Slot;
use crate::utils::date::format_br;
use crate::utils::money::{from_cents, parse_amount};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// Placeholder written in the blob columns a quick booking does not fill.
pub const EMPTY_CELL: &str = "-";

/// One row of the `agendamentos` sheet: a booking or a full intake record.
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: i64,
    pub date: NaiveDate,   // ⇔ agendamentos.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,   // ⇔ agendamentos.time (TEXT "HH:MM")
    pub duration_min: i64, // ⇔ agendamentos.duration_min

    pub client_name: String,
    pub contact: String,

    pub personal_data: String,
    pub anamnesis: String,
    pub women_health: String,
    pub body_measurements: String,
    pub facial_analysis: String,
    pub budget: String,
    pub budget_cents: Option<i64>,

    pub status: Status,
    pub photo_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Appointment {
    /// A new, not yet stored row (`id = 0`) with every blob column empty.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        duration_min: i64,
        client_name: &str,
        contact: &str,
    ) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            date,
            time,
            duration_min,
            client_name: client_name.to_string(),
            contact: contact.to_string(),
            personal_data: EMPTY_CELL.to_string(),
            anamnesis: EMPTY_CELL.to_string(),
            women_health: EMPTY_CELL.to_string(),
            body_measurements: EMPTY_CELL.to_string(),
            facial_analysis: EMPTY_CELL.to_string(),
            budget: EMPTY_CELL.to_string(),
            budget_cents: None,
            status: Status::Scheduled,
            photo_id: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn client_key(&self) -> String {
        client_key(&self.client_name)
    }

    /// Generated row identifier: client key plus appointment start.
    pub fn record_key(&self) -> String {
        format!(
            "{}@{}T{}",
            self.client_key(),
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M")
        )
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.date, self.time, self.duration_min)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn date_br(&self) -> String {
        format_br(&self.date)
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Amount charged for this appointment: the typed value when present,
    /// otherwise whatever can be read from the budget text.
    pub fn amount(&self) -> Option<f64> {
        self.budget_cents
            .map(from_cents)
            .or_else(|| parse_amount(&self.budget))
    }
}
