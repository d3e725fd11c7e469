use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_appointment, load_appointments_between};
use crate::errors::{AppError, AppResult};
use crate::models::Appointment;
use crate::models::client::validate_name;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::Connection;

/// Half-open time interval `[start, end)` occupied by an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    pub fn new(date: NaiveDate, time: NaiveTime, duration_min: i64) -> Self {
        let start = date.and_time(time);
        Self {
            start,
            end: start + Duration::minutes(duration_min),
        }
    }

    /// `[a,b)` and `[c,d)` overlap iff `a < d && c < b`.
    /// Back-to-back slots (one ends when the other starts) do not overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn describe(&self) -> String {
        format!(
            "{} {}-{}",
            self.start.format("%d/%m/%Y"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// First existing appointment overlapping `candidate`, ignoring the row
/// with id `exclude` (the row being rewritten by an upsert).
pub fn find_conflict<'a>(
    existing: &'a [Appointment],
    candidate: &Slot,
    exclude: Option<i64>,
) -> Option<&'a Appointment> {
    existing
        .iter()
        .filter(|a| Some(a.id) != exclude)
        .find(|a| a.slot().overlaps(candidate))
}

/// Reject `candidate` if it overlaps anything stored around its day.
/// Neighbouring days are loaded too: a late appointment may cross midnight.
pub(crate) fn ensure_slot_free(
    conn: &Connection,
    candidate: &Slot,
    exclude: Option<i64>,
) -> AppResult<()> {
    let day = candidate.start.date();
    let from = day.pred_opt().unwrap_or(day);
    let to = candidate.end.date().succ_opt().unwrap_or(day);

    let around = load_appointments_between(conn, from, to)?;

    if let Some(taken) = find_conflict(&around.records, candidate, exclude) {
        return Err(AppError::SlotTaken {
            requested: candidate.describe(),
            client: taken.client_name.clone(),
            existing: taken.slot().describe(),
        });
    }
    Ok(())
}

pub(crate) fn validate_duration(duration_min: i64) -> AppResult<()> {
    if !(1..=24 * 60).contains(&duration_min) {
        return Err(AppError::Validation(format!(
            "duration must be between 1 and 1440 minutes, got {duration_min}"
        )));
    }
    Ok(())
}

/// Input of the quick agenda screen.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub contact: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_min: Option<i64>,
    pub reason: String,
}

/// High-level business logic for the `book` command.
pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Validate and append a `Agendado` row.
    ///
    /// The conflict check and the insert share one IMMEDIATE transaction, so a
    /// concurrent writer cannot slip a booking in between.
    pub fn book(
        pool: &mut DbPool,
        cfg: &Config,
        req: &BookingRequest,
        today: NaiveDate,
    ) -> AppResult<Appointment> {
        let name = validate_name(&req.name)?;

        if req.date < today {
            return Err(AppError::Validation(format!(
                "cannot book in the past ({} < {})",
                req.date, today
            )));
        }

        let duration = req.duration_min.unwrap_or(cfg.slot_minutes);
        validate_duration(duration)?;

        let mut appt = Appointment::new(req.date, req.time, duration, &name, req.contact.trim());
        if !req.reason.trim().is_empty() {
            appt.budget = format!("Motivo:{}", req.reason.trim());
        }

        let tx = pool.immediate()?;
        ensure_slot_free(&tx, &appt.slot(), None)?;
        appt.id = insert_appointment(&tx, &appt)?;
        audit(
            &tx,
            "book",
            &appt.record_key(),
            &format!("Booked {} on {}", appt.client_name, appt.slot().describe()),
        )?;
        tx.commit()?;

        Ok(appt)
    }
}
