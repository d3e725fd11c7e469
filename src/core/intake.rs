use crate::config::Config;
use crate::core::schedule::{ensure_slot_free, validate_duration};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_appointment, latest_for_client, update_intake_columns};
use crate::errors::AppResult;
use crate::forms::IntakeForm;
use crate::models::Appointment;

/// What a submission did to the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

pub struct IntakeLogic;

impl IntakeLogic {
    /// Save a full evaluation form.
    ///
    /// Rows are keyed by (client, date): a second submission for the same
    /// client on the same day rewrites the existing row (quick booking
    /// included) instead of appending a duplicate.
    pub fn submit(
        pool: &mut DbPool,
        cfg: &Config,
        form: &IntakeForm,
    ) -> AppResult<(Appointment, UpsertOutcome)> {
        let mut appt = form.to_appointment(cfg.slot_minutes)?;
        validate_duration(appt.duration_min)?;

        let key = appt.client_key();

        let tx = pool.immediate()?;

        let existing = latest_for_client(&tx, &key, Some(appt.date))?;
        let exclude = existing.as_ref().map(|e| e.id);

        ensure_slot_free(&tx, &appt.slot(), exclude)?;

        let outcome = match existing {
            Some(prev) => {
                appt.id = prev.id;
                appt.photo_id = prev.photo_id;
                appt.created_at = prev.created_at;
                update_intake_columns(&tx, prev.id, &appt)?;
                UpsertOutcome::Updated
            }
            None => {
                appt.id = insert_appointment(&tx, &appt)?;
                UpsertOutcome::Inserted
            }
        };

        let verb = match outcome {
            UpsertOutcome::Inserted => "Saved",
            UpsertOutcome::Updated => "Updated",
        };
        audit(
            &tx,
            "intake",
            &appt.record_key(),
            &format!("{verb} intake of {} on {}", appt.client_name, appt.date_br()),
        )?;

        tx.commit()?;
        Ok((appt, outcome))
    }
}
