use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{BookingRequest, ScheduleLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{self, parse_date};
use crate::utils::time::{format_minutes, parse_required_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        name,
        date: day,
        time,
        contact,
        reason,
        duration,
    } = cmd
    {
        let req = BookingRequest {
            name: name.clone(),
            contact: contact.clone().unwrap_or_default(),
            date: parse_date(day).ok_or_else(|| AppError::InvalidDate(day.clone()))?,
            time: parse_required_time(time)?,
            duration_min: *duration,
            reason: reason.clone().unwrap_or_default(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let appt = ScheduleLogic::book(&mut pool, cfg, &req, date::today())?;

        success(format!(
            "Booked {} on {} ({})",
            appt.client_name,
            appt.slot().describe(),
            format_minutes(appt.duration_min)
        ));
    }
    Ok(())
}
