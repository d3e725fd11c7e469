// src/export/excel_date.rs

use crate::utils::date::SHEET_DATE_FMT;
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Read a sheet cell as a date (`DD/MM/YYYY`) or a time (`HH:MM`),
/// returning the Excel serial and the number format to show it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, SHEET_DATE_FMT) {
        return Some(("dd/mm/yyyy", date_to_excel_serial(d)?));
    }

    if s.len() == 5
        && let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M")
    {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

