// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_bounds;
use chrono::NaiveDate;

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - A:B where both sides have the same shape (YYYY:YYYY, ...)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have the same format"));
        }

        let (from, _) = period_bounds(start).ok_or_else(|| invalid(r, "invalid start"))?;
        let (_, to) = period_bounds(end).ok_or_else(|| invalid(r, "invalid end"))?;

        if from > to {
            return Err(invalid(r, "start is after end"));
        }
        return Ok((from, to));
    }

    period_bounds(r).ok_or_else(|| invalid(r, "expected YYYY, YYYY-MM or YYYY-MM-DD"))
}

/// First and last day covered by a year, a month or a single day.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = p.split_once('-')?;
            month_bounds(y.parse().ok()?, m.parse().ok()?)
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("range '{r}': {why}"))
}
