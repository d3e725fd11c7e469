use chrono::{Datelike, NaiveDate};

/// Date layout used by the sheets (`Data` column) and every printed document.
pub const SHEET_DATE_FMT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Accepts both the ISO form used on the command line and the
/// `DD/MM/YYYY` form found in the sheets.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, SHEET_DATE_FMT))
        .ok()
}

pub fn format_br(d: &NaiveDate) -> String {
    d.format(SHEET_DATE_FMT).to_string()
}

/// First and last day of a month, `None` for an invalid month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

pub fn current_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}

pub fn month_name(m: u32) -> &'static str {
    match m {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
