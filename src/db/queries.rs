use crate::db::migrate::APPOINTMENTS_SHEET;
use crate::db::{Loaded, collect_rows};
use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, Status};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const COLUMNS: &str = "id, date, time, duration_min, client_name, contact, \
     personal_data, anamnesis, women_health, body_measurements, facial_analysis, \
     budget, budget_cents, status, photo_id, created_at, updated_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Appointment> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M")
        .map_err(|_| conversion_error(2, AppError::InvalidTime(time_str.clone())))?;

    let status: String = row.get("status")?;

    Ok(Appointment {
        id: row.get("id")?,
        date,
        time,
        duration_min: row.get("duration_min")?,
        client_name: row.get("client_name")?,
        contact: row.get("contact")?,
        personal_data: row.get("personal_data")?,
        anamnesis: row.get("anamnesis")?,
        women_health: row.get("women_health")?,
        body_measurements: row.get("body_measurements")?,
        facial_analysis: row.get("facial_analysis")?,
        budget: row.get("budget")?,
        budget_cents: row.get("budget_cents")?,
        status: Status::from_label(&status),
        photo_id: row.get("photo_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Append a row; returns the new id.
pub fn insert_appointment(conn: &Connection, a: &Appointment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO agendamentos (record_key, client_key, date, time, duration_min,
             client_name, contact, personal_data, anamnesis, women_health,
             body_measurements, facial_analysis, budget, budget_cents, status,
             photo_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
        params![
            a.record_key(),
            a.client_key(),
            a.date_str(),
            a.time_str(),
            a.duration_min,
            a.client_name,
            a.contact,
            a.personal_data,
            a.anamnesis,
            a.women_health,
            a.body_measurements,
            a.facial_analysis,
            a.budget,
            a.budget_cents,
            a.status.label(),
            a.photo_id,
            a.created_at,
            a.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite the intake columns of row `id`. The date, the photo link and
/// `created_at` are left alone.
pub fn update_intake_columns(conn: &Connection, id: i64, a: &Appointment) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE agendamentos
         SET record_key = ?1, time = ?2, duration_min = ?3, client_name = ?4,
             contact = ?5, personal_data = ?6, anamnesis = ?7, women_health = ?8,
             body_measurements = ?9, facial_analysis = ?10, budget = ?11,
             budget_cents = ?12, status = ?13, updated_at = ?14
         WHERE id = ?15",
        params![
            a.record_key(),
            a.time_str(),
            a.duration_min,
            a.client_name,
            a.contact,
            a.personal_data,
            a.anamnesis,
            a.women_health,
            a.body_measurements,
            a.facial_analysis,
            a.budget,
            a.budget_cents,
            a.status.label(),
            a.updated_at,
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::Other(format!("appointment #{id} vanished during update")));
    }
    Ok(())
}

/// Rows dated within `bounds` (inclusive), or every row when `None`,
/// ordered by date and time.
pub fn load_appointments(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Loaded<Appointment>> {
    let loaded = match bounds {
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM agendamentos ORDER BY date ASC, time ASC, id ASC"
            ))?;
            let rows = stmt.query_map([], map_row)?;
            collect_rows(APPOINTMENTS_SHEET, rows)?
        }
        Some((from, to)) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM agendamentos
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, time ASC, id ASC"
            ))?;
            let rows = stmt.query_map(
                params![
                    from.format("%Y-%m-%d").to_string(),
                    to.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            collect_rows(APPOINTMENTS_SHEET, rows)?
        }
    };
    Ok(loaded)
}

pub fn load_appointments_between(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Loaded<Appointment>> {
    load_appointments(conn, Some((from, to)))
}

/// Every row of one client, oldest first.
pub fn load_for_client(conn: &Connection, client_key: &str) -> AppResult<Loaded<Appointment>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM agendamentos
         WHERE client_key = ?1
         ORDER BY date ASC, time ASC, id ASC"
    ))?;
    let rows = stmt.query_map([client_key], map_row)?;
    Ok(collect_rows(APPOINTMENTS_SHEET, rows)?)
}

/// Most recent row of a client, optionally restricted to one day.
pub fn latest_for_client(
    conn: &Connection,
    client_key: &str,
    date: Option<NaiveDate>,
) -> AppResult<Option<Appointment>> {
    let row = match date {
        Some(d) => conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM agendamentos
                     WHERE client_key = ?1 AND date = ?2
                     ORDER BY id DESC LIMIT 1"
                ),
                params![client_key, d.format("%Y-%m-%d").to_string()],
                map_row,
            )
            .optional()?,
        None => conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM agendamentos
                     WHERE client_key = ?1
                     ORDER BY date DESC, time DESC, id DESC LIMIT 1"
                ),
                [client_key],
                map_row,
            )
            .optional()?,
    };
    Ok(row)
}

pub fn record_key_exists(conn: &Connection, record_key: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM agendamentos WHERE record_key = ?1")?;
    Ok(stmt.exists([record_key])?)
}

/// Distinct clients: (display name of the latest row, number of rows, last date).
pub fn distinct_clients(conn: &Connection) -> AppResult<Vec<(String, i64, String)>> {
    let mut stmt = conn.prepare(
        "SELECT
             (SELECT a2.client_name FROM agendamentos a2
              WHERE a2.client_key = a.client_key
              ORDER BY a2.id DESC LIMIT 1) AS display_name,
             COUNT(*),
             MAX(a.date)
         FROM agendamentos a
         GROUP BY a.client_key
         ORDER BY display_name COLLATE NOCASE ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_photo(conn: &Connection, appointment_id: i64, photo_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE agendamentos SET photo_id = ?1, updated_at = ?2 WHERE id = ?3",
        params![photo_id, chrono::Local::now().to_rfc3339(), appointment_id],
    )?;
    Ok(())
}
