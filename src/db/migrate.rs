use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

pub const APPOINTMENTS_SHEET: &str = "agendamentos";
pub const EXPENSES_SHEET: &str = "despesas";
pub const PHOTOS_SHEET: &str = "fotos";

/// Sheets every initialized workbook must have.
pub const SHEETS: [&str; 3] = [APPOINTMENTS_SHEET, EXPENSES_SHEET, PHOTOS_SHEET];

/// Ensure that the `log` table exists: it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// First layout: appointment/intake rows and expenses.
fn create_sheets(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS agendamentos (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            record_key        TEXT NOT NULL UNIQUE,
            client_key        TEXT NOT NULL,
            date              TEXT NOT NULL,
            time              TEXT NOT NULL,
            client_name       TEXT NOT NULL CHECK(length(trim(client_name)) > 0),
            contact           TEXT NOT NULL DEFAULT '',
            personal_data     TEXT NOT NULL DEFAULT '-',
            anamnesis         TEXT NOT NULL DEFAULT '-',
            women_health      TEXT NOT NULL DEFAULT '-',
            body_measurements TEXT NOT NULL DEFAULT '-',
            facial_analysis   TEXT NOT NULL DEFAULT '-',
            budget            TEXT NOT NULL DEFAULT '-',
            budget_cents      INTEGER,
            status            TEXT NOT NULL DEFAULT 'Agendado',
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_agendamentos_date_time ON agendamentos(date, time);
        CREATE INDEX IF NOT EXISTS idx_agendamentos_client_date ON agendamentos(client_key, date);

        CREATE TABLE IF NOT EXISTS despesas (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            category      TEXT NOT NULL DEFAULT 'Outros',
            amount_cents  INTEGER NOT NULL CHECK(amount_cents >= 0),
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_despesas_date ON despesas(date);
        "#,
    )?;
    Ok(())
}

/// Photo side sheet plus the link column on appointments.
fn add_photos(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS fotos (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            client_key  TEXT NOT NULL,
            file_name   TEXT NOT NULL,
            mime        TEXT NOT NULL,
            data_b64    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;

    if !has_column(conn, APPOINTMENTS_SHEET, "photo_id")? {
        conn.execute(
            "ALTER TABLE agendamentos ADD COLUMN photo_id INTEGER REFERENCES fotos(id)",
            [],
        )?;
    }
    Ok(())
}

/// Appointments get a length so that slots can be compared as intervals.
fn add_duration(conn: &Connection) -> AppResult<()> {
    if !has_column(conn, APPOINTMENTS_SHEET, "duration_min")? {
        conn.execute(
            "ALTER TABLE agendamentos ADD COLUMN duration_min INTEGER NOT NULL DEFAULT 60",
            [],
        )?;
    }
    Ok(())
}

type Step = fn(&Connection) -> AppResult<()>;

/// Ordered migration ladder: (version, description, step).
const MIGRATIONS: [(&str, &str, Step); 3] = [
    (
        "20250301_0001_create_sheets",
        "Created agendamentos and despesas sheets",
        create_sheets,
    ),
    (
        "20250410_0002_add_photos",
        "Added fotos sheet and photo link",
        add_photos,
    ),
    (
        "20250522_0003_add_duration",
        "Added duration_min to agendamentos",
        add_duration,
    ),
];

/// Public entry point: run all pending migrations, each in its own
/// transaction. Returns the versions applied by this call.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let result = step(conn).and_then(|_| mark_applied(conn, version, message));

        match result {
            Ok(()) => {
                conn.execute_batch("COMMIT;")?;
                success(format!("Migration applied: {version}"));
                applied.push(version);
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                return Err(AppError::Migration(format!("{version}: {e}")));
            }
        }
    }

    Ok(applied)
}
