use crate::errors::AppResult;
use crate::models::Photo;
use rusqlite::{Connection, OptionalExtension, params};

pub fn insert_photo(conn: &Connection, p: &Photo) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO fotos (client_key, file_name, mime, data_b64, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![p.client_key, p.file_name, p.mime, p.data_b64, p.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_photo(conn: &Connection, id: i64) -> AppResult<Option<Photo>> {
    let photo = conn
        .query_row(
            "SELECT id, client_key, file_name, mime, data_b64, created_at
             FROM fotos WHERE id = ?1",
            [id],
            |row| {
                Ok(Photo {
                    id: row.get(0)?,
                    client_key: row.get(1)?,
                    file_name: row.get(2)?,
                    mime: row.get(3)?,
                    data_b64: row.get(4)?,
                    created_at: row.get(5)?,
                })
            },
        )
        .optional()?;
    Ok(photo)
}
