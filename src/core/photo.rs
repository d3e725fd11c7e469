use crate::db::log::audit;
use crate::db::photos::insert_photo;
use crate::db::pool::DbPool;
use crate::db::queries::{latest_for_client, set_photo};
use crate::errors::{AppError, AppResult};
use crate::models::client::{client_key, validate_name};
use crate::models::photo::{MAX_PHOTO_BYTES, mime_for};
use crate::models::{Appointment, Photo};
use std::fs;
use std::path::Path;

pub struct PhotoLogic;

impl PhotoLogic {
    /// Store a picture and link it to the client's most recent row.
    pub fn attach(pool: &mut DbPool, client: &str, file: &Path) -> AppResult<(Appointment, Photo)> {
        let name = validate_name(client)?;
        let key = client_key(&name);

        let mime = mime_for(file).ok_or_else(|| {
            AppError::Validation(format!(
                "unsupported image type: {} (png, jpg, jpeg, gif, webp)",
                file.display()
            ))
        })?;

        let bytes = fs::read(file)?;
        if bytes.is_empty() {
            return Err(AppError::Validation(format!("{} is empty", file.display())));
        }
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(AppError::Validation(format!(
                "{} is {} bytes, the limit is {} bytes",
                file.display(),
                bytes.len(),
                MAX_PHOTO_BYTES
            )));
        }

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let tx = pool.immediate()?;

        let mut appt = latest_for_client(&tx, &key, None)?
            .ok_or_else(|| AppError::ClientNotFound(name.clone()))?;

        let mut photo = Photo::from_bytes(&key, &file_name, mime, &bytes);
        photo.id = insert_photo(&tx, &photo)?;
        set_photo(&tx, appt.id, photo.id)?;
        appt.photo_id = Some(photo.id);

        audit(
            &tx,
            "photo",
            &appt.record_key(),
            &format!("Attached {} ({} bytes)", file_name, bytes.len()),
        )?;
        tx.commit()?;

        Ok((appt, photo))
    }
}
